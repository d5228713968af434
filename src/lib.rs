//! # Sales Report Engine
//!
//! A flat-file processor that decodes business records (salespeople,
//! customers, sales) from delimiter-encoded text files and produces a
//! four-line summary report per input file.
//!
//! ## Design Principles
//!
//! - **Tag dispatch with a safe fallback**: the first field of every line
//!   selects its decoder; unrecognized tags decode to a no-op record, so
//!   one odd line never aborts a batch
//! - **File-scoped aggregation**: each input file gets a fresh
//!   accumulator, dropped with the cycle; reports cannot mix files
//! - **Exact decimals**: prices and salaries use `rust_decimal` rather
//!   than binary floats
//! - **All-or-nothing reports**: a report is rendered in full before its
//!   output file is created
//!
//! ## Example
//!
//! ```
//! use sales_report_engine::{ReportEngine, Separators};
//! use std::io::Cursor;
//!
//! let data = "001çA123çAlice Smithç50000\n003çS1ç[it1-2-10.5]çAlice Smith\n";
//! let mut engine = ReportEngine::new(Separators::default());
//! engine.process_lines(Cursor::new(data)).unwrap();
//! engine.write_report(std::io::stdout()).unwrap();
//! ```

pub mod aggregate;
pub mod config;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod watch;

pub use aggregate::Aggregator;
pub use config::{Separators, WatchConfig};
pub use decoder::Decoder;
pub use engine::ReportEngine;
pub use error::{DecodeError, EngineError, Result};
pub use record::{Customer, LineItem, Record, Sale, Salesperson, TypeTag};
pub use report::NO_SALES_FOUND;
pub use watch::DirectoryWatcher;
