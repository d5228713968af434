//! Runtime configuration threaded through the engine and the watcher.

use std::path::PathBuf;
use std::time::Duration;

/// The three delimiter characters a line is decoded with.
///
/// Callers must supply three distinct characters; the decoders do not
/// police this and an ambiguous split is the caller's problem.
#[derive(Debug, Clone, Copy)]
pub struct Separators {
    /// Delimits the top-level fields of a line.
    pub field: char,

    /// Delimits the components (id, quantity, price) of one sale item.
    pub item: char,

    /// Delimits successive items within a sale's item block.
    pub inter_item: char,
}

impl Default for Separators {
    fn default() -> Self {
        Separators {
            field: 'ç',
            item: '-',
            inter_item: ',',
        }
    }
}

/// Where and how often the watcher scans for input files.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory scanned for input files.
    pub input_dir: PathBuf,

    /// Directory the reports are written to.
    pub output_dir: PathBuf,

    /// Suffix (including the dot) a file name must end with to be picked up.
    pub extension: String,

    /// Pause between two directory scans.
    pub poll_interval: Duration,
}
