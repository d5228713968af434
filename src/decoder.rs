//! Line decoders and tag dispatch.
//!
//! Every input line carries its type tag in the leading field. `Decoder`
//! splits just far enough to read that tag, then hands the full line to
//! the matching decode function, which re-splits with whatever separators
//! it needs. Unrecognized tags fall through to [`Record::Unknown`], so
//! classification itself never fails; a malformed field inside one of the
//! three known record types does fail, and aborts that file's cycle.

use crate::config::Separators;
use crate::error::DecodeError;
use crate::record::{Customer, LineItem, Record, Sale, Salesperson, TypeTag};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decodes raw lines into typed records.
#[derive(Debug, Clone)]
pub struct Decoder {
    separators: Separators,
}

impl Decoder {
    /// Creates a decoder for the given separator set.
    pub fn new(separators: Separators) -> Self {
        Decoder { separators }
    }

    /// Classifies a line by its leading tag and decodes it.
    ///
    /// Every line produces exactly one record: unknown tags (and empty
    /// lines) yield [`Record::Unknown`] rather than an error.
    pub fn classify(&self, line: &str) -> Result<Record, DecodeError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let code = line.split(self.separators.field).next().unwrap_or("");

        match TypeTag::from_code(code) {
            TypeTag::Salesperson => self.decode_salesperson(line),
            TypeTag::Customer => self.decode_customer(line),
            TypeTag::Sale => self.decode_sale(line),
            TypeTag::Unknown => Ok(Record::Unknown),
        }
    }

    fn decode_salesperson(&self, line: &str) -> Result<Record, DecodeError> {
        let fields = self.split_fields(line, TypeTag::Salesperson)?;
        let salary = parse_decimal("salary", fields[3])?;
        Ok(Record::Salesperson(Salesperson {
            tax_id: fields[1].to_string(),
            name: fields[2].to_string(),
            salary,
        }))
    }

    fn decode_customer(&self, line: &str) -> Result<Record, DecodeError> {
        let fields = self.split_fields(line, TypeTag::Customer)?;
        Ok(Record::Customer(Customer {
            tax_id: fields[1].to_string(),
            name: fields[2].to_string(),
            business_area: fields[3].to_string(),
        }))
    }

    fn decode_sale(&self, line: &str) -> Result<Record, DecodeError> {
        let fields = self.split_fields(line, TypeTag::Sale)?;
        let items = self.decode_items(fields[2])?;
        Ok(Record::Sale(Sale {
            code: fields[1].to_string(),
            salesperson: fields[3].to_string(),
            items,
        }))
    }

    /// Decodes a sale's item block into its line items.
    ///
    /// The block nests two delimiter levels: items are joined by the
    /// inter-item separator and each item's components by the item
    /// separator. Rewriting the former as the latter collapses the block
    /// into one flat token stream that reads off as consecutive
    /// (id, quantity, price) triples. A trailing group of fewer than
    /// three tokens is dropped.
    fn decode_items(&self, block: &str) -> Result<Vec<LineItem>, DecodeError> {
        let item_separator = self.separators.item.to_string();
        let normalized = block.replace(self.separators.inter_item, &item_separator);
        let tokens: Vec<&str> = normalized.split(self.separators.item).collect();

        let mut items = Vec::with_capacity(tokens.len() / 3);
        for triple in tokens.chunks_exact(3) {
            let price = parse_decimal("price", triple[2].trim_end_matches(']'))?;
            items.push(LineItem {
                id: triple[0].trim_start_matches('[').to_string(),
                quantity: triple[1].to_string(),
                price,
            });
        }
        Ok(items)
    }

    /// Splits a line into its fields, requiring the four every record
    /// type shares (the tag plus three payload fields).
    fn split_fields<'a>(&self, line: &'a str, tag: TypeTag) -> Result<Vec<&'a str>, DecodeError> {
        let fields: Vec<&str> = line.split(self.separators.field).collect();
        if fields.len() < 4 {
            return Err(DecodeError::MissingField {
                tag,
                index: fields.len() + 1,
            });
        }
        Ok(fields)
    }
}

fn parse_decimal(field: &'static str, token: &str) -> Result<Decimal, DecodeError> {
    Decimal::from_str(token.trim()).map_err(|source| DecodeError::InvalidNumber {
        field,
        value: token.to_string(),
        source,
    })
}
