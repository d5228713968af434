//! Record models for decoded flat-file lines.

use rust_decimal::Decimal;
use std::fmt;

/// Type code marking a salesperson line.
pub const SALESPERSON_CODE: &str = "001";

/// Type code marking a customer line.
pub const CUSTOMER_CODE: &str = "002";

/// Type code marking a sale line.
pub const SALE_CODE: &str = "003";

/// The kind of record a line encodes, read from its leading field.
///
/// Codes are stable identifiers: they never depend on the order of the
/// remaining fields. Any code outside the three known ones maps to
/// `Unknown`, so classifying a line always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Salesperson,
    Customer,
    Sale,
    Unknown,
}

impl TypeTag {
    /// Maps a leading field to its tag. Unrecognized codes yield `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            SALESPERSON_CODE => TypeTag::Salesperson,
            CUSTOMER_CODE => TypeTag::Customer,
            SALE_CODE => TypeTag::Sale,
            _ => TypeTag::Unknown,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Salesperson => "salesperson",
            TypeTag::Customer => "customer",
            TypeTag::Sale => "sale",
            TypeTag::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A decoded line, one variant per type tag.
#[derive(Debug, Clone)]
pub enum Record {
    Salesperson(Salesperson),
    Customer(Customer),
    Sale(Sale),

    /// Produced by the fallback decoder for unrecognized tags. Carries no
    /// payload; ingesting it affects no statistic.
    Unknown,
}

impl Record {
    /// The tag this record was decoded from.
    pub fn tag(&self) -> TypeTag {
        match self {
            Record::Salesperson(_) => TypeTag::Salesperson,
            Record::Customer(_) => TypeTag::Customer,
            Record::Sale(_) => TypeTag::Sale,
            Record::Unknown => TypeTag::Unknown,
        }
    }
}

/// A salesperson on the payroll.
#[derive(Debug, Clone)]
pub struct Salesperson {
    pub tax_id: String,
    pub name: String,
    pub salary: Decimal,
}

/// A customer and the area they do business in.
#[derive(Debug, Clone)]
pub struct Customer {
    pub tax_id: String,
    pub name: String,
    pub business_area: String,
}

/// A closed sale: its code, the salesperson who closed it, the items sold.
#[derive(Debug, Clone)]
pub struct Sale {
    pub code: String,
    pub salesperson: String,
    pub items: Vec<LineItem>,
}

/// One purchased item within a sale.
///
/// `quantity` stays the raw token: the input format does not pin it to an
/// integer and no statistic computes with it.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub id: String,
    pub quantity: String,
    pub price: Decimal,
}
