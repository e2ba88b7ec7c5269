//! Domain types: the price record and its column index.

mod column;
mod record;

pub use column::{Column, PRICE_COLUMNS};
pub use record::PriceRecord;
