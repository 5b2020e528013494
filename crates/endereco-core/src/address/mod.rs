//! Address field extraction module.

mod parser;
pub mod rules;

pub use parser::{apply_street_split, AddressParser, CascadeAddressParser, ExtractionResult};
pub use rules::{resolve_state, split_street, StreetSplit};
