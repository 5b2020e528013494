//! Data models: parsed addresses, input rows and configuration.

pub mod address;
pub mod config;

pub use address::{AddressField, AddressRecord, EnrichmentResult, ParsedAddress, RawAddressRow};
pub use config::EnderecoConfig;
