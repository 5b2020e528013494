//! Core library for Brazilian address extraction.
//!
//! This crate provides:
//! - Rule-based extraction of street, number, neighborhood, CEP, city, state and country
//! - Street splitting at the first preposition into street + descriptive extra
//! - CEP enrichment of incomplete addresses through ViaCEP
//! - A batch pipeline with bounded, order-preserving concurrent enrichment
//! - Reading address rows from spreadsheets and CSV files

pub mod address;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod text;

pub use address::{AddressParser, CascadeAddressParser, ExtractionResult};
pub use enrichment::{EnrichmentStatus, PostalLookup, ViaCepClient};
pub use error::{EnderecoError, LookupError, Result, SourceError};
pub use models::address::{AddressField, AddressRecord, EnrichmentResult, ParsedAddress, RawAddressRow};
pub use models::config::EnderecoConfig;
pub use pipeline::{AddressPipeline, PipelineSummary, ProcessedAddress};
pub use source::read_rows;
