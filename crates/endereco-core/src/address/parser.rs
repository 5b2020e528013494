//! Rule-cascade address parser.

use std::borrow::Cow;

use tracing::debug;

use crate::models::address::{AddressField, ParsedAddress};
use crate::models::config::ExtractionConfig;
use crate::text::repair_encoding;

use super::rules::{
    resolve_state, split_street, CountryExtractor, FieldExtractor, LocalityExtractor,
    PostalCodeExtractor, StreetNumberExtractor,
};

/// Street name geocoders emit for roads without a name.
const UNNAMED_ROAD: &str = "Unnamed Road";

/// Result of address extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted address.
    pub address: ParsedAddress,
    /// Text the rules ran on, after encoding repair.
    pub text: String,
    /// Rules that matched, in the order they ran.
    pub matched_rules: Vec<&'static str>,
    /// Fields no rule could resolve.
    pub missing: Vec<AddressField>,
}

/// Trait for address parsing.
pub trait AddressParser {
    /// Parse an address from free text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser running the street, locality, postal code and country rules in order.
pub struct CascadeAddressParser {
    /// Repair Latin-1 mojibake before matching.
    repair_encoding: bool,
    /// Run the street splitter after extraction.
    split_street: bool,
    street: StreetNumberExtractor,
    locality: LocalityExtractor,
    postal_code: PostalCodeExtractor,
    country: CountryExtractor,
}

impl CascadeAddressParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            repair_encoding: true,
            split_street: true,
            street: StreetNumberExtractor::new(),
            locality: LocalityExtractor::new(),
            postal_code: PostalCodeExtractor::new(),
            country: CountryExtractor::new(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_encoding_repair(config.repair_encoding)
            .with_street_split(config.split_street)
    }

    /// Set encoding repair.
    pub fn with_encoding_repair(mut self, repair: bool) -> Self {
        self.repair_encoding = repair;
        self
    }

    /// Set street splitting.
    pub fn with_street_split(mut self, split: bool) -> Self {
        self.split_street = split;
        self
    }

    /// Parse and return only the address.
    pub fn parse_address(&self, text: &str) -> ParsedAddress {
        self.parse(text).address
    }

    fn extract_fields(&self, text: &str, matched_rules: &mut Vec<&'static str>) -> ParsedAddress {
        let mut address = ParsedAddress::default();

        let street_match = self.street.extract(text);
        let locality_start = street_match.as_ref().map_or(0, |m| m.end());
        if let Some(m) = street_match {
            matched_rules.push(m.rule);
            address.street = Some(m.value.street);
            address.number = m.value.number;
        }

        if let Some(m) = self.locality.extract_from(text, locality_start) {
            matched_rules.push(m.rule);
            address.neighborhood = m.value.neighborhood;
            address.city = Some(m.value.city);
            address.state = resolve_state(&m.value.state_code).map(str::to_string);

            if address.state.is_none() {
                debug!("Unknown state code {:?}", m.value.state_code);
            }
        }

        if let Some(m) = self.postal_code.extract(text) {
            matched_rules.push(m.rule);
            address.postal_code = Some(m.value);
        }

        if let Some(m) = self.country.extract(text) {
            matched_rules.push(m.rule);
            address.country = Some(m.value);
        }

        apply_guards(&mut address);
        address
    }
}

impl Default for CascadeAddressParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressParser for CascadeAddressParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let text = if self.repair_encoding {
            repair_encoding(text)
        } else {
            Cow::Borrowed(text)
        };

        let mut matched_rules = Vec::new();
        let mut address = self.extract_fields(&text, &mut matched_rules);

        if self.split_street {
            apply_street_split(&mut address);
        }

        let missing = address.missing_fields();
        if !missing.is_empty() {
            debug!("Unresolved fields {:?} in {:?}", missing, text);
        }

        ExtractionResult {
            address,
            text: text.into_owned(),
            matched_rules,
            missing,
        }
    }
}

/// Drop values produced by known extraction artifacts.
fn apply_guards(address: &mut ParsedAddress) {
    if address.street.as_deref() == Some(UNNAMED_ROAD) {
        address.street = None;
    }

    // A neighborhood repeating "<street> <number>" is a spill-over of the street span.
    let overlaps = match (&address.neighborhood, &address.street, &address.number) {
        (Some(neighborhood), Some(street), Some(number)) => {
            neighborhood.contains(street.as_str()) && neighborhood.contains(number.as_str())
        }
        _ => false,
    };
    if overlaps {
        address.neighborhood = None;
    }
}

/// Move descriptive text after the first preposition from `street` to `extra`.
///
/// A no-op when the street is unresolved or has no preposition, so running it
/// twice gives the same result as running it once.
pub fn apply_street_split(address: &mut ParsedAddress) {
    let Some(street) = address.street.as_deref() else {
        return;
    };

    let split = split_street(street);
    if let Some(extra) = split.extra {
        address.street = split.street;
        address.extra = Some(extra);
    }
}
