//! Rule-based field extractors for Brazilian addresses.
//!
//! Each extractor is a pure function of the input text. The parser runs them
//! in a fixed order and falls back between them when a pattern does not match.

pub mod country;
pub mod locality;
pub mod patterns;
pub mod postal;
pub mod prepositions;
pub mod states;
pub mod street;

pub use country::{extract_country, CountryExtractor};
pub use locality::{extract_locality, Locality, LocalityExtractor};
pub use postal::{extract_postal_code, postal_code_digits, PostalCodeExtractor};
pub use prepositions::{split_street, StreetSplit, PREPOSITIONS};
pub use states::{resolve_state, BRAZIL_STATES};
pub use street::{extract_street_number, StreetNumber, StreetNumberExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Name of the rule, used in logs.
    fn name(&self) -> &'static str;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;
}

/// A rule match together with the span of text it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range of the match in the source text.
    pub position: (usize, usize),
    /// Rule that produced the match.
    pub rule: &'static str,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, start: usize, end: usize) -> Self {
        Self {
            value,
            position: (start, end),
            rule,
        }
    }

    /// Shift the match position by `offset` bytes.
    pub fn offset_by(mut self, offset: usize) -> Self {
        self.position = (self.position.0 + offset, self.position.1 + offset);
        self
    }

    /// End of the consumed span.
    pub fn end(&self) -> usize {
        self.position.1
    }
}

/// Trim a captured group and drop it if nothing is left.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
