//! CEP-based enrichment of incomplete addresses.
//!
//! A lookup is only attempted when street, neighborhood, city or state is
//! still unresolved after extraction. Lookup results never overwrite values
//! found in the text, and a failed lookup leaves the address untouched.

mod viacep;

pub use viacep::ViaCepClient;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::models::address::{AddressField, EnrichmentResult, ParsedAddress};

/// Trait for postal-code lookup services.
pub trait PostalLookup: Send + Sync {
    /// Look up the address registered for a CEP.
    fn lookup(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<EnrichmentResult, LookupError>> + Send;
}

/// What happened to a record during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnrichmentStatus {
    /// All enrichable fields were resolved from the text.
    NotNeeded,
    /// Enrichment is turned off.
    Disabled,
    /// No CEP was extracted, so there was nothing to look up.
    NoPostalCode,
    /// The lookup succeeded; `filled` lists the fields it provided.
    Applied { filled: Vec<AddressField> },
    /// The lookup failed; placeholders were kept.
    Failed { reason: String },
}

/// Copy lookup values into fields that are still unresolved.
///
/// Returns the fields that were filled.
pub fn apply_enrichment(address: &mut ParsedAddress, result: EnrichmentResult) -> Vec<AddressField> {
    let EnrichmentResult {
        street,
        neighborhood,
        city,
        state,
    } = result;

    [
        (AddressField::Street, street),
        (AddressField::Neighborhood, neighborhood),
        (AddressField::City, city),
        (AddressField::State, state),
    ]
    .into_iter()
    .filter_map(|(field, value)| address.fill(field, value).then_some(field))
    .collect()
}

/// Enrich a single address if it needs it.
pub async fn enrich<L: PostalLookup>(
    lookup: &L,
    address: &mut ParsedAddress,
    timeout: Duration,
) -> EnrichmentStatus {
    if !address.needs_enrichment() {
        return EnrichmentStatus::NotNeeded;
    }

    let Some(postal_code) = address.postal_code.clone() else {
        debug!("Skipping lookup, no CEP in address");
        return EnrichmentStatus::NoPostalCode;
    };

    let error = match tokio::time::timeout(timeout, lookup.lookup(&postal_code)).await {
        Ok(Ok(result)) => {
            let filled = apply_enrichment(address, result);
            debug!("CEP {} filled {:?}", postal_code, filled);
            return EnrichmentStatus::Applied { filled };
        }
        Ok(Err(e)) => e,
        Err(_) => LookupError::Timeout(timeout),
    };

    warn!("CEP lookup failed for {}: {}", postal_code, error);
    EnrichmentStatus::Failed {
        reason: error.to_string(),
    }
}
