//! Batch pipeline: extraction and splitting per row, then concurrent enrichment.

use std::path::Path;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::address::{AddressParser, CascadeAddressParser};
use crate::enrichment::{enrich, EnrichmentStatus, PostalLookup};
use crate::models::address::{AddressRecord, ParsedAddress, RawAddressRow};
use crate::models::config::{EnderecoConfig, InputConfig};
use crate::source::read_rows;

/// An address that went through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedAddress {
    /// Source row index.
    pub row: usize,
    /// Extracted (and possibly enriched) address.
    pub address: ParsedAddress,
    /// Enrichment outcome.
    pub enrichment: EnrichmentStatus,
}

impl ProcessedAddress {
    pub fn to_record(&self) -> AddressRecord {
        self.address.to_record()
    }
}

/// Counts over a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub records: usize,
    pub complete: usize,
    pub enriched: usize,
    pub lookup_failed: usize,
    pub no_postal_code: usize,
    pub not_enriched: usize,
}

impl PipelineSummary {
    pub fn from_results(results: &[ProcessedAddress]) -> Self {
        let mut summary = Self {
            records: results.len(),
            ..Default::default()
        };

        for result in results {
            match result.enrichment {
                EnrichmentStatus::NotNeeded => summary.complete += 1,
                EnrichmentStatus::Applied { .. } => summary.enriched += 1,
                EnrichmentStatus::Failed { .. } => summary.lookup_failed += 1,
                EnrichmentStatus::NoPostalCode => summary.no_postal_code += 1,
                EnrichmentStatus::Disabled => summary.not_enriched += 1,
            }
        }

        summary
    }
}

/// Address pipeline with an optional CEP lookup.
pub struct AddressPipeline<L> {
    parser: CascadeAddressParser,
    lookup: Option<L>,
    max_concurrency: usize,
    timeout: Duration,
}

impl<L: PostalLookup> AddressPipeline<L> {
    /// Create a pipeline without enrichment.
    pub fn new(parser: CascadeAddressParser) -> Self {
        Self {
            parser,
            lookup: None,
            max_concurrency: 8,
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a pipeline from configuration. The lookup is used only if
    /// enrichment is enabled.
    pub fn from_config(config: &EnderecoConfig, lookup: Option<L>) -> Self {
        let pipeline = Self::new(CascadeAddressParser::from_config(&config.extraction))
            .with_max_concurrency(config.enrichment.max_concurrency)
            .with_timeout(config.enrichment.timeout());

        match lookup {
            Some(lookup) if config.enrichment.enabled => pipeline.with_lookup(lookup),
            _ => pipeline,
        }
    }

    /// Set the lookup service.
    pub fn with_lookup(mut self, lookup: L) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Set the maximum number of lookups in flight.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Set the per-lookup timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extract and split one row. Rows without text produce nothing.
    pub fn extract(&self, row: RawAddressRow) -> Option<ProcessedAddress> {
        let text = row.text?;
        let result = self.parser.parse(&text);

        let enrichment = if result.address.needs_enrichment() {
            EnrichmentStatus::Disabled
        } else {
            EnrichmentStatus::NotNeeded
        };

        Some(ProcessedAddress {
            row: row.index,
            address: result.address,
            enrichment,
        })
    }

    /// Extract every row, keeping input order and dropping empty rows.
    pub fn extract_all(&self, rows: Vec<RawAddressRow>) -> Vec<ProcessedAddress> {
        rows.into_iter().filter_map(|row| self.extract(row)).collect()
    }

    /// Look up every incomplete record, at most `max_concurrency` at a time.
    ///
    /// Records are updated in place, so their order never changes.
    pub async fn enrich_all(&self, records: &mut [ProcessedAddress]) {
        let Some(lookup) = &self.lookup else {
            return;
        };

        let pending = records
            .iter()
            .filter(|r| r.address.needs_enrichment())
            .count();
        if pending == 0 {
            return;
        }

        info!(
            "Looking up {} of {} addresses ({} at a time)",
            pending,
            records.len(),
            self.max_concurrency
        );

        let semaphore = Semaphore::new(self.max_concurrency);
        let tasks = records
            .iter_mut()
            .filter(|r| r.address.needs_enrichment())
            .map(|record| {
                let semaphore = &semaphore;
                async move {
                    let _permit = semaphore.acquire().await;
                    record.enrichment = enrich(lookup, &mut record.address, self.timeout).await;
                }
            });

        join_all(tasks).await;
    }

    /// Read rows from a spreadsheet or CSV file and run the pipeline over them.
    pub async fn process_file(
        &self,
        path: &Path,
        input: &InputConfig,
    ) -> crate::Result<Vec<ProcessedAddress>> {
        let rows = read_rows(path, input)?;
        Ok(self.run(rows).await)
    }

    /// Run the full pipeline over a batch of rows.
    pub async fn run(&self, rows: Vec<RawAddressRow>) -> Vec<ProcessedAddress> {
        let start = Instant::now();
        let row_count = rows.len();

        let mut records = self.extract_all(rows);
        debug!(
            "Extracted {} addresses from {} rows in {:?}",
            records.len(),
            row_count,
            start.elapsed()
        );

        self.enrich_all(&mut records).await;

        info!("Processed {} addresses in {:?}", records.len(), start.elapsed());
        records
    }
}
