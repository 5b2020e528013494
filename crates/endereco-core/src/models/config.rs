//! Configuration structures for the address pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::EnderecoError;

/// Main configuration for the endereco pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnderecoConfig {
    /// Address source configuration.
    pub input: InputConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// CEP lookup configuration.
    pub enrichment: EnrichmentConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Address source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Spreadsheet downloaded by `endereco fetch`.
    pub source_url: String,

    /// Local path of the downloaded spreadsheet.
    pub download_path: PathBuf,

    /// Worksheet index (0 = first sheet).
    pub sheet_index: usize,

    /// Number of leading header rows to skip.
    pub header_rows: usize,

    /// Zero-based column holding the address text.
    pub address_column: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source_url: "https://docs.google.com/spreadsheets/d/1Ln_v12Zjf-w0l6h9_Nh9jE27k4JimqXWzh-y7AVwqcI/export?format=xlsx".to_string(),
            download_path: PathBuf::from("dataset.xlsx"),
            sheet_index: 0,
            header_rows: 2,
            address_column: 1,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Repair UTF-8 text that was decoded as Latin-1 before extracting.
    pub repair_encoding: bool,

    /// Split descriptive text off the street at the first preposition.
    pub split_street: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            repair_encoding: true,
            split_street: true,
        }
    }
}

/// CEP lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Query the lookup service for incomplete addresses.
    pub enabled: bool,

    /// Base URL of the ViaCEP-compatible service.
    pub base_url: String,

    /// Per-call timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of lookups in flight.
    pub max_concurrency: usize,

    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://viacep.com.br/ws".to_string(),
            timeout_secs: 10,
            max_concurrency: 8,
            user_agent: "endereco/0.1.0".to_string(),
        }
    }
}

impl EnrichmentConfig {
    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output file.
    pub path: PathBuf,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dataset_processado.json"),
            pretty: true,
        }
    }
}

impl EnderecoConfig {
    /// Check settings the pipeline cannot run with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.enrichment.max_concurrency == 0 {
            return Err(EnderecoError::Config(
                "enrichment.max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.enrichment.timeout_secs == 0 {
            return Err(EnderecoError::Config(
                "enrichment.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.enrichment.enabled && self.enrichment.base_url.trim().is_empty() {
            return Err(EnderecoError::Config(
                "enrichment.base_url is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
