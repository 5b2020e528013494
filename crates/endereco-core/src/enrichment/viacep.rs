//! ViaCEP lookup client.

use serde::Deserialize;
use tracing::debug;

use crate::address::rules::{postal_code_digits, resolve_state};
use crate::error::LookupError;
use crate::models::address::EnrichmentResult;
use crate::models::config::EnrichmentConfig;

use super::PostalLookup;

/// HTTP client for `GET {base_url}/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Build a client from enrichment settings.
    pub fn new(config: &EnrichmentConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lookup URL for an 8-digit CEP.
    pub fn lookup_url(&self, digits: &str) -> String {
        format!("{}/{}/json/", self.base_url, digits)
    }
}

impl PostalLookup for ViaCepClient {
    async fn lookup(&self, postal_code: &str) -> Result<EnrichmentResult, LookupError> {
        let digits = postal_code_digits(postal_code)
            .ok_or_else(|| LookupError::InvalidPostalCode(postal_code.to_string()))?;

        let url = self.lookup_url(&digits);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: ViaCepResponse = response.json().await?;
        body.into_result(&digits)
    }
}

/// ViaCEP response body. Unknown CEPs come back as `{"erro": true}`.
#[derive(Debug, Default, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn into_result(self, digits: &str) -> Result<EnrichmentResult, LookupError> {
        match self.erro {
            None | Some(serde_json::Value::Bool(false)) => {}
            Some(_) => return Err(LookupError::NotFound(digits.to_string())),
        }

        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(EnrichmentResult {
            street: present(self.logradouro),
            neighborhood: present(self.bairro),
            city: present(self.localidade),
            // Expanded like codes found in the text, so both paths agree.
            state: present(self.uf)
                .and_then(|uf| resolve_state(&uf))
                .map(str::to_string),
        })
    }
}
