//! Parse command - extract a single address.

use clap::Args;
use serde::Serialize;

use endereco_core::enrichment::enrich;
use endereco_core::{AddressField, AddressParser, AddressRecord, CascadeAddressParser, EnrichmentStatus, ViaCepClient};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Address text
    #[arg(required = true)]
    address: String,

    /// Fill missing fields through a CEP lookup
    #[arg(long)]
    enrich: bool,

    /// Show matched rules and missing fields
    #[arg(long)]
    explain: bool,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Explained {
    #[serde(flatten)]
    record: AddressRecord,
    /// Text the rules ran on, after encoding repair.
    input: String,
    matched_rules: Vec<&'static str>,
    missing: Vec<AddressField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enrichment: Option<EnrichmentStatus>,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let parser = CascadeAddressParser::from_config(&config.extraction);
    let result = parser.parse(&args.address);
    let mut address = result.address;

    let enrichment = if args.enrich {
        let client = ViaCepClient::new(&config.enrichment)?;
        Some(enrich(&client, &mut address, config.enrichment.timeout()).await)
    } else {
        None
    };

    let record = address.to_record();
    let output = if args.explain {
        let explained = Explained {
            record,
            input: result.text,
            matched_rules: result.matched_rules,
            missing: address.missing_fields(),
            enrichment,
        };
        to_string(&explained, args.compact)?
    } else {
        to_string(&record, args.compact)?
    };

    println!("{}", output);

    Ok(())
}

fn to_string<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
