//! Process command - extract and enrich every address in a file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use endereco_core::output::{to_csv, to_json};
use endereco_core::{AddressPipeline, AddressRecord, PipelineSummary, ViaCepClient};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input spreadsheet or CSV file (default: input.download_path)
    input: Option<PathBuf>,

    /// Output file (default: output.path, "-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip CEP lookups
    #[arg(long)]
    no_enrich: bool,

    /// Maximum lookups in flight
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-lookup timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Worksheet index
    #[arg(long)]
    sheet: Option<usize>,

    /// Leading rows to skip
    #[arg(long)]
    header_rows: Option<usize>,

    /// Zero-based column holding the address
    #[arg(long)]
    column: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of records
    Json,
    /// CSV with a header row
    Csv,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = load_config(config_path)?;

    if args.no_enrich {
        config.enrichment.enabled = false;
    }
    if let Some(concurrency) = args.concurrency {
        config.enrichment.max_concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout {
        config.enrichment.timeout_secs = timeout;
    }
    if let Some(sheet) = args.sheet {
        config.input.sheet_index = sheet;
    }
    if let Some(header_rows) = args.header_rows {
        config.input.header_rows = header_rows;
    }
    if let Some(column) = args.column {
        config.input.address_column = column;
    }
    config.validate()?;

    let input = args.input.unwrap_or_else(|| config.input.download_path.clone());
    if !input.exists() {
        anyhow::bail!(
            "Input file not found: {}. Run 'endereco fetch' first.",
            input.display()
        );
    }

    let to_stdout = args.output.as_deref().is_some_and(|p| p.as_os_str() == "-");
    let output_path = args.output.unwrap_or_else(|| config.output.path.clone());

    info!("Processing file: {}", input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let lookup = if config.enrichment.enabled {
        Some(ViaCepClient::new(&config.enrichment)?)
    } else {
        None
    };
    let pipeline = AddressPipeline::from_config(&config, lookup);

    pb.set_message(format!("Processing {}...", input.display()));
    let results = pipeline.process_file(&input, &config.input).await;
    pb.finish_and_clear();
    let results = results?;
    debug!("Pipeline produced {} records", results.len());

    let records: Vec<AddressRecord> = results.iter().map(|r| r.to_record()).collect();
    let content = match args.format {
        OutputFormat::Json => to_json(&records, config.output.pretty)?,
        OutputFormat::Csv => to_csv(&records)?,
    };

    let summary = PipelineSummary::from_results(&results);

    if to_stdout {
        println!("{}", content);
        print_summary(&summary, start, true);
        return Ok(());
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, content)?;

    println!(
        "{} Output written to {}",
        style("✓").green(),
        output_path.display()
    );
    print_summary(&summary, start, false);

    Ok(())
}

fn print_summary(summary: &PipelineSummary, start: Instant, to_stderr: bool) {
    let lines = [
        format!(
            "{} Processed {} addresses in {:?}",
            style("✓").green(),
            summary.records,
            start.elapsed()
        ),
        format!(
            "   {} complete, {} enriched, {} lookups failed, {} without CEP, {} not enriched",
            style(summary.complete).green(),
            style(summary.enriched).cyan(),
            style(summary.lookup_failed).red(),
            style(summary.no_postal_code).yellow(),
            style(summary.not_enriched).dim()
        ),
    ];

    for line in lines {
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
