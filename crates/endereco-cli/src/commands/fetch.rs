//! Fetch command - download the address spreadsheet.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use console::style;
use futures_util::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::load_config;

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// Spreadsheet URL (default: input.source_url)
    #[arg(long)]
    url: Option<String>,

    /// Destination file (default: input.download_path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: FetchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let url = args.url.unwrap_or(config.input.source_url);
    let path = args.output.unwrap_or(config.input.download_path);

    if path.exists() && !args.force {
        println!(
            "{} {} already exists. Use --force to download again.",
            style("ℹ").blue(),
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let client = reqwest::Client::builder()
        .user_agent(config.enrichment.user_agent.as_str())
        .connect_timeout(Duration::from_secs(30))
        .build()?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message("Downloading...");

    info!("Downloading {} to {}", url, path.display());

    match download_file(&client, &url, &path, &pb).await {
        Ok(bytes) => {
            pb.finish_and_clear();
            println!(
                "{} Downloaded {} bytes to {}",
                style("✓").green(),
                bytes,
                path.display()
            );
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message(format!("{} download failed", style("✗").red()));
            Err(e)
        }
    }
}

/// Download `url` into `path`.
async fn download_file(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
    pb: &ProgressBar,
) -> anyhow::Result<u64> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP {}", response.status());
    }

    if let Some(content_length) = response.content_length() {
        pb.set_length(content_length);
    }

    save_stream(response.bytes_stream(), path, pb).await
}

/// Save a byte stream to `path` through a temporary file.
///
/// The temporary file is removed on every failure after it was created.
async fn save_stream<S, B, E>(stream: S, path: &Path, pb: &ProgressBar) -> anyhow::Result<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::error::Error + Send + Sync + 'static,
{
    let temp_path = temp_path(path);
    let result = write_stream(stream, &temp_path, path, pb).await;

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

async fn write_stream<S, B, E>(
    mut stream: S,
    temp_path: &Path,
    path: &Path,
    pb: &ProgressBar,
) -> anyhow::Result<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut file = File::create(temp_path)?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let bytes = chunk.as_ref();
        file.write_all(bytes)?;
        downloaded += bytes.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()?;
    drop(file);

    fs::rename(temp_path, path)?;

    Ok(downloaded)
}
