//! Fetches the JSON fixture over HTTP.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use crate::models::{FixtureConfig, StepOutcome};
use crate::utils;

/// Makes sure the JSON fixture exists at `cfg.json_path`.
///
/// Behavior:
/// - If any file is already at the path, returns AlreadyPresent without touching the network.
/// - Otherwise GETs `cfg.url` (redirects are followed by the client), decodes the body as
///   UTF-8 and writes it verbatim to the path.
///
/// The whole body is received and decoded before the file is opened, so a failed request
/// leaves no file behind. A failed write may leave a truncated one.
pub async fn ensure_json_fixture(client: &reqwest::Client, cfg: &FixtureConfig) -> Result<StepOutcome> {
    let path = cfg.json_path();
    if utils::fixture_present(path) {
        log::debug!("json fixture already at {}, skipping download", path.display());
        return Ok(StepOutcome::AlreadyPresent);
    }

    println!(" - Downloading json test file: {} -> {}", cfg.url, path.display());
    let resp = client
        .get(cfg.url.as_str())
        .send()
        .await
        .with_context(|| format!("request to {} failed", cfg.url))?;
    log::debug!("GET {} -> {} (final url {})", cfg.url, resp.status(), resp.url());
    let resp = resp
        .error_for_status()
        .map_err(|e| anyhow!("HTTP {} from {}", e.status().unwrap_or_default(), cfg.url))?;
    let body = resp
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from {}", cfg.url))?;
    let text = String::from_utf8(body.to_vec())
        .with_context(|| format!("response body from {} is not valid UTF-8", cfg.url))?;

    let bytes = utils::write_text(path, &text)?;
    log::info!("wrote {} bytes to {}", bytes, path.display());
    println!("{}", format!("   done: {} bytes", bytes).green());
    Ok(StepOutcome::Created { bytes })
}
