//! The fixture preparation procedure.
//!
//! Two existence-gated steps, run in order:
//! - download: fetch the JSON fixture unless a file is already at its path
//! - convert: encode the JSON fixture as CBOR unless a file is already at its path

pub mod convert;
pub mod download;

use anyhow::Result;

use crate::models::{FixtureConfig, PrepareReport};

pub use convert::ensure_cbor_fixture;
pub use download::ensure_json_fixture;

/// Runs both steps and reports what each one did. The first failure aborts the run.
pub async fn prepare(cfg: &FixtureConfig) -> Result<PrepareReport> {
    prepare_with(&reqwest::Client::new(), cfg).await
}

/// Same as `prepare`, with a caller-supplied HTTP client.
pub async fn prepare_with(client: &reqwest::Client, cfg: &FixtureConfig) -> Result<PrepareReport> {
    let download = ensure_json_fixture(client, cfg).await?;
    let convert = ensure_cbor_fixture(cfg)?;
    let report = PrepareReport { download, convert };
    log::debug!("prepare finished: {}", report.summary());
    Ok(report)
}
