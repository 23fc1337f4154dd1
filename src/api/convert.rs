//! Converts the JSON fixture into its CBOR form.

use anyhow::Result;
use colored::Colorize;

use crate::models::{FixtureConfig, StepOutcome};
use crate::utils;

/// Makes sure the CBOR fixture exists at `cfg.cbor_path`.
///
/// When absent, the JSON fixture is parsed in full before the CBOR file is created, so a
/// missing or malformed JSON fixture fails the step without leaving an empty output file.
/// An existing CBOR file is never compared against the JSON fixture.
pub fn ensure_cbor_fixture(cfg: &FixtureConfig) -> Result<StepOutcome> {
    let cbor_path = cfg.cbor_path();
    if utils::fixture_present(cbor_path) {
        log::debug!("cbor fixture already at {}, skipping conversion", cbor_path.display());
        return Ok(StepOutcome::AlreadyPresent);
    }

    let json_path = cfg.json_path();
    println!(" - Converting to cbor: {} -> {}", json_path.display(), cbor_path.display());
    let value = utils::read_json_value(json_path)?;
    let bytes = utils::write_cbor(cbor_path, &value)?;
    log::info!("wrote {} bytes of CBOR to {}", bytes, cbor_path.display());
    println!("{}", format!("   done: {} bytes", bytes).green());
    Ok(StepOutcome::Created { bytes })
}
