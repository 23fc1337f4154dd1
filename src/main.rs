use colored::Colorize;
use fixture_prep::{prepare, utils, FixtureConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = FixtureConfig::default();
    let report = prepare(&cfg).await?;

    let json_mb = utils::file_size_mb(cfg.json_path()).unwrap_or_default();
    let cbor_mb = utils::file_size_mb(cfg.cbor_path()).unwrap_or_default();
    let line = format!(
        "Fixtures ready: {} ({:.2} MB), {} ({:.2} MB)",
        cfg.json_path().display(),
        json_mb,
        cfg.cbor_path().display(),
        cbor_mb
    );
    if report.performed_any() {
        println!("{}", line.green());
    } else {
        println!("{}", line);
    }
    Ok(())
}
