use std::fmt;
use std::path::{Path, PathBuf};

/// Remote JSON document used as the large-file fixture.
pub const FIXTURE_URL: &str = "https://raw.githubusercontent.com/json-iterator/test-data/master/large-file.json";
/// Where the downloaded JSON text is stored.
pub const FIXTURE_JSON_FILE: &str = "/tmp/big.json";
/// Where the CBOR encoding of the JSON fixture is stored.
pub const FIXTURE_CBOR_FILE: &str = "/tmp/big.cbor";

// ===== Configuration: source URL and output paths =====
/// Immutable locations used by both preparation steps.
///
/// The binary always runs with `FixtureConfig::default()`; tests build their own
/// with `FixtureConfig::new` pointing at a scratch directory and a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub url: String,
    pub json_path: PathBuf,
    pub cbor_path: PathBuf,
}

impl FixtureConfig {
    pub fn new(url: impl Into<String>, json_path: impl Into<PathBuf>, cbor_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            json_path: json_path.into(),
            cbor_path: cbor_path.into(),
        }
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    pub fn cbor_path(&self) -> &Path {
        &self.cbor_path
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::new(FIXTURE_URL, FIXTURE_JSON_FILE, FIXTURE_CBOR_FILE)
    }
}

// === Step results ===
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Download,
    Convert,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Download => write!(f, "download"),
            Step::Convert => write!(f, "convert"),
        }
    }
}

/// What an existence-gated step ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The file was absent and has been written with `bytes` bytes.
    Created { bytes: u64 },
    /// A file was already at the target path; nothing was touched.
    AlreadyPresent,
}

impl StepOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, StepOutcome::Created { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareReport {
    pub download: StepOutcome,
    pub convert: StepOutcome,
}

impl PrepareReport {
    /// True when at least one of the two steps wrote a file.
    pub fn performed_any(&self) -> bool {
        self.download.is_created() || self.convert.is_created()
    }

    pub fn outcome(&self, step: Step) -> StepOutcome {
        match step {
            Step::Download => self.download,
            Step::Convert => self.convert,
        }
    }

    pub fn summary(&self) -> String {
        [Step::Download, Step::Convert]
            .iter()
            .map(|step| match self.outcome(*step) {
                StepOutcome::Created { bytes } => format!("{}: wrote {} bytes", step, bytes),
                StepOutcome::AlreadyPresent => format!("{}: already present", step),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
