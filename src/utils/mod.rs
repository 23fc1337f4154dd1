//! Utilities: existence gate, file writes, and the JSON/CBOR codec helpers.
//!
//! This module holds the plain filesystem and codec work behind the two
//! preparation steps in `api`:
//! - `fixture_present` is the cache test: a file at the path, or not
//! - `write_text` / `write_bytes` create or truncate the target file
//! - `read_json_value` parses the JSON fixture into a serde_json::Value tree
//! - `encode_cbor` / `read_cbor_value` turn that tree into CBOR and back
//!
//! Encoding goes through minicbor so floats can be pinned to 8-byte doubles;
//! ciborium always shrinks them. Decoding still uses ciborium.
//!
//! Object key order follows the source document (serde_json `preserve_order`),
//! so CBOR maps come out in the same order as the JSON text.
//!
//! Links:
//! - minicbor docs: https://docs.rs/minicbor
//! - ciborium docs: https://docs.rs/ciborium
//! - CBOR: https://www.rfc-editor.org/rfc/rfc8949

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use minicbor::Encoder;
use std::io::BufReader;
use std::path::Path;

/// Returns true when a file already exists at `path`.
///
/// This is only an existence check: the content is never inspected, so a stale or
/// corrupt file still counts as present.
pub fn fixture_present(path: &Path) -> bool {
    path.exists()
}

/// Writes `text` to `path` as-is, creating or truncating the file.
pub fn write_text(path: &Path, text: &str) -> Result<u64> {
    write_bytes(path, text.as_bytes())
}

/// Writes `bytes` to `path`, creating or truncating the file. Returns the byte count.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<u64> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(bytes.len() as u64)
}

/// Opens and parses the JSON file at `path` into a value tree.
pub fn read_json_value(path: &Path) -> Result<Value> {
    let f = fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("failed to parse JSON from {}", path.display()))?;
    Ok(value)
}

/// Encodes a value tree as CBOR into memory.
///
/// Integers use the smallest head that holds them. Every other number is written as a
/// full 8-byte double (`0xfb`): the parser tests that read this fixture reject half floats.
/// Arrays, maps and strings always carry definite lengths.
pub fn encode_cbor(value: &Value) -> Result<Vec<u8>> {
    let mut e = Encoder::new(Vec::new());
    encode_value(&mut e, value).map_err(|err| anyhow::anyhow!("CBOR encode failed: {}", err))?;
    Ok(e.into_writer())
}

fn encode_value<W: minicbor::encode::Write>(
    e: &mut Encoder<W>,
    value: &Value,
) -> Result<(), minicbor::encode::Error<W::Error>> {
    match value {
        Value::Null => {
            e.null()?;
        }
        Value::Bool(b) => {
            e.bool(*b)?;
        }
        Value::Number(n) => match (n.as_u64(), n.as_i64()) {
            (Some(u), _) => {
                e.u64(u)?;
            }
            (None, Some(i)) => {
                e.i64(i)?;
            }
            (None, None) => {
                e.f64(n.as_f64().unwrap_or(f64::NAN))?;
            }
        },
        Value::String(s) => {
            e.str(s)?;
        }
        Value::Array(items) => {
            e.array(items.len() as u64)?;
            for item in items {
                encode_value(e, item)?;
            }
        }
        Value::Object(map) => {
            e.map(map.len() as u64)?;
            for (k, v) in map {
                e.str(k)?;
                encode_value(e, v)?;
            }
        }
    }
    Ok(())
}

/// Encodes `value` as CBOR and writes it to `path`, creating or truncating the file.
pub fn write_cbor(path: &Path, value: &Value) -> Result<u64> {
    let bytes = encode_cbor(value)?;
    write_bytes(path, &bytes)
}

/// Decodes the CBOR file at `path` back into a JSON value tree.
pub fn read_cbor_value(path: &Path) -> Result<Value> {
    let f = fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    ciborium::de::from_reader(BufReader::new(f))
        .map_err(|e| anyhow::anyhow!("CBOR decode of {} failed: {}", path.display(), e))
}

/// Size of the file at `path` in MB, or None when it cannot be stat'ed.
pub fn file_size_mb(path: &Path) -> Option<f64> {
    fs::metadata(path).ok().map(|m| (m.len() as f64) / (1024.0 * 1024.0))
}
