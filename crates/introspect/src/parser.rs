//! Loading of flattened introspection results from disk.

use crate::error::{ExportError, ExportResult};
use crate::types::IntrospectionResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use xz2::read::XzDecoder;

/// Load a flattened result from a filesystem path.
///
/// Files ending in `.xz` are run through the LZMA decoder first; anything
/// else is read as a plain JSON node array.
pub fn parse_result_file(path: impl AsRef<Path>) -> ExportResult<IntrospectionResult> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| ExportError::Io(format!("opening {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let mut buf = Vec::new();

    let path_str = path.to_string_lossy().to_lowercase();
    if path_str.ends_with(".xz") {
        let mut decoder = XzDecoder::new(reader);
        decoder
            .read_to_end(&mut buf)
            .map_err(|e| ExportError::Decompression(format!("{}: {}", path.display(), e)))?;
    } else {
        let mut reader = reader;
        reader
            .read_to_end(&mut buf)
            .map_err(|e| ExportError::Io(format!("reading {}: {}", path.display(), e)))?;
    }

    parse_result_bytes(&buf)
}

/// Parse a flattened result from the bytes of a JSON node array.
pub fn parse_result_bytes(json_bytes: &[u8]) -> ExportResult<IntrospectionResult> {
    serde_json::from_slice(json_bytes).map_err(|e| ExportError::JsonParse(format!("{}", e)))
}

/// Parse a flattened result from a JSON string.
pub fn parse_result_str(json_str: &str) -> ExportResult<IntrospectionResult> {
    serde_json::from_str(json_str).map_err(|e| ExportError::JsonParse(format!("{}", e)))
}
