//! Token source reading: encoding detection, BOM stripping, JSON parsing.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::BuildError;

/// Text encoding of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 (the default).
    Utf8,
    /// UTF-16 little endian, as saved by some Windows editors.
    Utf16Le,
}

impl Encoding {
    /// Guess the encoding: any NUL byte means UTF-16LE.
    pub fn detect(buf: &[u8]) -> Self {
        if buf.contains(&0) {
            Encoding::Utf16Le
        } else {
            Encoding::Utf8
        }
    }
}

/// Decode bytes as UTF-8, stripping BOM if present.
pub fn decode_utf8(buf: &[u8]) -> Result<&str, &'static str> {
    let buf = buf.strip_prefix(b"\xef\xbb\xbf").unwrap_or(buf);
    std::str::from_utf8(buf).map_err(|_| "invalid UTF-8")
}

/// Decode bytes as UTF-16LE, stripping BOM if present.
///
/// Unpaired surrogates become U+FFFD and a trailing odd byte is ignored.
pub fn decode_utf16le(buf: &[u8]) -> String {
    let units = buf
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let text: String = char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}

/// Decode a source buffer using the detected encoding.
pub fn decode(buf: &[u8]) -> Result<(String, Encoding), &'static str> {
    let encoding = Encoding::detect(buf);
    let text = match encoding {
        Encoding::Utf8 => decode_utf8(buf)?.to_owned(),
        Encoding::Utf16Le => decode_utf16le(buf),
    };
    Ok((text, encoding))
}

/// Read, decode and parse the token source at `path`.
///
/// Errors name the file by its basename.
pub fn read_source(path: &Path) -> Result<Value, BuildError> {
    let file = file_name(path);
    let buf = read_disk(path).map_err(|source| BuildError::Read {
        file: file.clone(),
        source,
    })?;

    let (text, encoding) = decode(&buf).map_err(|reason| BuildError::Decode {
        file: file.clone(),
        reason,
    })?;
    tracing::debug!(file = %file, bytes = buf.len(), ?encoding, "read token source");

    serde_json::from_str(&text).map_err(|e| BuildError::Parse {
        file,
        message: e.to_string(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Read file from disk.
fn read_disk(path: &Path) -> io::Result<Vec<u8>> {
    if fs::metadata(path)?.is_dir() {
        return Err(io::Error::other("is a directory"));
    }
    fs::read(path)
}
