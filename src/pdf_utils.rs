//! Shared PDF helpers for reading document-level strings.

use lopdf::{Dictionary, Document};

/// Decode a PDF text string (PDF 32000 §7.9.2.2).
///
/// Strings starting with a UTF-16BE byte-order mark are decoded as UTF-16,
/// a UTF-8 BOM selects UTF-8, and anything else is PDFDocEncoding, which
/// agrees with Latin-1 for every printable character.
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        // Not allowed by the spec but written by some producers.
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Look up `key` in `dict` and decode it as a text string, following one
/// level of indirection.
///
/// Returns `None` when the key is missing, is not a string, or decodes to an
/// empty string.
pub fn text_string_from_dict(document: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    let value = dict.get(key).ok()?;
    let value = match value.as_reference() {
        Ok(id) => document.get_object(id).ok()?,
        Err(_) => value,
    };
    value
        .as_str()
        .ok()
        .map(decode_text_string)
        .filter(|s| !s.is_empty())
}

/// The document information dictionary from the trailer's `/Info` entry,
/// whether stored inline or as an indirect reference.
pub fn info_dictionary(document: &Document) -> Option<&Dictionary> {
    let info = document.trailer.get(b"Info").ok()?;
    match info.as_reference() {
        Ok(id) => document.get_dictionary(id).ok(),
        Err(_) => info.as_dict().ok(),
    }
}
