//! Binary payload normalizers.
//!
//! Conversions between remote resources, in-memory blobs, base64 text and
//! `data:` URLs keep provider payloads interchangeable at the boundary.
//! Fetch and read failures surface to the caller; nothing resolves with
//! partial data.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;
use reqwest::header::CONTENT_TYPE;

use crate::error::LangException;
use crate::types::blob::Blob;
use crate::utils::mime::resolve_mime;

/// Fixed window for byte-to-text conversion. Windowed encoding keeps a
/// single conversion call bounded no matter how large the payload is.
const ENCODE_WINDOW: usize = 1024;

/// Fetch a remote resource and convert it to a `data:` URL.
///
/// A transport failure or non-success status is a network error. The MIME
/// prefix is the declared `Content-Type`, falling back to byte sniffing and
/// extension guessing when the header is absent.
pub async fn url_to_data_url(url: &str) -> Result<String, LangException> {
    let response = reqwest::get(url).await.map_err(|e| {
        LangException::network(format!("failed to download {url}")).with_detail(e.to_string())
    })?;
    if !response.status().is_success() {
        return Err(LangException::network(format!(
            "failed to download {url}: status {}",
            response.status()
        )));
    }
    let declared = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let data = response.bytes().await.map_err(|e| {
        LangException::network(format!("failed to read body of {url}")).with_detail(e.to_string())
    })?;
    let content_type = declared.unwrap_or_else(|| resolve_mime(&data, url));
    Ok(blob_to_data_url(&Blob::new(data, content_type)))
}

/// Render a blob as a `data:` URL with its content type as the MIME prefix.
pub fn blob_to_data_url(blob: &Blob) -> String {
    format!(
        "data:{};base64,{}",
        blob.content_type(),
        bytes_to_base64(blob.data())
    )
}

/// Base64-encode raw bytes, feeding the encoder in fixed-size windows.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    // Writes into a Vec cannot fail, so the io::Result never surfaces.
    let encoded = encode_windows(bytes).unwrap_or_default();
    String::from_utf8(encoded).unwrap_or_default()
}

fn encode_windows(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut writer = EncoderWriter::new(
        Vec::with_capacity(bytes.len().div_ceil(3) * 4),
        &STANDARD,
    );
    for window in bytes.chunks(ENCODE_WINDOW) {
        writer.write_all(window)?;
    }
    writer.finish()
}

/// Split a `data:` URL into its MIME type and base64 payload.
pub fn parse_data_url(data_url: &str) -> Option<(String, String)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.split(';').next().unwrap_or(header);
    Some((mime.to_string(), payload.to_string()))
}
