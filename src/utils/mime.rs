//! MIME fallback for fetched resources.

/// Best-effort MIME type for a fetched payload: sniff magic bytes first,
/// then the URL extension, otherwise octet-stream.
pub fn resolve_mime(bytes: &[u8], url: &str) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    mime_guess::from_path(url)
        .first_raw()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
