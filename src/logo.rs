//! Logo upload encoding
//!
//! Uploaded images are embedded straight into the page as `data:` URIs so the
//! preview and the printed output need no further network access.

use base64::Engine;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode an uploaded image as a `data:` URI.
///
/// Returns `None` for an empty payload. A declared `image/*` type is trusted;
/// anything else is sniffed from the leading bytes.
pub fn encode_data_uri(bytes: &[u8], declared_mime: Option<&str>) -> Option<String> {
    if bytes.is_empty() {
        log::warn!("Ignoring empty logo upload");
        return None;
    }

    let mime = declared_mime
        .map(str::trim)
        .filter(|m| m.starts_with("image/"))
        .or_else(|| sniff_image_mime(bytes))
        .unwrap_or(FALLBACK_MIME);

    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    log::debug!("Encoded logo: {} bytes as {}", bytes.len(), mime);

    Some(format!("data:{};base64,{}", mime, payload))
}

/// Detect common image formats from their magic numbers
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.starts_with(b"BM") {
        return Some("image/bmp");
    }
    if bytes.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        return Some("image/x-icon");
    }

    // SVG is text; look for the root element near the start
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    if text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")) {
        return Some("image/svg+xml");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_formats() {
        assert_eq!(sniff_image_mime(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"), Some("image/png"));
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"GIF89a\x01\x00"), Some("image/gif"));
        assert_eq!(sniff_image_mime(b"RIFF\x24\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"), Some("image/svg+xml"));
        assert_eq!(
            sniff_image_mime(b"<?xml version=\"1.0\"?>\n<svg></svg>"),
            Some("image/svg+xml")
        );
        assert_eq!(sniff_image_mime(b"hello world"), None);
    }

    #[test]
    fn test_encode_png() {
        let uri = encode_data_uri(b"\x89PNG\r\n\x1a\n", None).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_declared_mime_wins() {
        let uri = encode_data_uri(b"abc", Some("image/avif")).unwrap();
        assert_eq!(uri, "data:image/avif;base64,YWJj");
    }

    #[test]
    fn test_non_image_declared_mime_is_sniffed() {
        let uri = encode_data_uri(b"GIF89a", Some("application/octet-stream")).unwrap();
        assert!(uri.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn test_unknown_payload_falls_back() {
        let uri = encode_data_uri(b"abc", None).unwrap();
        assert_eq!(uri, "data:application/octet-stream;base64,YWJj");
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(encode_data_uri(&[], Some("image/png")), None);
    }
}
