//! Character encoding detection for status pages
//!
//! Modems commonly serve windows-1252, where the non-breaking space used to
//! pad every value is the single byte 0xA0. Pages are therefore decoded with
//! the charset they declare rather than assumed to be UTF-8.
//!
//! Precedence: byte order mark, then the HTTP `Content-Type` charset, then a
//! `<meta>` declaration in the first kilobyte, then windows-1252.

use encoding_rs::{Encoding, WINDOWS_1252};
use regex::Regex;
use regex::bytes::Regex as BytesRegex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Bytes of the document searched for a `<meta>` charset declaration
const META_SCAN_LIMIT: usize = 1024;

/// `charset=` parameter of a `Content-Type` value
static CHARSET_PARAM_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#));

/// `<meta charset=..>` or `<meta http-equiv=Content-Type content="..; charset=..">`
static META_CHARSET_RE: LazyLock<Result<BytesRegex, regex::Error>> = LazyLock::new(|| {
    BytesRegex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#)
});

/// Encoding named by the charset parameter of an HTTP `Content-Type` header
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let re = CHARSET_PARAM_RE.as_ref().ok()?;
    let label = re.captures(content_type)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Encoding declared by a `<meta>` tag near the start of the document
pub fn encoding_from_meta(bytes: &[u8]) -> Option<&'static Encoding> {
    let re = META_CHARSET_RE.as_ref().ok()?;
    let head = &bytes[..bytes.len().min(META_SCAN_LIMIT)];
    let label = re.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

/// Pick the encoding for a document, falling back to windows-1252
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(encoding_from_content_type)
        .or_else(|| encoding_from_meta(bytes))
        .unwrap_or(WINDOWS_1252)
}

/// Decode a document to UTF-8
///
/// A byte order mark overrides any declared charset. Malformed sequences are
/// replaced with U+FFFD and logged.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, content_type);
    let (text, used, had_errors) = encoding.decode(bytes);

    debug!("Decoded {} bytes as {}", bytes.len(), used.name());
    if had_errors {
        warn!(
            "Status page contains bytes that are not valid {}; they were replaced",
            used.name()
        );
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    #[test]
    fn test_content_type_charset() {
        assert_eq!(
            encoding_from_content_type("text/html; charset=ISO-8859-1"),
            Some(WINDOWS_1252)
        );
        assert_eq!(
            encoding_from_content_type("text/html;CHARSET=\"utf-8\""),
            Some(UTF_8)
        );
        assert_eq!(encoding_from_content_type("text/html"), None);
        assert_eq!(encoding_from_content_type("text/html; charset=bogus"), None);
    }

    #[test]
    fn test_meta_charset_forms() {
        assert_eq!(
            encoding_from_meta(br#"<HEAD><META charset="utf-8"></HEAD>"#),
            Some(UTF_8)
        );
        assert_eq!(
            encoding_from_meta(
                b"<META http-equiv=Content-Type content=\"text/html; charset=windows-1252\">"
            ),
            Some(WINDOWS_1252)
        );
        assert_eq!(encoding_from_meta(b"<meta charset=utf-8>"), Some(UTF_8));
        assert_eq!(encoding_from_meta(b"<html><body>no declaration</body></html>"), None);
    }

    #[test]
    fn test_meta_beyond_scan_limit_is_ignored() {
        let mut page = vec![b' '; META_SCAN_LIMIT];
        page.extend_from_slice(b"<meta charset=utf-8>");
        assert_eq!(encoding_from_meta(&page), None);
    }

    #[test]
    fn test_header_takes_precedence_over_meta() {
        let page = b"<meta charset=windows-1252><td>3</td>";
        assert_eq!(detect_encoding(page, Some("text/html; charset=utf-8")), UTF_8);
        assert_eq!(detect_encoding(page, Some("text/html")), WINDOWS_1252);
    }

    #[test]
    fn test_undeclared_page_defaults_to_windows_1252() {
        assert_eq!(detect_encoding(b"<td>3</td>", None), WINDOWS_1252);
        assert_eq!(decode_page(b"<td>3\xa0</td>", None), "<td>3\u{a0}</td>");
    }

    #[test]
    fn test_raw_nbsp_padding_decodes_to_nbsp() {
        let page = b"<META http-equiv=Content-Type content=\"text/html; charset=windows-1252\">\
                     <td>591000000 Hz\xa0</td>";
        let text = decode_page(page, None);
        assert!(text.ends_with("<td>591000000 Hz\u{a0}</td>"));
        assert!(!text.contains('\u{fffd}'));
    }

    #[test]
    fn test_byte_order_mark_wins() {
        let page = b"\xef\xbb\xbf<meta charset=windows-1252><td>\xc2\xa0</td>";
        assert_eq!(decode_page(page, None), "<meta charset=windows-1252><td>\u{a0}</td>");

        let utf16 = b"\xff\xfe<\x00t\x00d\x00>\x00";
        assert_eq!(decode_page(utf16, None), "<td>");
    }
}
