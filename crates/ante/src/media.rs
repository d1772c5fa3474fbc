use identity_fees::TaxableMsgCategory;

pub const MEDIA_TYPE_JSON: &str = "application/json";
pub const MEDIA_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const MEDIA_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Sniff the media type of raw content from its bytes.
///
/// Binary formats are recognized by their magic numbers. Content without one is JSON if it
/// parses as JSON, plain text if it is valid UTF-8, and an opaque byte stream otherwise.
pub fn detect_media_type(data: &[u8]) -> String {
    if let Some(kind) = infer::get(data) {
        return kind.mime_type().to_string();
    }

    if serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        return MEDIA_TYPE_JSON.to_string();
    }

    if std::str::from_utf8(data).is_ok() {
        return MEDIA_TYPE_TEXT.to_string();
    }

    MEDIA_TYPE_OCTET_STREAM.to_string()
}

/// The fee category of a resource, decided by the media type of its content
pub fn resource_category(data: &[u8]) -> TaxableMsgCategory {
    let media_type = detect_media_type(data);
    if media_type.starts_with("image/") {
        TaxableMsgCategory::CreateResourceImage
    } else if media_type == MEDIA_TYPE_JSON {
        TaxableMsgCategory::CreateResourceJson
    } else {
        TaxableMsgCategory::CreateResourceDefault
    }
}
