//! Discord attachment JSON.

use serde_json::{json, Value};

/// Creates an image attachment with content type, filename and dimensions.
///
/// The filename is the last path segment of `url`.
pub fn image(url: &str) -> Value {
    json!({
        "id": "1",
        "url": url,
        "proxy_url": url,
        "filename": filename(url),
        "content_type": "image/png",
        "size": 1024,
        "width": 800,
        "height": 600,
    })
}

/// Creates a non-image attachment of the given content type.
pub fn file(url: &str, content_type: &str) -> Value {
    json!({
        "id": "1",
        "url": url,
        "proxy_url": url,
        "filename": filename(url),
        "content_type": content_type,
        "size": 1024,
    })
}

fn filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
