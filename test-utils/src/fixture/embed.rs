//! Discord embed JSON.

use serde_json::{json, Value};

/// Creates a link embed with an image.
pub fn image(title: &str, url: &str) -> Value {
    json!({
        "type": "image",
        "title": title,
        "image": { "url": url, "proxy_url": url },
    })
}

/// Creates a link embed with a thumbnail only.
pub fn thumbnail(title: &str, url: &str) -> Value {
    json!({
        "type": "link",
        "title": title,
        "thumbnail": { "url": url, "proxy_url": url },
    })
}
