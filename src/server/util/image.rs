//! Classifies URLs and attachment metadata as images.
//!
//! Discord's metadata is inconsistent: content types go missing, CDN links drop their
//! extension, and embeds point at third-party hosts. Each predicate here is a pure
//! OR-combination of independent signals, so evaluation order never changes the result.

use url::Url;

use crate::server::model::message::DiscordAttachment;

/// Path extensions treated as images, lowercase.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Hosts serving Discord-uploaded or Discord-proxied media.
pub const DISCORD_MEDIA_HOSTS: [&str; 4] = [
    "cdn.discordapp.com",
    "media.discordapp.net",
    "images-ext-1.discordapp.net",
    "images-ext-2.discordapp.net",
];

/// Checks whether the URL path ends in one of `IMAGE_EXTENSIONS`.
///
/// The query string and fragment are ignored; the comparison is case-insensitive.
/// Unparseable URLs are never images.
pub fn looks_like_image_url(url: &str) -> bool {
    let Ok(url) = Url::parse(url) else {
        return false;
    };

    url.path()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Checks whether the URL is served from one of `DISCORD_MEDIA_HOSTS`.
pub fn is_discord_media_host(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| DISCORD_MEDIA_HOSTS.contains(&host.as_str()))
}

/// Decides whether an attachment is an image.
///
/// An attachment with a URL counts as an image when any of these holds:
/// - its content type is an `image/*` media type
/// - its URL path has an image extension
/// - its URL is on a Discord media host
/// - it carries numeric width or height (Discord sets these only for visual media)
pub fn is_image_attachment(attachment: &DiscordAttachment) -> bool {
    let Some(url) = attachment.url.as_deref().filter(|url| !url.is_empty()) else {
        return false;
    };

    let image_content_type = attachment
        .content_type
        .as_deref()
        .is_some_and(|content_type| content_type.to_ascii_lowercase().starts_with("image/"));
    let has_dimensions = attachment.width.is_some() || attachment.height.is_some();

    image_content_type || looks_like_image_url(url) || is_discord_media_host(url) || has_dimensions
}

/// Decides whether an embed image or thumbnail URL is worth keeping.
pub fn is_embed_image_candidate(url: &str) -> bool {
    looks_like_image_url(url) || is_discord_media_host(url)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    #[test_case("https://example.com/art.png", true ; "png")]
    #[test_case("https://example.com/art.JPEG", true ; "uppercase_jpeg")]
    #[test_case("https://example.com/a/b/c.webp?width=200&height=100", true ; "query_ignored")]
    #[test_case("https://example.com/anim.gif#frame", true ; "fragment_ignored")]
    #[test_case("https://example.com/clip.mp4", false ; "video")]
    #[test_case("https://example.com/page", false ; "no_extension")]
    #[test_case("https://example.com/dir.png/page", false ; "extension_on_directory")]
    #[test_case("not a url.png", false ; "unparseable")]
    #[test_case("", false ; "empty")]
    fn test_looks_like_image_url(url: &str, expected: bool) {
        assert_eq!(looks_like_image_url(url), expected);
    }

    #[test_case("https://cdn.discordapp.com/attachments/1/2/file", true ; "cdn")]
    #[test_case("https://MEDIA.discordapp.net/attachments/1/2/file", true ; "media_uppercase")]
    #[test_case("https://images-ext-1.discordapp.net/external/abc", true ; "external_proxy")]
    #[test_case("https://discord.com/channels/1/2", false ; "discord_web")]
    #[test_case("https://cdn.discordapp.com.evil.example/a.bin", false ; "lookalike")]
    fn test_is_discord_media_host(url: &str, expected: bool) {
        assert_eq!(is_discord_media_host(url), expected);
    }

    #[test_case(json!({ "url": "https://files.example/x", "content_type": "image/png" }), true ; "content_type")]
    #[test_case(json!({ "url": "https://files.example/x", "content_type": "IMAGE/WEBP" }), true ; "content_type_uppercase")]
    #[test_case(json!({ "url": "https://files.example/x.jpg" }), true ; "extension_only")]
    #[test_case(json!({ "url": "https://cdn.discordapp.com/attachments/1/2/x" }), true ; "discord_host_only")]
    #[test_case(json!({ "url": "https://files.example/x", "width": 640 }), true ; "width_only")]
    #[test_case(json!({ "url": "https://files.example/x", "height": 480 }), true ; "height_only")]
    #[test_case(json!({ "url": "https://files.example/x", "width": "640" }), false ; "width_not_numeric")]
    #[test_case(json!({ "url": "https://files.example/x.zip", "content_type": "application/zip" }), false ; "archive")]
    #[test_case(json!({ "content_type": "image/png", "width": 640 }), false ; "missing_url")]
    #[test_case(json!({ "url": "", "content_type": "image/png" }), false ; "empty_url")]
    fn test_is_image_attachment(attachment: serde_json::Value, expected: bool) {
        let attachment: DiscordAttachment = serde_json::from_value(attachment).unwrap();

        assert_eq!(is_image_attachment(&attachment), expected);
    }

    #[test]
    fn embed_candidates_accept_extension_or_host() {
        assert!(is_embed_image_candidate("https://example.com/a.gif"));
        assert!(is_embed_image_candidate(
            "https://media.discordapp.net/external/xyz"
        ));
        assert!(!is_embed_image_candidate("https://example.com/article"));
    }
}
