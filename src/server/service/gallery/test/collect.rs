use crate::server::model::fetch::MessageSource;

use super::*;

/// Tests building a gallery from a mixed batch of messages.
///
/// Verifies that attachments, embeds and text links of all messages are extracted and
/// sorted newest first, and that messages without images contribute nothing.
///
/// Expected: Ok with 4 items ordered by descending message id
#[tokio::test]
async fn collects_items_newest_first() {
    let api = history(vec![
        fixture::message::text(&snowflake(1), "old https://art.example/old.jpg"),
        MessageBuilder::new()
            .id(snowflake(3))
            .content("fresh")
            .attachment(fixture::attachment::image(
                "https://cdn.discordapp.com/attachments/1/2/new.png",
            ))
            .attachment(fixture::attachment::file(
                "https://files.example/notes.txt",
                "text/plain",
            ))
            .build(),
        fixture::message::text(&snowflake(4), "no images here"),
        MessageBuilder::new()
            .id(snowflake(2))
            .embed(fixture::embed::image(
                "Portfolio",
                "https://art.example/embed.webp",
            ))
            .build(),
        fixture::message::with_image(&snowflake(3), "https://cdn.discordapp.com/x/dup.png"),
    ]);
    let fetcher = MessageFetcher::new(&api, TOKEN).scan_threads(false);

    let gallery = GalleryService::new(fetcher)
        .collect(&GalleryRequest::new(CHANNEL))
        .await
        .unwrap();

    let items: Vec<(&str, &str)> = gallery
        .items
        .iter()
        .map(|item| (item.id.as_str(), item.src.as_str()))
        .collect();
    assert_eq!(
        items,
        [
            (
                snowflake(3).as_str(),
                "https://cdn.discordapp.com/attachments/1/2/new.png"
            ),
            (snowflake(3).as_str(), "https://cdn.discordapp.com/x/dup.png"),
            (snowflake(2).as_str(), "https://art.example/embed.webp"),
            (snowflake(1).as_str(), "https://art.example/old.jpg"),
        ]
    );
    assert_eq!(gallery.items[0].title, "fresh");
    assert_eq!(gallery.items[2].title, "Portfolio");
    assert_eq!(gallery.items[3].title, "old");
    assert_eq!(gallery.report.messages.len(), 5);
}

/// Tests a channel without messages.
///
/// Expected: Ok with no items
#[tokio::test]
async fn empty_channel_yields_empty_gallery() {
    let api = history(Vec::new());
    let fetcher = MessageFetcher::new(&api, TOKEN).scan_threads(false);

    let gallery = GalleryService::new(fetcher)
        .collect(&GalleryRequest::new(CHANNEL))
        .await
        .unwrap();

    assert!(gallery.items.is_empty());
    assert_eq!(gallery.report.source, MessageSource::Channel);
}

/// Tests that forum thread posts feed the gallery.
///
/// Expected: Ok with the image of the thread starter, source `Threads`
#[tokio::test]
async fn collects_items_from_thread_posts() {
    let (api, _log) = mock::scripted(vec![
        (
            format!("/channels/{CHANNEL}/threads/active"),
            Ok(fixture::thread::list(&["20"])),
        ),
        (
            format!("/channels/{CHANNEL}/threads/archived/public"),
            Ok(fixture::thread::list(&[])),
        ),
        (
            "/channels/20/messages?limit=1&after=0".to_string(),
            Ok(json!([fixture::message::with_image(
                &snowflake(20),
                "https://cdn.discordapp.com/attachments/20/1/post.png"
            )])),
        ),
    ]);

    let gallery = GalleryService::new(MessageFetcher::new(&api, TOKEN))
        .collect(&GalleryRequest::new(CHANNEL))
        .await
        .unwrap();

    assert_eq!(gallery.report.source, MessageSource::Threads);
    assert_eq!(gallery.items.len(), 1);
    assert_eq!(gallery.items[0].title, "post.png");
}

/// Tests that a fatal fetch failure is returned unchanged.
///
/// Expected: Err with upstream status 401
#[tokio::test]
async fn propagates_fatal_fetch_failure() {
    let path = history_path(CHANNEL, 100, None);
    let (api, _log) = mock::scripted(vec![(
        path.clone(),
        mock::status(&path, 401, "401: Unauthorized"),
    )]);
    let fetcher = MessageFetcher::new(&api, TOKEN).scan_threads(false);

    let err = GalleryService::new(fetcher)
        .collect(&GalleryRequest::new(CHANNEL))
        .await
        .unwrap_err();

    assert_eq!(err.upstream_status(), Some(401));
}

/// Tests item fields taken from embeds with thumbnails only.
///
/// Expected: Ok with the thumbnail URL, the embed title, the author's display name
/// and the message timestamp
#[tokio::test]
async fn collects_thumbnail_embeds_with_display_name() {
    let api = history(vec![MessageBuilder::new()
        .id(snowflake(7))
        .timestamp("2024-03-05T12:30:00.000000+00:00")
        .author("7", "painter")
        .display_name("The Painter")
        .embed(fixture::embed::thumbnail(
            "Sketchbook",
            "https://media.discordapp.net/external/sketch",
        ))
        .build()]);
    let fetcher = MessageFetcher::new(&api, TOKEN).scan_threads(false);

    let gallery = GalleryService::new(fetcher)
        .collect(&GalleryRequest::new(CHANNEL))
        .await
        .unwrap();

    assert_eq!(gallery.items.len(), 1);
    let item = &gallery.items[0];
    assert_eq!(item.src, "https://media.discordapp.net/external/sketch");
    assert_eq!(item.title, "Sketchbook");
    assert_eq!(item.author, "The Painter");
    assert_eq!(item.ts.as_deref(), Some("2024-03-05T12:30:00.000000+00:00"));
}
