//! Test fixtures providing Discord API payloads as JSON.
//!
//! Fixtures create the `serde_json::Value` bodies Discord would return, for scripting
//! mocked upstream calls and for extractor tests. Builders fill every field the gallery
//! reads with sensible defaults and allow overriding the ones a test cares about.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Plain message with defaults
//! let message = fixture::MessageBuilder::new().build();
//!
//! // Thread listing for a forum channel
//! let threads = fixture::thread::list(&["10", "11"]);
//! ```

pub mod attachment;
pub mod embed;
pub mod message;
pub mod thread;

pub use message::MessageBuilder;
