//! Discord Gallery Test Utils
//!
//! Provides shared testing utilities for the gallery service. Discord's REST API is never
//! contacted in tests; instead, tests script upstream responses with JSON built by the
//! fixtures in this crate.
//!
//! # Overview
//!
//! - **fixture**: Builders for Discord message, attachment, embed and thread-list JSON
//! - **snowflake**: Monotonic, equal-width snowflake ids for ordering assertions
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture::{attachment, MessageBuilder};
//!
//! let message = MessageBuilder::new()
//!     .content("new piece")
//!     .author("42", "painter")
//!     .attachment(attachment::image("https://cdn.discordapp.com/attachments/1/2/a.png"))
//!     .build();
//! ```

pub mod fixture;
pub mod snowflake;
