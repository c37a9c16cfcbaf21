//! Thread listing JSON for forum and media channels.

use serde_json::{json, Value};

/// Creates the body of `threads/active` or `threads/archived/public`.
///
/// # Arguments
/// - `thread_ids` - Ids of the listed threads
pub fn list(thread_ids: &[&str]) -> Value {
    let threads: Vec<Value> = thread_ids
        .iter()
        .map(|id| json!({ "id": id, "type": 11, "name": format!("post {id}") }))
        .collect();

    json!({ "threads": threads, "members": [], "has_more": false })
}
