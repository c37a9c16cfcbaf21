//! Snowflake ids for tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Base of generated ids; 19 digits like current Discord snowflakes.
const BASE: u64 = 1_200_000_000_000_000_000;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns the next unique snowflake.
///
/// This function provides monotonically increasing values of equal width, so ids
/// generated later compare greater both numerically and as strings.
///
/// # Returns
/// - `String` - Next unique snowflake id
pub fn next_snowflake() -> String {
    (BASE + COUNTER.fetch_add(1, Ordering::SeqCst)).to_string()
}

/// Builds a snowflake from a small offset, for tests that need fixed ids.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(snowflake(7), "1200000000000000007");
/// ```
pub fn snowflake(offset: u64) -> String {
    (BASE + offset).to_string()
}
