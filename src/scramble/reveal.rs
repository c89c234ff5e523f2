//! Reveal arithmetic shared by the animator and its callers.

use std::time::Duration;

/// Number of leading characters that show their final value after `elapsed`.
///
/// `floor(min(elapsed / duration, 1) * len)`, computed in integer nanoseconds
/// so the result is exact. A zero duration reveals everything.
pub fn reveal_count(elapsed: Duration, duration: Duration, len: usize) -> usize {
    let total = duration.as_nanos();
    if total == 0 {
        return len;
    }
    let elapsed = elapsed.as_nanos().min(total);
    (elapsed * len as u128 / total) as usize
}
