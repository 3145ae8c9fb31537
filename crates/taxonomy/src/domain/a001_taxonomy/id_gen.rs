//! Option id generation
//!
//! Ids have the shape `{category}-{sub}-{param}-{value-slug}-{millis}-{seq}`.
//! The sequence number is process-wide and monotonic, so two options with the
//! same value added within the same millisecond still get distinct ids.

use chrono::Utc;
use contracts::shared::slug::slugify;
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub fn option_id(category: &str, sub: &str, param: &str, value: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "{}-{}-{}-{}-{}-{}",
        category,
        sub,
        param,
        slugify(value),
        millis,
        seq
    )
}
