use crate::models::{AspectSentiment, CategoryCounts};
use std::collections::BTreeMap;

/// Count mentioned aspects per sentiment bucket. `NotMentioned` entries are
/// skipped.
pub fn aggregate(aspects: &BTreeMap<String, AspectSentiment>) -> CategoryCounts {
    aspects
        .values()
        .fold(CategoryCounts::default(), |mut counts, sentiment| {
            match sentiment {
                AspectSentiment::Positive => counts.positive += 1,
                AspectSentiment::Negative => counts.negative += 1,
                AspectSentiment::Neutral => counts.neutral += 1,
                AspectSentiment::NotMentioned => {}
            }
            counts
        })
}
