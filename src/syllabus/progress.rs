use std::collections::BTreeSet;

use super::catalog::{find_topic, total_topics};
use crate::error::{Result, ValidationError};

/// Completed topic ids. Owned by the caller; never mutated by this module.
pub type SyllabusProgress = BTreeSet<String>;

/// Return a copy of `progress` with `topic_id` flipped between done and not done.
pub fn toggle_topic(progress: &SyllabusProgress, topic_id: &str) -> Result<SyllabusProgress> {
    let topic_id = topic_id.trim();
    if find_topic(topic_id).is_none() {
        return Err(ValidationError::UnknownTopic(topic_id.to_string()));
    }

    let mut next = progress.clone();
    if !next.remove(topic_id) {
        next.insert(topic_id.to_string());
    }
    Ok(next)
}

/// Build progress from a list of ids, rejecting any that are not in the catalogue.
pub fn progress_from_ids<I, S>(ids: I) -> Result<SyllabusProgress>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter().try_fold(SyllabusProgress::new(), |acc, id| {
        let id = id.as_ref().trim();
        if acc.contains(id) {
            Ok(acc)
        } else {
            toggle_topic(&acc, id)
        }
    })
}

/// Whole-percent completion of the prelims catalogue.
pub fn progress_percent(progress: &SyllabusProgress) -> u32 {
    let done = progress.iter().filter(|id| find_topic(id).is_some()).count();
    ((done as f64 / total_topics() as f64) * 100.0).round() as u32
}
