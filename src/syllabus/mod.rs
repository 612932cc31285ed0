pub mod catalog;
pub mod progress;

pub use catalog::{
    find_topic, mains_total_marks, topic_id, total_topics, MainsPaper, Subject, MAINS_PAPERS,
    PRELIMS_SUBJECTS,
};
pub use progress::{progress_from_ids, progress_percent, toggle_topic, SyllabusProgress};
