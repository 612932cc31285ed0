/// A prelims subject and its topics. Topic ids are `"{subject id}-{index}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainsPaper {
    pub name: &'static str,
    pub marks: u32,
    pub topics: &'static [&'static str],
}

pub static PRELIMS_SUBJECTS: [Subject; 7] = [
    Subject {
        id: "p1",
        name: "History of India",
        topics: &["Ancient India", "Medieval India", "Modern India", "Indian National Movement"],
    },
    Subject {
        id: "p2",
        name: "Indian & World Geography",
        topics: &[
            "Physical Geography",
            "Human Geography",
            "Economic Geography",
            "Indian Geography",
        ],
    },
    Subject {
        id: "p3",
        name: "Indian Polity & Governance",
        topics: &[
            "Constitution",
            "Political System",
            "Panchayati Raj",
            "Public Policy",
            "Rights Issues",
        ],
    },
    Subject {
        id: "p4",
        name: "Economic & Social Development",
        topics: &[
            "Sustainable Development",
            "Poverty",
            "Demographics",
            "Social Sector Initiatives",
        ],
    },
    Subject {
        id: "p5",
        name: "Environment & Ecology",
        topics: &[
            "Environmental Ecology",
            "Biodiversity",
            "Climate Change",
            "Environmental Issues",
        ],
    },
    Subject {
        id: "p6",
        name: "General Science",
        topics: &["Physics", "Chemistry", "Biology", "Technology", "Space Technology"],
    },
    Subject {
        id: "p7",
        name: "Current Affairs",
        topics: &[
            "National Events",
            "International Events",
            "Economic Affairs",
            "Science & Technology",
        ],
    },
];

pub static MAINS_PAPERS: [MainsPaper; 7] = [
    MainsPaper {
        name: "Essay",
        marks: 250,
        topics: &["Philosophical essays", "Current affairs based essays"],
    },
    MainsPaper {
        name: "GS Paper I",
        marks: 250,
        topics: &["History", "Geography", "Society", "Culture"],
    },
    MainsPaper {
        name: "GS Paper II",
        marks: 250,
        topics: &["Governance", "Constitution", "Social Justice", "International Relations"],
    },
    MainsPaper {
        name: "GS Paper III",
        marks: 250,
        topics: &["Economy", "Environment", "Science & Tech", "Security"],
    },
    MainsPaper {
        name: "GS Paper IV",
        marks: 250,
        topics: &["Ethics", "Integrity", "Aptitude", "Case Studies"],
    },
    MainsPaper {
        name: "Optional Paper I",
        marks: 250,
        topics: &["Subject specific topics"],
    },
    MainsPaper {
        name: "Optional Paper II",
        marks: 250,
        topics: &["Subject specific topics"],
    },
];

/// Merit-counting mains total (sum of all papers)
pub fn mains_total_marks() -> u32 {
    MAINS_PAPERS.iter().map(|p| p.marks).sum()
}

pub fn total_topics() -> usize {
    PRELIMS_SUBJECTS.iter().map(|s| s.topics.len()).sum()
}

/// Resolve a topic id like `"p3-1"` to its subject and topic name.
///
/// Only the canonical spelling resolves; `"p3-01"` and `"p3-+1"` do not.
pub fn find_topic(id: &str) -> Option<(&'static Subject, &'static str)> {
    let id = id.trim();
    let (subject_id, index) = id.rsplit_once('-')?;
    let index: usize = index.parse().ok()?;
    let subject = PRELIMS_SUBJECTS.iter().find(|s| s.id == subject_id)?;
    let topic = subject.topics.get(index)?;
    if topic_id(subject, index) != id {
        return None;
    }
    Some((subject, *topic))
}

pub fn topic_id(subject: &Subject, index: usize) -> String {
    format!("{}-{}", subject.id, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(total_topics(), 30);
        assert_eq!(mains_total_marks(), 1750);
    }

    #[test]
    fn test_find_topic() {
        let (subject, topic) = find_topic("p3-1").unwrap();
        assert_eq!(subject.name, "Indian Polity & Governance");
        assert_eq!(topic, "Political System");
    }

    #[test]
    fn test_find_topic_rejects_unknown() {
        assert!(find_topic("p3-9").is_none());
        assert!(find_topic("p9-0").is_none());
        assert!(find_topic("p1").is_none());
        assert!(find_topic("p1-x").is_none());
    }

    #[test]
    fn test_find_topic_rejects_non_canonical_index() {
        assert!(find_topic("p1-00").is_none());
        assert!(find_topic("p1-000").is_none());
        assert!(find_topic("p1-+0").is_none());
        assert!(find_topic(" p1-0 ").is_some());
    }

    #[test]
    fn test_topic_ids_resolve() {
        for subject in &PRELIMS_SUBJECTS {
            for index in 0..subject.topics.len() {
                assert!(find_topic(&topic_id(subject, index)).is_some());
            }
        }
    }
}
