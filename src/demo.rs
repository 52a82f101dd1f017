//! Synthetic example classroom for demonstrations
//!
//! Only reachable through the CLI's explicit `--demo` flag. Nothing in the
//! analysis pipeline imports this module; a failed real-data load must
//! surface as an error, never be papered over with generated data.

use crate::data::{EvaluationRecord, IndividualRecord, NominationRecord};

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Felipe", "Gabriela", "Hugo", "Irene", "Javier",
    "Lucia", "Marcos",
];

/// Build a deterministic 12-student classroom exercising every nomination
/// category: a friendly core clique, a rejected student, a suspected
/// aggressor, a likely victim, and one fully disconnected student.
pub fn example_classroom() -> EvaluationRecord {
    let roster: Vec<IndividualRecord> = FIRST_NAMES
        .iter()
        .enumerate()
        .map(|(i, first_name)| IndividualRecord {
            id: format!("s{:02}", i + 1),
            first_name: (*first_name).to_string(),
            last_name: "Demo".to_string(),
            age: Some(10 + (i as u32 % 3)),
            gender: Some(String::from(if i % 2 == 0 { "f" } else { "m" })),
        })
        .collect();

    let mut nominations = Vec::new();
    let mut nominate = |nominator: &str, category: &str, nominees: &[&str]| {
        nominations.push(NominationRecord {
            id: format!("nom-{:03}", nominations.len() + 1),
            nominator_id: nominator.to_string(),
            category: category.to_string(),
            raw_answer: None,
            nominated_ids: nominees.iter().map(|s| (*s).to_string()).collect(),
            timestamp: Some("2025-09-15T10:00:00Z".to_string()),
        });
    };

    // Core clique: s01-s04 all play together, s01/s02 best friends
    nominate("s01", "best_friend", &["s02"]);
    nominate("s02", "best_friend", &["s01"]);
    nominate("s01", "play_with", &["s03", "s04"]);
    nominate("s02", "play_with", &["s03"]);
    nominate("s03", "play_with", &["s01", "s02", "s04"]);
    nominate("s04", "play_with", &["s01", "s03"]);

    // Second, looser work group: s05-s07
    nominate("s05", "work_with", &["s06", "s07"]);
    nominate("s06", "work_with", &["s05"]);
    nominate("s07", "work_with", &["s05", "s06"]);

    // s08 rejected by much of the class
    nominate("s01", "reject", &["s08"]);
    nominate("s03", "reject", &["s08"]);
    nominate("s05", "reject", &["s08"]);

    // s09 repeatedly named as aggressor, s10 as victim
    nominate("s02", "aggressor", &["s09"]);
    nominate("s04", "aggressor", &["s09"]);
    nominate("s06", "aggressor", &["s09"]);
    nominate("s02", "victim", &["s10"]);
    nominate("s04", "victim", &["s10"]);
    nominate("s07", "victim", &["s10"]);

    // s11 keeps one friendship; s12 gives and receives nothing
    nominate("s11", "play_with", &["s05"]);

    EvaluationRecord {
        group_id: "demo-group".to_string(),
        group_name: "Demo classroom".to_string(),
        institution_id: Some("demo-institution".to_string()),
        roster,
        nominations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_classroom_is_structurally_valid() {
        let record = example_classroom();
        assert!(record.validate().is_ok());
        assert_eq!(record.roster.len(), 12);
        assert!(!record.nominations.is_empty());
    }

    #[test]
    fn example_classroom_is_deterministic() {
        let a = serde_json::to_string(&example_classroom()).unwrap();
        let b = serde_json::to_string(&example_classroom()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn example_covers_every_scored_category() {
        let record = example_classroom();
        for category in ["best_friend", "play_with", "work_with", "reject", "aggressor", "victim"] {
            assert!(
                record.nominations.iter().any(|n| n.category == category),
                "missing category {}",
                category
            );
        }
    }
}
