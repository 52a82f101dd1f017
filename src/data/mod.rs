//! Input records handed over by the persistence collaborator

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One roster entry as stored upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl IndividualRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One survey answer: an individual naming peers for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominationRecord {
    pub id: String,

    /// Id of the individual who answered
    pub nominator_id: String,

    /// Nomination category, e.g. "play_with" or "reject"
    pub category: String,

    /// Raw answer text as captured by the survey form
    #[serde(default)]
    pub raw_answer: Option<String>,

    /// Ids of the nominated peers
    pub nominated_ids: Vec<String>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A full classroom evaluation: group identity, roster, and nominations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub group_id: String,
    pub group_name: String,
    #[serde(default)]
    pub institution_id: Option<String>,
    pub roster: Vec<IndividualRecord>,
    pub nominations: Vec<NominationRecord>,
}

/// Structural input problems that abort the analysis before any computation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("duplicate individual id in roster: {0}")]
    DuplicateIndividualId(String),
}

impl EvaluationRecord {
    /// Reject structurally invalid input.
    ///
    /// Duplicate roster ids would silently merge two individuals' scores, so
    /// they are fatal here rather than detected mid-pipeline.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.roster.len());
        for individual in &self.roster {
            if !seen.insert(individual.id.as_str()) {
                return Err(ValidationError::DuplicateIndividualId(
                    individual.id.clone(),
                ));
            }
        }
        Ok(())
    }
}
