use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::links::{ActionLinkMap, ActionLinked};
use crate::enums::{AdmissionContext, AdmissionStatus, TrainingType};

/// Summary of the training an application targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub acronym: String,
    pub title: String,
    pub academic_year: i32,
    pub campus: String,
    pub training_type: TrainingType,
}

/// A candidate's in-progress application record.
///
/// The proposition lifecycle (draft, signing, submitted, decided) is owned
/// by the backend; this DTO is a read model of it, always fetched fresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposition {
    pub uuid: Uuid,
    pub reference: String,
    pub context: AdmissionContext,
    pub status: AdmissionStatus,
    pub candidate_matricule: String,
    pub training: TrainingSummary,
    #[serde(default)]
    pub links: ActionLinkMap,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl ActionLinked for Proposition {
    fn links(&self) -> &ActionLinkMap {
        &self.links
    }
}

/// Dashboard payload: every proposition of the candidate, split per
/// context, plus the global links gating the creation flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropositionCollection {
    #[serde(default)]
    pub doctorate_propositions: Vec<Proposition>,
    #[serde(default)]
    pub general_education_propositions: Vec<Proposition>,
    #[serde(default)]
    pub continuing_education_propositions: Vec<Proposition>,
    #[serde(default)]
    pub links: ActionLinkMap,
}

impl ActionLinked for PropositionCollection {
    fn links(&self) -> &ActionLinkMap {
        &self.links
    }
}

/// Response of the creation endpoint: just enough to route to the new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropositionIdentity {
    pub uuid: Uuid,
}

/// Payload of the creation form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropositionDto {
    pub training_type: TrainingType,
    pub training_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarship_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// One business rule violation reported by the backend when a proposition
/// is verified or submitted, e.g. `PROPOSITION-17` for an incomplete
/// research project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropositionBusinessError {
    pub status_code: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_default_to_empty() {
        let json = r#"{
            "uuid": "55375049-9d61-4c11-9f41-7460463a5ae3",
            "reference": "24-300001",
            "context": "doctorate",
            "status": "IN_DRAFT",
            "candidate_matricule": "0123456",
            "training": {
                "acronym": "SC3DP",
                "title": "PhD in Sciences",
                "academic_year": 2024,
                "campus": "Louvain-la-Neuve",
                "training_type": "DOCTORATE"
            },
            "created_at": "2024-03-15T14:02:26Z",
            "modified_at": "2024-03-15T14:02:26Z"
        }"#;
        let proposition: Proposition = serde_json::from_str(json).unwrap();
        assert!(!proposition.links.allows("retrieve_person"));
    }
}
