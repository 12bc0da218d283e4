use serde::{Deserialize, Serialize};

use super::AdmissionContext;

/// Kind of training a candidate can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingType {
    Bachelor,
    Master,
    Doctorate,
    Aggregation,
    Certificate,
    ContinuingEducation,
}

impl TrainingType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingType::Bachelor => "Bachelor",
            TrainingType::Master => "Master",
            TrainingType::Doctorate => "PhD",
            TrainingType::Aggregation => "Aggregation",
            TrainingType::Certificate => "Certificate",
            TrainingType::ContinuingEducation => "Continuing education",
        }
    }

    /// Wire identifier, matching the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            TrainingType::Bachelor => "BACHELOR",
            TrainingType::Master => "MASTER",
            TrainingType::Doctorate => "DOCTORATE",
            TrainingType::Aggregation => "AGGREGATION",
            TrainingType::Certificate => "CERTIFICATE",
            TrainingType::ContinuingEducation => "CONTINUING_EDUCATION",
        }
    }

    pub fn from_code(code: &str) -> Option<TrainingType> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    /// Admission context an application for this training goes through
    pub fn admission_context(&self) -> AdmissionContext {
        match self {
            TrainingType::Doctorate => AdmissionContext::Doctorate,
            TrainingType::ContinuingEducation => AdmissionContext::ContinuingEducation,
            _ => AdmissionContext::GeneralEducation,
        }
    }

    pub fn all() -> Vec<TrainingType> {
        vec![
            TrainingType::Bachelor,
            TrainingType::Master,
            TrainingType::Doctorate,
            TrainingType::Aggregation,
            TrainingType::Certificate,
            TrainingType::ContinuingEducation,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for training_type in TrainingType::all() {
            assert_eq!(
                TrainingType::from_code(training_type.code()),
                Some(training_type)
            );
        }
        assert_eq!(TrainingType::from_code("PHD"), None);
    }

    #[test]
    fn test_admission_context() {
        assert_eq!(
            TrainingType::Doctorate.admission_context(),
            AdmissionContext::Doctorate
        );
        assert_eq!(
            TrainingType::Master.admission_context(),
            AdmissionContext::GeneralEducation
        );
        assert_eq!(
            TrainingType::ContinuingEducation.admission_context(),
            AdmissionContext::ContinuingEducation
        );
    }
}
