use serde::{Deserialize, Serialize};

/// Lifecycle status of a proposition, as reported by the admissions API.
///
/// The union of the per-context status sets: doctorate and continuing
/// education only ever use a subset of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdmissionStatus {
    InDraft,
    Confirmed,
    WaitingForSignature,
    ApplicationFeesPending,
    ProcessingByFaculty,
    ToCompleteForEnrolmentOffice,
    CompletedForEnrolmentOffice,
    ToCompleteForFaculty,
    CompletedForFaculty,
    FeedbackFromFaculty,
    AwaitingManagementApproval,
    EnrolmentAuthorized,
    EnrolmentDenied,
    Cancelled,
    Closed,
}

impl AdmissionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AdmissionStatus::InDraft => "In draft form",
            AdmissionStatus::Confirmed => "Application confirmed",
            AdmissionStatus::WaitingForSignature => "Waiting for signature",
            AdmissionStatus::ApplicationFeesPending => "Pending application fees",
            AdmissionStatus::ProcessingByFaculty => "Processing by faculty",
            AdmissionStatus::ToCompleteForEnrolmentOffice => "To be completed for the enrolment office",
            AdmissionStatus::CompletedForEnrolmentOffice => "Completed for the enrolment office",
            AdmissionStatus::ToCompleteForFaculty => "To be completed for the faculty",
            AdmissionStatus::CompletedForFaculty => "Completed for the faculty",
            AdmissionStatus::FeedbackFromFaculty => "Feedback from the faculty",
            AdmissionStatus::AwaitingManagementApproval => "Awaiting management approval",
            AdmissionStatus::EnrolmentAuthorized => "Application accepted",
            AdmissionStatus::EnrolmentDenied => "Application denied",
            AdmissionStatus::Cancelled => "Cancelled application",
            AdmissionStatus::Closed => "Closed",
        }
    }

    /// The candidate still has the hand on the application
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            AdmissionStatus::InDraft | AdmissionStatus::WaitingForSignature
        )
    }

    /// The backend sent the application back to the candidate
    pub fn is_to_complete(&self) -> bool {
        matches!(
            self,
            AdmissionStatus::ToCompleteForEnrolmentOffice | AdmissionStatus::ToCompleteForFaculty
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AdmissionStatus::Cancelled)
    }

    /// A final decision has been taken
    pub fn is_decided(&self) -> bool {
        matches!(
            self,
            AdmissionStatus::EnrolmentAuthorized
                | AdmissionStatus::EnrolmentDenied
                | AdmissionStatus::Closed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&AdmissionStatus::WaitingForSignature).unwrap();
        assert_eq!(json, "\"WAITING_FOR_SIGNATURE\"");
        let back: AdmissionStatus = serde_json::from_str("\"IN_DRAFT\"").unwrap();
        assert_eq!(back, AdmissionStatus::InDraft);
    }

    #[test]
    fn test_classification() {
        assert!(AdmissionStatus::InDraft.is_in_progress());
        assert!(!AdmissionStatus::Confirmed.is_in_progress());
        assert!(AdmissionStatus::ToCompleteForFaculty.is_to_complete());
        assert!(AdmissionStatus::EnrolmentDenied.is_decided());
        assert!(!AdmissionStatus::Cancelled.is_decided());
    }
}
