//! Display mapping of admission statuses and backend business errors.

use contracts::admission::SignatureState;
use contracts::enums::AdmissionStatus;

/// Badge variant (see `shared::components::ui::Badge`) for a status
pub fn status_badge_variant(status: AdmissionStatus) -> &'static str {
    match status {
        AdmissionStatus::InDraft => "primary",
        AdmissionStatus::EnrolmentAuthorized => "success",
        AdmissionStatus::EnrolmentDenied => "error",
        status if status.is_to_complete() => "warning",
        AdmissionStatus::Cancelled | AdmissionStatus::Closed => "neutral",
        // submitted, somewhere in the backend pipeline
        _ => "primary",
    }
}

/// Badge variant for a supervision actor's signature progress
pub fn signature_badge_variant(state: SignatureState) -> &'static str {
    match state {
        SignatureState::NotInvited => "neutral",
        SignatureState::Invited => "warning",
        SignatureState::Approved => "success",
        SignatureState::Declined => "error",
    }
}

/// Tab where a submission-time business error should be surfaced, so the
/// confirmation page can send the candidate to the form that can fix it.
///
/// Codes without a tab (backend-internal conditions like "proposition not
/// found") stay attached to the confirmation page itself.
pub fn tab_for_business_error(status_code: &str) -> Option<&'static str> {
    match status_code {
        // justification is asked on the course choice form
        "PROPOSITION-16" => Some("training-choice"),
        "PROPOSITION-17" => Some("project"),
        "PROPOSITION-18" | "PROPOSITION-21" => Some("cotutelle"),
        "PROPOSITION-19" | "PROPOSITION-20" | "PROPOSITION-22" | "PROPOSITION-23" => {
            Some("supervision")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_variant() {
        assert_eq!(status_badge_variant(AdmissionStatus::InDraft), "primary");
        assert_eq!(
            status_badge_variant(AdmissionStatus::EnrolmentAuthorized),
            "success"
        );
        assert_eq!(
            status_badge_variant(AdmissionStatus::ToCompleteForFaculty),
            "warning"
        );
        assert_eq!(status_badge_variant(AdmissionStatus::Cancelled), "neutral");
        assert_eq!(status_badge_variant(AdmissionStatus::Confirmed), "primary");
    }

    #[test]
    fn test_signature_badge_variant() {
        assert_eq!(signature_badge_variant(SignatureState::Approved), "success");
        assert_eq!(signature_badge_variant(SignatureState::Declined), "error");
        assert_eq!(signature_badge_variant(SignatureState::Invited), "warning");
        assert_eq!(
            signature_badge_variant(SignatureState::NotInvited),
            "neutral"
        );
    }

    #[test]
    fn test_business_errors_route_to_their_form() {
        assert_eq!(tab_for_business_error("PROPOSITION-17"), Some("project"));
        assert_eq!(tab_for_business_error("PROPOSITION-21"), Some("cotutelle"));
        assert_eq!(tab_for_business_error("PROPOSITION-19"), Some("supervision"));
        // not something the candidate can fix from a tab
        assert_eq!(tab_for_business_error("PROPOSITION-3"), None);
    }
}
