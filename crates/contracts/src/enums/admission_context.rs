use serde::{Deserialize, Serialize};

/// Admission categories, each with its own tab tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdmissionContext {
    Create,
    Doctorate,
    GeneralEducation,
    ContinuingEducation,
}

impl AdmissionContext {
    /// Stable code used in URLs and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionContext::Create => "create",
            AdmissionContext::Doctorate => "doctorate",
            AdmissionContext::GeneralEducation => "general-education",
            AdmissionContext::ContinuingEducation => "continuing-education",
        }
    }

    /// Human-readable context name
    pub fn display_name(&self) -> &'static str {
        match self {
            AdmissionContext::Create => "New application",
            AdmissionContext::Doctorate => "Doctorate",
            AdmissionContext::GeneralEducation => "General education",
            AdmissionContext::ContinuingEducation => "Continuing education",
        }
    }

    /// All contexts, creation flow included
    pub fn all() -> Vec<AdmissionContext> {
        vec![
            AdmissionContext::Create,
            AdmissionContext::Doctorate,
            AdmissionContext::GeneralEducation,
            AdmissionContext::ContinuingEducation,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "create" => Some(AdmissionContext::Create),
            "doctorate" => Some(AdmissionContext::Doctorate),
            "general-education" => Some(AdmissionContext::GeneralEducation),
            "continuing-education" => Some(AdmissionContext::ContinuingEducation),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdmissionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for context in AdmissionContext::all() {
            assert_eq!(AdmissionContext::from_code(context.code()), Some(context));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(AdmissionContext::from_code("bachelor"), None);
    }
}
