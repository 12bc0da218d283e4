use serde::{Deserialize, Serialize};

/// CEFR grade a candidate self-assesses a language skill with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageKnowledgeGrade {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl LanguageKnowledgeGrade {
    pub fn code(&self) -> &'static str {
        match self {
            LanguageKnowledgeGrade::A1 => "A1",
            LanguageKnowledgeGrade::A2 => "A2",
            LanguageKnowledgeGrade::B1 => "B1",
            LanguageKnowledgeGrade::B2 => "B2",
            LanguageKnowledgeGrade::C1 => "C1",
            LanguageKnowledgeGrade::C2 => "C2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A1" => Some(LanguageKnowledgeGrade::A1),
            "A2" => Some(LanguageKnowledgeGrade::A2),
            "B1" => Some(LanguageKnowledgeGrade::B1),
            "B2" => Some(LanguageKnowledgeGrade::B2),
            "C1" => Some(LanguageKnowledgeGrade::C1),
            "C2" => Some(LanguageKnowledgeGrade::C2),
            _ => None,
        }
    }

    /// All grades, weakest first
    pub fn all() -> Vec<LanguageKnowledgeGrade> {
        vec![
            LanguageKnowledgeGrade::A1,
            LanguageKnowledgeGrade::A2,
            LanguageKnowledgeGrade::B1,
            LanguageKnowledgeGrade::B2,
            LanguageKnowledgeGrade::C1,
            LanguageKnowledgeGrade::C2,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for grade in LanguageKnowledgeGrade::all() {
            assert_eq!(LanguageKnowledgeGrade::from_code(grade.code()), Some(grade));
        }
        assert_eq!(LanguageKnowledgeGrade::from_code("D1"), None);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&LanguageKnowledgeGrade::B2).unwrap();
        assert_eq!(json, "\"B2\"");
        assert_eq!(LanguageKnowledgeGrade::default(), LanguageKnowledgeGrade::A1);
    }
}
