use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::TrainingType;

/// Country as served by the reference-data service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso_code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scholarship {
    pub uuid: Uuid,
    pub short_name: String,
    pub long_name: String,
}

impl Scholarship {
    /// Long name when available, acronym otherwise
    pub fn display_name(&self) -> &str {
        if self.long_name.is_empty() {
            &self.short_name
        } else {
            &self.long_name
        }
    }
}

/// Training offered for one academic year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub acronym: String,
    pub title: String,
    pub academic_year: i32,
    pub campus: String,
    pub training_type: TrainingType,
}

impl Training {
    /// `"<acronym>-<year>"`, the identifier the creation form submits
    pub fn training_id(&self) -> String {
        format!("{}-{}", self.acronym, self.academic_year)
    }

}

/// One page of search results from a reference endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        (self.count + page_size - 1) / page_size
    }

    /// `page` is 0-indexed
    pub fn has_next(&self, page: usize, page_size: usize) -> bool {
        page + 1 < self.total_pages(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_id() {
        let training = Training {
            acronym: "SC3DP".to_string(),
            title: "PhD in Sciences".to_string(),
            academic_year: 2024,
            campus: "Louvain-la-Neuve".to_string(),
            training_type: TrainingType::Doctorate,
        };
        assert_eq!(training.training_id(), "SC3DP-2024");
    }

    #[test]
    fn test_page_arithmetic() {
        let page: Paginated<Country> = Paginated {
            count: 101,
            results: Vec::new(),
        };
        assert_eq!(page.total_pages(50), 3);
        assert!(page.has_next(0, 50));
        assert!(page.has_next(1, 50));
        assert!(!page.has_next(2, 50));
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn test_scholarship_display_name() {
        let scholarship = Scholarship {
            uuid: Uuid::nil(),
            short_name: "ARES".to_string(),
            long_name: String::new(),
        };
        assert_eq!(scholarship.display_name(), "ARES");
    }
}
