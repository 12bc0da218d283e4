use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::LanguageKnowledgeGrade;

/// Candidate identification data, as edited in the "Personal data" tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_country: Option<String>,
    pub national_register_number: Option<String>,
    pub sex: Option<String>,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub street_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

/// Contact details edited in the "Contact details" tab.
///
/// The contact address is optional; when absent, mail goes to the
/// residential one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub residential: AddressDto,
    pub contact: Option<AddressDto>,
    pub phone_mobile: Option<String>,
    pub private_email: Option<String>,
}

/// One declared language of the "Knowledge of languages" tab, with CEFR
/// self-assessment grades. `language` is the ISO code of the language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageKnowledgeDto {
    pub language: String,
    #[serde(default)]
    pub listening_comprehension: LanguageKnowledgeGrade,
    #[serde(default)]
    pub speaking_ability: LanguageKnowledgeGrade,
    #[serde(default)]
    pub writing_ability: LanguageKnowledgeGrade,
}
