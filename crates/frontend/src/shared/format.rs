//! Display formatting for reference and admission data.
//!
//! Pure string helpers shared by detail views, pickers and badges.

use contracts::reference::{Country, Training};

/// Concatenate the non-empty parts of an address into one line.
/// Example: "Rue du Compas 12, 1348 Louvain-la-Neuve, Belgique"
pub fn format_address(
    street: &str,
    street_number: &str,
    postal_code: &str,
    city: &str,
    country: &str,
) -> String {
    let parts = [
        format!("{street} {street_number}"),
        format!("{postal_code} {city}"),
        country.to_string(),
    ];
    parts
        .into_iter()
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "<title> (<campus>) — <acronym>", the label trainings get in pickers
pub fn format_training(training: &Training) -> String {
    format!(
        "{} ({}) — {}",
        training.title, training.campus, training.acronym
    )
}

/// Same as `format_training`, prefixed with the academic year
pub fn format_training_with_year(training: &Training) -> String {
    format!(
        "{} - {}",
        format_academic_year(training.academic_year),
        format_training(training)
    )
}

/// Academic year spanning `year` and the next one. Example: 2024 -> "2024-2025"
pub fn format_academic_year(year: i32) -> String {
    if year == 0 {
        return String::new();
    }
    format!("{}-{}", year, year + 1)
}

pub fn format_country(country: &Country) -> String {
    format!("{} ({})", country.name, country.iso_code)
}

/// Title-case every word, but never lowercase a letter the author wrote in
/// upper case (keeps "UCLouvain", "van der Berg" readable).
pub fn force_title(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start && ch.is_lowercase() {
                result.extend(ch.to_uppercase());
            } else {
                result.push(ch);
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use contracts::enums::TrainingType;

    use super::*;

    #[test]
    fn test_format_address_skips_empty_parts() {
        assert_eq!(
            format_address("Rue du Compas", "12", "1348", "Louvain-la-Neuve", "Belgique"),
            "Rue du Compas 12, 1348 Louvain-la-Neuve, Belgique"
        );
        assert_eq!(format_address("", "", "", "Bruxelles", ""), "Bruxelles");
        assert_eq!(format_address("", "", "", "", ""), "");
        // one-character parts are real data, only blanks are dropped
        assert_eq!(format_address("", "", "", "Y", "BE"), "Y, BE");
        assert_eq!(format_address("", "", "", "  ", ""), "");
    }

    #[test]
    fn test_format_training() {
        let training = Training {
            acronym: "SC3DP".to_string(),
            title: "PhD in Sciences".to_string(),
            academic_year: 2024,
            campus: "Louvain-la-Neuve".to_string(),
            training_type: TrainingType::Doctorate,
        };
        assert_eq!(
            format_training(&training),
            "PhD in Sciences (Louvain-la-Neuve) — SC3DP"
        );
        assert_eq!(
            format_training_with_year(&training),
            "2024-2025 - PhD in Sciences (Louvain-la-Neuve) — SC3DP"
        );
    }

    #[test]
    fn test_format_academic_year() {
        assert_eq!(format_academic_year(2021), "2021-2022");
        assert_eq!(format_academic_year(0), "");
    }

    #[test]
    fn test_force_title() {
        assert_eq!(force_title("jean-pierre dupont"), "Jean-Pierre Dupont");
        assert_eq!(force_title("study at UCLouvain"), "Study At UCLouvain");
        assert_eq!(force_title("mcDonald"), "McDonald");
    }
}
