use std::borrow::Borrow;

/// One navigable section of the application UI, identified by a stable key.
///
/// Identity is the key alone. Labels and icons are display concerns looked
/// up by `tab_label` / `tab_icon` at render time, so the same logical tab
/// can be presented differently per context without breaking equality or
/// set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tab(pub &'static str);

impl Tab {
    pub fn id(&self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for Tab {
    fn as_ref(&self) -> &str {
        self.0
    }
}

// Lets a raw identifier look up sets/maps keyed by Tab.
impl Borrow<str> for Tab {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for Tab {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tab {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Returns the readable label for a tab key. Fallback: the empty string.
pub fn tab_label(key: &str) -> &'static str {
    match key {
        // ── Parent tabs ───────────────────────────────────────────────────
        "personal-data" => "Personal data",
        "previous-experience" => "Previous experience",
        "doctorate" => "Research",
        "additional-information" => "Additional information",
        "finalization" => "Finalisation",

        // ── Child tabs ────────────────────────────────────────────────────
        "training-choice" => "Course choice",
        "person" => "Identification",
        "coordonnees" => "Contact details",
        "education" => "Secondary studies",
        "curriculum" => "Curriculum",
        "languages" => "Knowledge of languages",
        "project" => "Research project",
        "cotutelle" => "Cotutelle",
        "supervision" => "Supervision",
        "accounting" => "Accounting",
        "specific-questions" => "Specific aspects",
        "documents" => "Documents",
        "confirm-submit" => "Confirmation",

        _ => "",
    }
}

/// Returns the icon name for a tab key (see `shared::icons`).
pub fn tab_icon(key: &str) -> Option<&'static str> {
    match key {
        "training-choice" => Some("compass"),
        "personal-data" | "person" => Some("user"),
        "coordonnees" => Some("map-pin"),
        "previous-experience" | "curriculum" => Some("book"),
        "education" => Some("graduation-cap"),
        "languages" => Some("globe"),
        "doctorate" | "project" => Some("flask"),
        "cotutelle" => Some("link"),
        "supervision" => Some("users"),
        "additional-information" | "specific-questions" => Some("clipboard"),
        "accounting" => Some("coins"),
        "finalization" | "confirm-submit" => Some("check-circle"),
        "documents" => Some("folder"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_is_the_key_only() {
        // labels differ per context, identity does not
        assert_eq!(Tab("curriculum"), Tab("curriculum"));
        assert_eq!(hash_of(&Tab("curriculum")), hash_of(&"curriculum"));
        assert_ne!(Tab("curriculum"), Tab("person"));
    }

    #[test]
    fn test_key_and_tab_are_interchangeable() {
        let tabs: HashSet<Tab> = [Tab("person"), Tab("curriculum")].into_iter().collect();
        assert!(tabs.contains("person"));
        assert!(!tabs.contains("documents"));
        assert!(Tab("person") == "person");
        assert!(Tab("person") != "curriculum");
    }

    #[test]
    fn test_unknown_key_has_no_presentation() {
        assert_eq!(tab_label("no-such-tab"), "");
        assert_eq!(tab_icon("no-such-tab"), None);
    }
}
