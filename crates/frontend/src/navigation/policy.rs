//! Tab access policy: which action link must be granted for a tab to be
//! reachable, in read and in update mode.
//!
//! A tab registered in a tree but missing from these tables is a
//! programming defect; lookups panic instead of hiding the tab.

use contracts::admission::links::ActionLinked;

/// Association between a tab and the action link gating its read-only view
pub static READ_ACTIONS_BY_TAB: &[(&str, &str)] = &[
    ("training-choice", "retrieve_training_choice"),
    ("person", "retrieve_person"),
    ("coordonnees", "retrieve_coordinates"),
    ("education", "retrieve_secondary_studies"),
    ("curriculum", "retrieve_curriculum"),
    ("languages", "retrieve_languages"),
    ("project", "retrieve_proposition"),
    ("cotutelle", "retrieve_cotutelle"),
    ("supervision", "retrieve_supervision"),
    ("specific-questions", "retrieve_specific_question"),
    ("accounting", "retrieve_accounting"),
    ("documents", "retrieve_documents"),
    ("confirm-submit", "submit_proposition"),
];

/// Association between a tab and the action link gating its form view
pub static UPDATE_ACTIONS_BY_TAB: &[(&str, &str)] = &[
    ("training-choice", "update_training_choice"),
    ("person", "update_person"),
    ("coordonnees", "update_coordinates"),
    ("education", "update_secondary_studies"),
    ("curriculum", "update_curriculum"),
    ("languages", "update_languages"),
    ("project", "update_proposition"),
    ("cotutelle", "update_cotutelle"),
    ("supervision", "add_member"),
    ("specific-questions", "update_specific_question"),
    ("accounting", "update_accounting"),
    ("documents", "update_documents"),
    ("confirm-submit", "submit_proposition"),
];

fn lookup(table: &[(&str, &'static str)], table_name: &str, tab: &str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == tab)
        .map(|(_, action)| *action)
        .unwrap_or_else(|| {
            panic!("tab '{tab}' has no entry in {table_name}: tab registry and access policy have drifted")
        })
}

/// Action link required to open `tab` read-only.
///
/// Panics if the tab is not registered in the policy.
pub fn read_action(tab: impl AsRef<str>) -> &'static str {
    lookup(READ_ACTIONS_BY_TAB, "READ_ACTIONS_BY_TAB", tab.as_ref())
}

/// Action link required to open the form of `tab`.
///
/// Panics if the tab is not registered in the policy.
pub fn update_action(tab: impl AsRef<str>) -> &'static str {
    lookup(UPDATE_ACTIONS_BY_TAB, "UPDATE_ACTIONS_BY_TAB", tab.as_ref())
}

/// Whether the acting user may open `tab` read-only on this admission.
///
/// Without an admission nothing is readable. `tab` accepts a `Tab` or a raw
/// identifier.
pub fn can_read_tab(admission: Option<&dyn ActionLinked>, tab: impl AsRef<str>) -> bool {
    let action = read_action(tab);
    admission.is_some_and(|admission| admission.links().allows(action))
}

/// Whether the acting user may open the form of `tab` on this admission
pub fn can_update_tab(admission: Option<&dyn ActionLinked>, tab: impl AsRef<str>) -> bool {
    let action = update_action(tab);
    admission.is_some_and(|admission| admission.links().allows(action))
}

#[cfg(test)]
mod tests {
    use contracts::admission::links::{ActionLink, ActionLinkMap, ActionLinked};
    use contracts::enums::AdmissionContext;

    use super::*;
    use crate::navigation::registry::tab_tree;
    use crate::navigation::tab::Tab;

    struct FakeAdmission(ActionLinkMap);

    impl ActionLinked for FakeAdmission {
        fn links(&self) -> &ActionLinkMap {
            &self.0
        }
    }

    #[test]
    fn test_every_registered_tab_has_both_policy_entries() {
        for context in AdmissionContext::all() {
            for tab in tab_tree(context).children() {
                // panics on drift
                read_action(tab);
                update_action(tab);
            }
        }
    }

    #[test]
    fn test_access_requires_an_allowed_link() {
        let admission = FakeAdmission(
            [
                ("retrieve_person", ActionLink::allowed("/person")),
                ("update_person", ActionLink::forbidden("submitted")),
            ]
            .into_iter()
            .collect(),
        );

        assert!(can_read_tab(Some(&admission), "person"));
        assert!(!can_update_tab(Some(&admission), "person"));
        // action absent from the map entirely
        assert!(!can_read_tab(Some(&admission), "curriculum"));
    }

    #[test]
    fn test_no_admission_means_no_access() {
        assert!(!can_read_tab(None, "person"));
        assert!(!can_update_tab(None, Tab("person")));
    }

    #[test]
    #[should_panic(expected = "READ_ACTIONS_BY_TAB")]
    fn test_unregistered_tab_panics() {
        can_read_tab(None, "jury");
    }
}
