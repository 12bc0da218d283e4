use super::registry::TabTree;
use super::tab::Tab;

/// Route namespace marking the form (edit) variant of a tab
pub const UPDATE_NAMESPACE: &str = "update";

/// Resolves the identifier of the active tab from the route decomposition.
///
/// `segments` is the ordered list of route namespaces followed by the leaf
/// route name, e.g. `["admission", "doctorate", "update", "curriculum",
/// "educational"]` while editing one curriculum experience.
///
/// Deeper routes inherit the tab of the form they live under: past three
/// namespaces the fourth one is the tab; with exactly three the last
/// namespace is the tab unless it is the edit marker (which carries no tab
/// identity of its own); otherwise the leaf name is the tab.
pub fn resolve_active_tab<'a>(segments: &[&'a str]) -> Option<&'a str> {
    let (leaf, namespaces) = segments.split_last()?;
    match namespaces.len() {
        n if n > 3 => Some(namespaces[3]),
        3 if namespaces[2] != UPDATE_NAMESPACE => Some(namespaces[2]),
        _ => Some(*leaf),
    }
}

/// First parent whose children contain the active tab.
///
/// `None` when the tab is not part of this context's tree - a normal
/// condition (e.g. the cancellation page), not an error.
pub fn active_parent(tree: &TabTree, active_tab: &str) -> Option<Tab> {
    tree.entries()
        .iter()
        .find(|(_, children)| children.iter().any(|tab| *tab == *active_tab))
        .map(|(parent, _)| *parent)
}

#[cfg(test)]
mod tests {
    use contracts::enums::AdmissionContext;

    use super::*;
    use crate::navigation::registry::tab_tree;

    #[test]
    fn test_sub_item_inherits_the_form_tab() {
        // editing one curriculum experience
        let segments = ["admission", "doctorate", "update", "curriculum", "educational"];
        assert_eq!(resolve_active_tab(&segments), Some("curriculum"));
    }

    #[test]
    fn test_read_mode_sub_tab() {
        let segments = ["admission", "doctorate", "curriculum", "educational"];
        assert_eq!(resolve_active_tab(&segments), Some("curriculum"));
    }

    #[test]
    fn test_main_tab_read_mode() {
        let segments = ["admission", "doctorate", "curriculum"];
        assert_eq!(resolve_active_tab(&segments), Some("curriculum"));
    }

    #[test]
    fn test_edit_marker_carries_no_identity() {
        let segments = ["admission", "doctorate", "update", "person"];
        assert_eq!(resolve_active_tab(&segments), Some("person"));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(resolve_active_tab(&[]), None);
    }

    #[test]
    fn test_active_parent() {
        let tree = tab_tree(AdmissionContext::Doctorate);
        assert_eq!(active_parent(tree, "curriculum"), Some(Tab("previous-experience")));
        assert_eq!(active_parent(tree, "supervision"), Some(Tab("doctorate")));
        // not in this context's registry at all
        assert_eq!(active_parent(tree, "payment"), None);
    }
}
