use contracts::admission::links::ActionLinked;

use super::policy::can_read_tab;
use super::registry::TabTree;
use super::tab::Tab;

/// Restricts a tab tree to what an admission's links allow.
///
/// Without an admission (creation flow, no record exists yet) there is
/// nothing to filter on and the full tree is returned. Otherwise a child
/// survives when its read action is granted, and a parent survives when at
/// least one of its children does. Ordering is preserved at both levels.
pub fn filter_tab_tree(tree: &TabTree, admission: Option<&dyn ActionLinked>) -> TabTree {
    let Some(admission) = admission else {
        return tree.clone();
    };

    let entries = tree
        .entries()
        .iter()
        .filter_map(|(parent, children)| {
            let visible: Vec<Tab> = children
                .iter()
                .copied()
                .filter(|tab| can_read_tab(Some(admission), *tab))
                .collect();
            (!visible.is_empty()).then_some((*parent, visible))
        })
        .collect();

    TabTree::new(entries)
}

#[cfg(test)]
mod tests {
    use contracts::admission::links::{ActionLink, ActionLinkMap, ActionLinked};
    use contracts::enums::AdmissionContext;

    use super::*;
    use crate::navigation::registry::tab_tree;

    struct FakeAdmission(ActionLinkMap);

    impl ActionLinked for FakeAdmission {
        fn links(&self) -> &ActionLinkMap {
            &self.0
        }
    }

    fn admission(links: &[(&str, bool)]) -> FakeAdmission {
        FakeAdmission(
            links
                .iter()
                .map(|(action, allowed)| {
                    let link = if *allowed {
                        ActionLink::allowed(format!("/api/{action}"))
                    } else {
                        ActionLink::forbidden("denied")
                    };
                    (action.to_string(), link)
                })
                .collect(),
        )
    }

    fn fixture() -> TabTree {
        TabTree::new(vec![
            (Tab("personal-data"), vec![Tab("person"), Tab("coordonnees")]),
            (Tab("previous-experience"), vec![Tab("curriculum")]),
        ])
    }

    #[test]
    fn test_no_admission_returns_the_full_tree() {
        let tree = fixture();
        assert_eq!(filter_tab_tree(&tree, None), tree);
    }

    #[test]
    fn test_denied_child_is_dropped_but_parent_survives() {
        let admission = admission(&[
            ("retrieve_person", true),
            ("retrieve_coordinates", false),
            ("retrieve_curriculum", true),
        ]);
        let filtered = filter_tab_tree(&fixture(), Some(&admission));
        assert_eq!(
            filtered.entries(),
            &[
                (Tab("personal-data"), vec![Tab("person")]),
                (Tab("previous-experience"), vec![Tab("curriculum")]),
            ]
        );
    }

    #[test]
    fn test_parent_with_no_visible_child_is_dropped_entirely() {
        let admission = admission(&[
            ("retrieve_person", false),
            ("retrieve_coordinates", false),
            ("retrieve_curriculum", true),
        ]);
        let filtered = filter_tab_tree(&fixture(), Some(&admission));
        assert_eq!(
            filtered.entries(),
            &[(Tab("previous-experience"), vec![Tab("curriculum")])]
        );
    }

    #[test]
    fn test_unlisted_actions_hide_everything() {
        let admission = admission(&[]);
        let filtered = filter_tab_tree(&fixture(), Some(&admission));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filtering_never_adds_or_reorders() {
        // every child action of the doctorate tree, alternately granted
        let tree = tab_tree(AdmissionContext::Doctorate);
        let links: Vec<(String, bool)> = tree
            .children()
            .enumerate()
            .map(|(index, tab)| {
                (
                    crate::navigation::policy::read_action(tab).to_string(),
                    index % 2 == 0,
                )
            })
            .collect();
        let links_ref: Vec<(&str, bool)> =
            links.iter().map(|(a, g)| (a.as_str(), *g)).collect();
        let filtered = filter_tab_tree(tree, Some(&admission(&links_ref)));

        for (parent, children) in filtered.entries() {
            // every surviving pair exists in the input, under the same parent
            let original = tree.children_of(parent.id()).expect("parent added");
            assert!(!children.is_empty());
            // surviving children keep their relative order
            let positions: Vec<usize> = children
                .iter()
                .map(|tab| original.iter().position(|t| t == tab).expect("tab added"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
        // surviving parents keep their relative order
        let parent_positions: Vec<usize> = filtered
            .parents()
            .map(|parent| {
                tree.parents()
                    .position(|p| p == parent)
                    .expect("parent added")
            })
            .collect();
        assert!(parent_positions.windows(2).all(|w| w[0] < w[1]));
    }
}
