//! Static tab trees - the single source of truth for which tabs exist in
//! each admission context and in which order they are presented.

use contracts::enums::AdmissionContext;
use once_cell::sync::Lazy;

use super::tab::Tab;

/// Ordered parent → children mapping for one admission context.
///
/// Ordering at both levels is presentation order; every operation consuming
/// a tree preserves it. Children lists are never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TabTree {
    entries: Vec<(Tab, Vec<Tab>)>,
}

impl TabTree {
    pub fn new(entries: Vec<(Tab, Vec<Tab>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Tab, Vec<Tab>)] {
        &self.entries
    }

    pub fn parents(&self) -> impl Iterator<Item = Tab> + '_ {
        self.entries.iter().map(|(parent, _)| *parent)
    }

    /// Every child tab, in presentation order
    pub fn children(&self) -> impl Iterator<Item = Tab> + '_ {
        self.entries
            .iter()
            .flat_map(|(_, children)| children.iter().copied())
    }

    pub fn children_of(&self, parent: &str) -> Option<&[Tab]> {
        self.entries
            .iter()
            .find(|(p, _)| *p == *parent)
            .map(|(_, children)| children.as_slice())
    }

    /// Whether `tab` appears as a child anywhere in the tree
    pub fn contains(&self, tab: &str) -> bool {
        self.children().any(|t| t == tab)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static CREATE_TREE: Lazy<TabTree> = Lazy::new(|| {
    TabTree::new(vec![(
        Tab("training-choice"),
        vec![Tab("training-choice")],
    )])
});

static DOCTORATE_TREE: Lazy<TabTree> = Lazy::new(|| {
    TabTree::new(vec![
        (Tab("training-choice"), vec![Tab("training-choice")]),
        (Tab("personal-data"), vec![Tab("person"), Tab("coordonnees")]),
        (
            Tab("previous-experience"),
            vec![Tab("education"), Tab("curriculum"), Tab("languages")],
        ),
        (
            Tab("doctorate"),
            vec![Tab("project"), Tab("cotutelle"), Tab("supervision")],
        ),
        (
            Tab("additional-information"),
            vec![Tab("specific-questions"), Tab("accounting")],
        ),
        (
            Tab("finalization"),
            vec![Tab("documents"), Tab("confirm-submit")],
        ),
    ])
});

static GENERAL_EDUCATION_TREE: Lazy<TabTree> = Lazy::new(|| {
    TabTree::new(vec![
        (Tab("training-choice"), vec![Tab("training-choice")]),
        (Tab("personal-data"), vec![Tab("person"), Tab("coordonnees")]),
        (
            Tab("previous-experience"),
            vec![Tab("education"), Tab("curriculum")],
        ),
        (
            Tab("additional-information"),
            vec![Tab("specific-questions"), Tab("accounting")],
        ),
        (
            Tab("finalization"),
            vec![Tab("documents"), Tab("confirm-submit")],
        ),
    ])
});

static CONTINUING_EDUCATION_TREE: Lazy<TabTree> = Lazy::new(|| {
    TabTree::new(vec![
        (Tab("training-choice"), vec![Tab("training-choice")]),
        (Tab("personal-data"), vec![Tab("person"), Tab("coordonnees")]),
        (
            Tab("previous-experience"),
            vec![Tab("education"), Tab("curriculum")],
        ),
        (
            Tab("additional-information"),
            vec![Tab("specific-questions")],
        ),
        (Tab("finalization"), vec![Tab("confirm-submit")]),
    ])
});

/// Returns the static tab tree of a context
pub fn tab_tree(context: AdmissionContext) -> &'static TabTree {
    match context {
        AdmissionContext::Create => &CREATE_TREE,
        AdmissionContext::Doctorate => &DOCTORATE_TREE,
        AdmissionContext::GeneralEducation => &GENERAL_EDUCATION_TREE,
        AdmissionContext::ContinuingEducation => &CONTINUING_EDUCATION_TREE,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::navigation::tab::tab_label;

    #[test]
    fn test_children_are_unique_within_a_context() {
        for context in AdmissionContext::all() {
            let mut seen = HashSet::new();
            for tab in tab_tree(context).children() {
                assert!(
                    seen.insert(tab),
                    "tab '{}' appears under two parents in {}",
                    tab,
                    context
                );
            }
        }
    }

    #[test]
    fn test_no_parent_has_an_empty_children_list() {
        for context in AdmissionContext::all() {
            for (parent, children) in tab_tree(context).entries() {
                assert!(!children.is_empty(), "parent '{}' has no children", parent);
            }
        }
    }

    #[test]
    fn test_every_registered_tab_has_a_label() {
        for context in AdmissionContext::all() {
            let tree = tab_tree(context);
            for tab in tree.parents().chain(tree.children()) {
                assert!(!tab_label(tab.id()).is_empty(), "no label for '{}'", tab);
            }
        }
    }

    #[test]
    fn test_children_of_preserves_order() {
        let tree = tab_tree(AdmissionContext::Doctorate);
        assert_eq!(
            tree.children_of("previous-experience"),
            Some(&[Tab("education"), Tab("curriculum"), Tab("languages")][..])
        );
        assert_eq!(tree.children_of("unknown"), None);
    }
}
