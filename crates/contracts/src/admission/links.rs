use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry of the permission link map attached to every admission DTO.
///
/// The backend answers each known action name with either the URL to call
/// (the action is allowed for the acting user) or a human-readable reason
/// why it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionLink {
    Allowed { url: String },
    Forbidden { error: String },
}

impl ActionLink {
    pub fn allowed(url: impl Into<String>) -> Self {
        ActionLink::Allowed { url: url.into() }
    }

    pub fn forbidden(error: impl Into<String>) -> Self {
        ActionLink::Forbidden {
            error: error.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, ActionLink::Allowed { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ActionLink::Allowed { url } => Some(url),
            ActionLink::Forbidden { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionLink::Allowed { .. } => None,
            ActionLink::Forbidden { error } => Some(error),
        }
    }
}

/// Per-admission, per-action authorization results, keyed by action name.
///
/// Supplied fresh on every admission fetch; an action that is not listed at
/// all is treated the same as a forbidden one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionLinkMap(pub HashMap<String, ActionLink>);

impl ActionLinkMap {
    pub fn allows(&self, action: &str) -> bool {
        self.0.get(action).is_some_and(ActionLink::is_allowed)
    }

    pub fn url(&self, action: &str) -> Option<&str> {
        self.0.get(action).and_then(ActionLink::url)
    }

    pub fn error(&self, action: &str) -> Option<&str> {
        self.0.get(action).and_then(ActionLink::error)
    }
}

impl<S: Into<String>> FromIterator<(S, ActionLink)> for ActionLinkMap {
    fn from_iter<I: IntoIterator<Item = (S, ActionLink)>>(iter: I) -> Self {
        ActionLinkMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Contract for anything carrying a permission link map.
///
/// Tab filtering and access checks only ever need the links, so they accept
/// any admission representation through this trait.
pub trait ActionLinked {
    fn links(&self) -> &ActionLinkMap;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows() {
        let links: ActionLinkMap = [
            ("retrieve_person", ActionLink::allowed("/person")),
            ("update_person", ActionLink::forbidden("read only")),
        ]
        .into_iter()
        .collect();

        assert!(links.allows("retrieve_person"));
        assert!(!links.allows("update_person"));
        assert!(!links.allows("unknown_action"));
        assert_eq!(links.url("retrieve_person"), Some("/person"));
        assert_eq!(links.error("update_person"), Some("read only"));
    }

    #[test]
    fn test_wire_shape() {
        let link: ActionLink = serde_json::from_str(r#"{"url": "/api/x"}"#).unwrap();
        assert!(link.is_allowed());
        let link: ActionLink = serde_json::from_str(r#"{"error": "denied"}"#).unwrap();
        assert!(!link.is_allowed());
    }
}
