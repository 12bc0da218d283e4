//! Permission-gated tab navigation model.
//!
//! Contains:
//! - `tab` - the tab value type plus label/icon lookup
//! - `registry` - the static tab tree of each admission context
//! - `policy` - tab → required action link tables and access checks
//! - `filter` - restriction of a tree to what an admission's links allow
//! - `resolver` - active tab / active parent derivation from the route

pub mod filter;
pub mod policy;
pub mod registry;
pub mod resolver;
pub mod tab;

pub use filter::filter_tab_tree;
pub use policy::{can_read_tab, can_update_tab};
pub use registry::{tab_tree, TabTree};
pub use resolver::{active_parent, resolve_active_tab, UPDATE_NAMESPACE};
pub use tab::Tab;
