//! schedulix-access: role-based permission gating for the Schedulix client.
//!
//! The resolver answers exactly two questions ("does this role set grant
//! permission P?" and "may this role set see menu item M?") from static,
//! deploy-time tables. It performs no I/O and holds no state, so the UI can
//! re-check on every render against the live role set.

pub mod catalog;
pub mod resolver;

pub use catalog::{perms, MenuRequirement, ADMIN_ROLE, ALL_PERMISSIONS, MENU_ITEMS, ROLE_GRANTS};
pub use resolver::{can_access_menu_item, has_permission};
