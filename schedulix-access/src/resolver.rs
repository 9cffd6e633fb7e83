//! Permission resolution.
//!
//! Pure functions over the static catalogs: identical inputs always yield
//! identical outputs, with no dependency on wall-clock time, network state,
//! or prior calls. Anything the tables do not recognize resolves to
//! `false`.

use crate::catalog::{MenuRequirement, ADMIN_ROLE, MENU_ITEMS, ROLE_GRANTS};

/// Does this set of role names grant `permission`?
///
/// The `Admin` role grants everything, including permissions outside the
/// catalog. Otherwise the check passes iff any role in the set has the
/// permission in its grant list. Unknown roles grant nothing; an empty
/// role set grants nothing.
pub fn has_permission<S: AsRef<str>>(roles: &[S], permission: &str) -> bool {
    if roles.iter().any(|r| r.as_ref() == ADMIN_ROLE) {
        return true;
    }

    roles.iter().any(|role| {
        ROLE_GRANTS
            .get(role.as_ref())
            .is_some_and(|granted| granted.iter().any(|g| *g == permission))
    })
}

/// Can this set of role names access menu item `menu_key`?
///
/// Unknown menu keys are inaccessible to everyone except `Admin` (the
/// bypass applies before the table lookup fails closed).
pub fn can_access_menu_item<S: AsRef<str>>(roles: &[S], menu_key: &str) -> bool {
    match MENU_ITEMS.get(menu_key).copied() {
        Some(MenuRequirement::AlwaysAllowed) => true,
        Some(MenuRequirement::Permission(required)) => has_permission(roles, required),
        // Delegating with a key no grant list contains keeps the
        // admin bypass and denies everyone else.
        None => has_permission(roles, menu_key),
    }
}
