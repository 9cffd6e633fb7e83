//! Static permission and menu catalogs.
//!
//! These tables are deploy-time data: changing who may do what means
//! shipping a new build, never mutating state at runtime. Permission
//! identifiers follow the `resource.action` convention and form a closed
//! set shared with the backend.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Role name that bypasses the grant table entirely.
pub const ADMIN_ROLE: &str = "Admin";

/// The closed permission catalog.
pub mod perms {
    pub const USERS_VIEW: &str = "users.view";
    pub const USERS_CREATE: &str = "users.create";
    pub const USERS_EDIT: &str = "users.edit";
    pub const USERS_DELETE: &str = "users.delete";

    pub const PATIENTS_VIEW: &str = "patients.view";
    pub const PATIENTS_CREATE: &str = "patients.create";
    pub const PATIENTS_EDIT: &str = "patients.edit";
    pub const PATIENTS_DELETE: &str = "patients.delete";

    pub const APPOINTMENTS_VIEW: &str = "appointments.view";
    pub const APPOINTMENTS_CREATE: &str = "appointments.create";
    pub const APPOINTMENTS_EDIT: &str = "appointments.edit";
    pub const APPOINTMENTS_DELETE: &str = "appointments.delete";

    pub const ROLES_VIEW: &str = "roles.view";
    pub const ROLES_CREATE: &str = "roles.create";
    pub const ROLES_EDIT: &str = "roles.edit";
    pub const ROLES_DELETE: &str = "roles.delete";

    pub const PAYMENTS_VIEW: &str = "payments.view";
    pub const PAYMENTS_CREATE: &str = "payments.create";

    pub const INVOICES_VIEW: &str = "invoices.view";

    pub const REPORTS_VIEW: &str = "reports.view";
}

/// Every permission in the catalog, for exhaustive checks.
pub const ALL_PERMISSIONS: &[&str] = &[
    perms::USERS_VIEW,
    perms::USERS_CREATE,
    perms::USERS_EDIT,
    perms::USERS_DELETE,
    perms::PATIENTS_VIEW,
    perms::PATIENTS_CREATE,
    perms::PATIENTS_EDIT,
    perms::PATIENTS_DELETE,
    perms::APPOINTMENTS_VIEW,
    perms::APPOINTMENTS_CREATE,
    perms::APPOINTMENTS_EDIT,
    perms::APPOINTMENTS_DELETE,
    perms::ROLES_VIEW,
    perms::ROLES_CREATE,
    perms::ROLES_EDIT,
    perms::ROLES_DELETE,
    perms::PAYMENTS_VIEW,
    perms::PAYMENTS_CREATE,
    perms::INVOICES_VIEW,
    perms::REPORTS_VIEW,
];

/// Grants for every non-admin role. Roles absent from this table grant
/// nothing.
pub static ROLE_GRANTS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    use perms::*;

    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert(
        "Doctor",
        &[PATIENTS_VIEW, PATIENTS_EDIT, APPOINTMENTS_VIEW, APPOINTMENTS_EDIT][..],
    );
    table.insert(
        "Receptionist",
        &[
            PATIENTS_VIEW,
            PATIENTS_CREATE,
            PATIENTS_EDIT,
            APPOINTMENTS_VIEW,
            APPOINTMENTS_CREATE,
            APPOINTMENTS_EDIT,
            PAYMENTS_VIEW,
        ][..],
    );
    table.insert(
        "Accountant",
        &[PAYMENTS_VIEW, PAYMENTS_CREATE, INVOICES_VIEW, REPORTS_VIEW][..],
    );
    table.insert("Nurse", &[PATIENTS_VIEW, APPOINTMENTS_VIEW][..]);
    table
});

/// What a menu item requires to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRequirement {
    /// Visible to every authenticated identity.
    AlwaysAllowed,
    /// Visible only when the role set grants the named permission.
    Permission(&'static str),
}

/// Menu-key table. Keys absent from this table are inaccessible.
pub static MENU_ITEMS: Lazy<HashMap<&'static str, MenuRequirement>> = Lazy::new(|| {
    use perms::*;

    let mut table = HashMap::new();
    table.insert("dashboard", MenuRequirement::AlwaysAllowed);
    table.insert("users", MenuRequirement::Permission(USERS_VIEW));
    table.insert("patients", MenuRequirement::Permission(PATIENTS_VIEW));
    table.insert("appointments", MenuRequirement::Permission(APPOINTMENTS_VIEW));
    table.insert("roles", MenuRequirement::Permission(ROLES_VIEW));
    table.insert("payments", MenuRequirement::Permission(PAYMENTS_VIEW));
    table.insert("invoices", MenuRequirement::Permission(INVOICES_VIEW));
    table.insert("reports", MenuRequirement::Permission(REPORTS_VIEW));
    table
});
