//! Store composition.
//!
//! One [`Store`] combines every slice behind shared interior mutability
//! and exposes the uniform dispatch/subscribe contract the UI layer
//! drives. Reducers run synchronously under a short write lock; async
//! actions never hold a lock across an await point, so slices never block
//! one another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use anyhow::Result;
use parking_lot::RwLock;
use schedulix_client::{ApiClient, BearerSource};
use schedulix_core::models::PageQuery;
use schedulix_core::ClientOptions;
use tracing::warn;

use crate::admin::{self, AdminAction, AdminState};
use crate::appointments::{AppointmentsAction, AppointmentsState};
use crate::auth::{self, AuthAction, AuthPhase, AuthState};
use crate::collection;
use crate::patients::{PatientsAction, PatientsState};
use crate::roles::{RolesAction, RolesState};
use crate::storage::{self, MemoryStore, SessionStore};
use crate::users::{UsersAction, UsersState};

/// Which slice a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Auth,
    Users,
    Patients,
    Roles,
    Appointments,
    Admin,
}

/// Listener invoked after every reducer application.
pub type Subscriber = Arc<dyn Fn(Slice) + Send + Sync>;

#[derive(Default)]
struct ListSequences {
    users: AtomicU64,
    patients: AtomicU64,
    roles: AtomicU64,
    appointments: AtomicU64,
}

struct StoreInner {
    client: ApiClient,
    storage: Arc<dyn SessionStore>,
    auth: RwLock<AuthState>,
    users: RwLock<UsersState>,
    patients: RwLock<PatientsState>,
    roles: RwLock<RolesState>,
    appointments: RwLock<AppointmentsState>,
    admin: RwLock<AdminState>,
    list_seqs: ListSequences,
    subscribers: RwLock<Vec<(u64, Subscriber)>>,
    next_subscriber_id: AtomicU64,
}

/// The composed client-side store.
///
/// Cheap to clone; clones share state.
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// The client reads the live token straight from the session store, so a
/// token installed by login is attached to the very next request.
struct StorageBearer(Arc<dyn SessionStore>);

impl BearerSource for StorageBearer {
    fn bearer_token(&self) -> Option<String> {
        self.0.get(storage::TOKEN_KEY).ok().flatten()
    }
}

impl Store {
    /// Build a store over the given session storage backend. The auth
    /// slice is hydrated from whatever session the storage already holds.
    pub fn new(options: ClientOptions, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = ApiClient::new(options, Arc::new(StorageBearer(session.clone())))?;

        let inner = Arc::new(StoreInner {
            client,
            storage: session,
            auth: RwLock::new(AuthState::idle()),
            users: RwLock::new(UsersState::default()),
            patients: RwLock::new(PatientsState::default()),
            roles: RwLock::new(RolesState::default()),
            appointments: RwLock::new(AppointmentsState::default()),
            admin: RwLock::new(AdminState::default()),
            list_seqs: ListSequences::default(),
            subscribers: RwLock::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(1),
        });

        // Any 401 tears the session down before the failing call returns.
        let weak: Weak<StoreInner> = Arc::downgrade(&inner);
        inner.client.set_unauthorized_handler(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Store { inner }.force_logout();
            }
        }));

        let store = Store { inner };
        store.hydrate();
        Ok(store)
    }

    /// Store over an ephemeral in-memory session (tests, previews).
    pub fn in_memory(options: ClientOptions) -> Result<Self> {
        Self::new(options, Arc::new(MemoryStore::new()))
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Restore the auth slice from durable storage. A persisted token is
    /// enough to come back authenticated; a missing token means idle.
    fn hydrate(&self) {
        let restored = match storage::load_session(self.inner.storage.as_ref()) {
            Ok(Some(session)) => {
                let tenant = session
                    .tenant
                    .or_else(|| session.user.as_ref().and_then(|u| u.tenant.clone()));
                AuthState {
                    phase: AuthPhase::Authenticated,
                    token: Some(session.token),
                    user: session.user,
                    tenant,
                    error: None,
                }
            }
            Ok(None) => AuthState::idle(),
            Err(e) => {
                warn!(error = %e, "failed to restore persisted session");
                AuthState::idle()
            }
        };

        *self.inner.auth.write() = restored;
    }

    // ── Subscriptions ──────────────────────────────────────────────

    pub fn subscribe(&self, listener: impl Fn(Slice) + Send + Sync + 'static) -> u64 {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .write()
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: u64) {
        self.inner.subscribers.write().retain(|(sid, _)| *sid != id);
    }

    pub(crate) fn notify(&self, slice: Slice) {
        let listeners: Vec<Subscriber> = self
            .inner
            .subscribers
            .read()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for listener in listeners {
            listener(slice);
        }
    }

    // ── Dispatch ───────────────────────────────────────────────────

    /// Apply an auth action and keep durable storage in step with the
    /// transition, in the same operation.
    pub fn dispatch_auth(&self, action: AuthAction) {
        let next = {
            let mut guard = self.inner.auth.write();
            let next = auth::reduce(&guard, &action);
            *guard = next.clone();
            next
        };

        let storage = self.inner.storage.as_ref();
        let sync = match &action {
            AuthAction::SignedIn { token, user }
            | AuthAction::CredentialsInstalled { token, user } => {
                storage::save_session(storage, token, user)
            }
            AuthAction::IdentityRefreshed { user } => match &next.token {
                Some(token) => storage::save_session(storage, token, user),
                None => Ok(()),
            },
            AuthAction::SignedOut => storage::clear_session(storage),
            AuthAction::Started | AuthAction::Failed { .. } => Ok(()),
        };
        if let Err(e) = sync {
            warn!(error = %e, "failed to synchronize session storage");
        }

        self.notify(Slice::Auth);
    }

    pub fn dispatch_users(&self, action: UsersAction) {
        {
            let mut guard = self.inner.users.write();
            let next = collection::reduce(&guard, &action);
            *guard = next;
        }
        self.notify(Slice::Users);
    }

    pub fn dispatch_patients(&self, action: PatientsAction) {
        {
            let mut guard = self.inner.patients.write();
            let next = collection::reduce(&guard, &action);
            *guard = next;
        }
        self.notify(Slice::Patients);
    }

    pub fn dispatch_roles(&self, action: RolesAction) {
        {
            let mut guard = self.inner.roles.write();
            let next = collection::reduce(&guard, &action);
            *guard = next;
        }
        self.notify(Slice::Roles);
    }

    pub fn dispatch_appointments(&self, action: AppointmentsAction) {
        {
            let mut guard = self.inner.appointments.write();
            let next = collection::reduce(&guard, &action);
            *guard = next;
        }
        self.notify(Slice::Appointments);
    }

    pub fn dispatch_admin(&self, action: AdminAction) {
        {
            let mut guard = self.inner.admin.write();
            let next = admin::reduce(&guard, &action);
            *guard = next;
        }
        self.notify(Slice::Admin);
    }

    // ── Snapshots ──────────────────────────────────────────────────

    pub fn auth_state(&self) -> AuthState {
        self.inner.auth.read().clone()
    }

    pub fn users_state(&self) -> UsersState {
        self.inner.users.read().clone()
    }

    pub fn patients_state(&self) -> PatientsState {
        self.inner.patients.read().clone()
    }

    pub fn roles_state(&self) -> RolesState {
        self.inner.roles.read().clone()
    }

    pub fn appointments_state(&self) -> AppointmentsState {
        self.inner.appointments.read().clone()
    }

    pub fn admin_state(&self) -> AdminState {
        self.inner.admin.read().clone()
    }

    // ── Permission gating ──────────────────────────────────────────

    /// Does the signed-in identity's role set grant `permission`? Checked
    /// against the live role set on every call.
    pub fn has_permission(&self, permission: &str) -> bool {
        let auth = self.inner.auth.read();
        schedulix_access::has_permission(auth.roles(), permission)
    }

    /// May the signed-in identity see menu item `menu_key`?
    pub fn can_access_menu_item(&self, menu_key: &str) -> bool {
        let auth = self.inner.auth.read();
        schedulix_access::can_access_menu_item(auth.roles(), menu_key)
    }

    // ── Slice plumbing ─────────────────────────────────────────────

    pub(crate) fn next_list_seq(&self, slice: Slice) -> u64 {
        let counter = match slice {
            Slice::Users => &self.inner.list_seqs.users,
            Slice::Patients => &self.inner.list_seqs.patients,
            Slice::Roles => &self.inner.list_seqs.roles,
            Slice::Appointments => &self.inner.list_seqs.appointments,
            Slice::Auth | Slice::Admin => unreachable!("slice has no list sequence"),
        };
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn users_list_params(
        &self,
    ) -> (schedulix_core::models::UserFilter, PageQuery) {
        let guard = self.inner.users.read();
        (guard.filter.clone(), page_of(&guard.pagination))
    }

    pub(crate) fn patients_list_params(
        &self,
    ) -> (schedulix_core::models::PatientFilter, PageQuery) {
        let guard = self.inner.patients.read();
        (guard.filter.clone(), page_of(&guard.pagination))
    }

    pub(crate) fn roles_list_params(&self) -> (schedulix_core::models::RoleFilter, PageQuery) {
        let guard = self.inner.roles.read();
        (guard.filter.clone(), page_of(&guard.pagination))
    }

    pub(crate) fn appointments_list_params(
        &self,
    ) -> (schedulix_core::models::AppointmentFilter, PageQuery) {
        let guard = self.inner.appointments.read();
        (guard.filter.clone(), page_of(&guard.pagination))
    }
}

fn page_of(pagination: &schedulix_core::models::Pagination) -> PageQuery {
    PageQuery {
        page: pagination.page,
        limit: pagination.limit,
    }
}
