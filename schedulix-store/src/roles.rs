//! Roles slice.
//!
//! Manages the server-backed role entities (administrative CRUD). These
//! records do not feed the permission resolver, which reads its own
//! static catalog.

use anyhow::Result;
use schedulix_client::resources::roles;
use schedulix_core::models::{CreateRole, Role, RoleFilter, UpdateRole};
use schedulix_core::SchedulixError;
use uuid::Uuid;

use crate::collection::{CollectionAction, CollectionState, EntityRecord};
use crate::store::{Slice, Store};

impl EntityRecord for Role {
    fn entity_id(&self) -> Uuid {
        self.id
    }
}

pub type RolesState = CollectionState<Role, RoleFilter>;
pub type RolesAction = CollectionAction<Role, RoleFilter>;

impl Store {
    pub async fn load_roles(&self) -> Result<()> {
        let (filter, page) = self.roles_list_params();
        let seq = self.next_list_seq(Slice::Roles);
        self.dispatch_roles(RolesAction::ListStarted { seq });

        match roles::list(self.client(), &filter, page).await {
            Ok((items, pagination)) => {
                self.dispatch_roles(RolesAction::ListLoaded {
                    seq,
                    items,
                    pagination,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to load roles");
                self.dispatch_roles(RolesAction::ListFailed { seq, message });
                Err(err)
            }
        }
    }

    pub async fn fetch_role(&self, id: Uuid) -> Result<()> {
        self.dispatch_roles(RolesAction::OpStarted);
        match roles::get(self.client(), id).await {
            Ok(role) => {
                self.dispatch_roles(RolesAction::CurrentLoaded(role));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to fetch role");
                self.dispatch_roles(RolesAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn create_role(&self, data: &CreateRole) -> Result<()> {
        self.dispatch_roles(RolesAction::OpStarted);
        match roles::create(self.client(), data).await {
            Ok(role) => {
                self.dispatch_roles(RolesAction::Created(role));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to create role");
                self.dispatch_roles(RolesAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn update_role(&self, id: Uuid, data: &UpdateRole) -> Result<()> {
        self.dispatch_roles(RolesAction::OpStarted);
        match roles::update(self.client(), id, data).await {
            Ok(role) => {
                self.dispatch_roles(RolesAction::Updated(role));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to update role");
                self.dispatch_roles(RolesAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn delete_role(&self, id: Uuid) -> Result<()> {
        self.dispatch_roles(RolesAction::OpStarted);
        match roles::remove(self.client(), id).await {
            Ok(()) => {
                self.dispatch_roles(RolesAction::Removed(id));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to delete role");
                self.dispatch_roles(RolesAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub fn set_role_filter(&self, filter: RoleFilter) {
        self.dispatch_roles(RolesAction::FilterChanged(filter));
    }
}
