//! Users slice.

use anyhow::Result;
use schedulix_client::resources::users;
use schedulix_core::models::{CreateUser, UpdateUser, User, UserFilter};
use schedulix_core::SchedulixError;
use uuid::Uuid;

use crate::collection::{CollectionAction, CollectionState, EntityRecord};
use crate::store::{Slice, Store};

impl EntityRecord for User {
    fn entity_id(&self) -> Uuid {
        self.id
    }
}

pub type UsersState = CollectionState<User, UserFilter>;
pub type UsersAction = CollectionAction<User, UserFilter>;

impl Store {
    pub async fn load_users(&self) -> Result<()> {
        let (filter, page) = self.users_list_params();
        let seq = self.next_list_seq(Slice::Users);
        self.dispatch_users(UsersAction::ListStarted { seq });

        match users::list(self.client(), &filter, page).await {
            Ok((items, pagination)) => {
                self.dispatch_users(UsersAction::ListLoaded {
                    seq,
                    items,
                    pagination,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to load users");
                self.dispatch_users(UsersAction::ListFailed { seq, message });
                Err(err)
            }
        }
    }

    pub async fn fetch_user(&self, id: Uuid) -> Result<()> {
        self.dispatch_users(UsersAction::OpStarted);
        match users::get(self.client(), id).await {
            Ok(user) => {
                self.dispatch_users(UsersAction::CurrentLoaded(user));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to fetch user");
                self.dispatch_users(UsersAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn create_user(&self, data: &CreateUser) -> Result<()> {
        self.dispatch_users(UsersAction::OpStarted);
        match users::create(self.client(), data).await {
            Ok(user) => {
                self.dispatch_users(UsersAction::Created(user));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to create user");
                self.dispatch_users(UsersAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn update_user(&self, id: Uuid, data: &UpdateUser) -> Result<()> {
        self.dispatch_users(UsersAction::OpStarted);
        match users::update(self.client(), id, data).await {
            Ok(user) => {
                self.dispatch_users(UsersAction::Updated(user));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to update user");
                self.dispatch_users(UsersAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<()> {
        self.dispatch_users(UsersAction::OpStarted);
        match users::remove(self.client(), id).await {
            Ok(()) => {
                self.dispatch_users(UsersAction::Removed(id));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to delete user");
                self.dispatch_users(UsersAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub fn set_user_filter(&self, filter: UserFilter) {
        self.dispatch_users(UsersAction::FilterChanged(filter));
    }
}
