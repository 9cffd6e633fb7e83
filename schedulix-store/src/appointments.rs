//! Appointments slice.

use anyhow::Result;
use schedulix_client::resources::appointments;
use schedulix_core::models::{
    Appointment, AppointmentFilter, CreateAppointment, UpdateAppointment,
};
use schedulix_core::SchedulixError;
use uuid::Uuid;

use crate::collection::{CollectionAction, CollectionState, EntityRecord};
use crate::store::{Slice, Store};

impl EntityRecord for Appointment {
    fn entity_id(&self) -> Uuid {
        self.id
    }
}

pub type AppointmentsState = CollectionState<Appointment, AppointmentFilter>;
pub type AppointmentsAction = CollectionAction<Appointment, AppointmentFilter>;

impl Store {
    pub async fn load_appointments(&self) -> Result<()> {
        let (filter, page) = self.appointments_list_params();
        let seq = self.next_list_seq(Slice::Appointments);
        self.dispatch_appointments(AppointmentsAction::ListStarted { seq });

        match appointments::list(self.client(), &filter, page).await {
            Ok((items, pagination)) => {
                self.dispatch_appointments(AppointmentsAction::ListLoaded {
                    seq,
                    items,
                    pagination,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to load appointments");
                self.dispatch_appointments(AppointmentsAction::ListFailed { seq, message });
                Err(err)
            }
        }
    }

    pub async fn fetch_appointment(&self, id: Uuid) -> Result<()> {
        self.dispatch_appointments(AppointmentsAction::OpStarted);
        match appointments::get(self.client(), id).await {
            Ok(appointment) => {
                self.dispatch_appointments(AppointmentsAction::CurrentLoaded(appointment));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to fetch appointment");
                self.dispatch_appointments(AppointmentsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn create_appointment(&self, data: &CreateAppointment) -> Result<()> {
        self.dispatch_appointments(AppointmentsAction::OpStarted);
        match appointments::create(self.client(), data).await {
            Ok(appointment) => {
                self.dispatch_appointments(AppointmentsAction::Created(appointment));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to create appointment");
                self.dispatch_appointments(AppointmentsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn update_appointment(&self, id: Uuid, data: &UpdateAppointment) -> Result<()> {
        self.dispatch_appointments(AppointmentsAction::OpStarted);
        match appointments::update(self.client(), id, data).await {
            Ok(appointment) => {
                self.dispatch_appointments(AppointmentsAction::Updated(appointment));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to update appointment");
                self.dispatch_appointments(AppointmentsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<()> {
        self.dispatch_appointments(AppointmentsAction::OpStarted);
        match appointments::remove(self.client(), id).await {
            Ok(()) => {
                self.dispatch_appointments(AppointmentsAction::Removed(id));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to delete appointment");
                self.dispatch_appointments(AppointmentsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub fn set_appointment_filter(&self, filter: AppointmentFilter) {
        self.dispatch_appointments(AppointmentsAction::FilterChanged(filter));
    }
}
