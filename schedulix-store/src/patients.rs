//! Patients slice.

use anyhow::Result;
use schedulix_client::resources::patients;
use schedulix_core::models::{CreatePatient, Patient, PatientFilter, UpdatePatient};
use schedulix_core::SchedulixError;
use uuid::Uuid;

use crate::collection::{CollectionAction, CollectionState, EntityRecord};
use crate::store::{Slice, Store};

impl EntityRecord for Patient {
    fn entity_id(&self) -> Uuid {
        self.id
    }
}

pub type PatientsState = CollectionState<Patient, PatientFilter>;
pub type PatientsAction = CollectionAction<Patient, PatientFilter>;

impl Store {
    pub async fn load_patients(&self) -> Result<()> {
        let (filter, page) = self.patients_list_params();
        let seq = self.next_list_seq(Slice::Patients);
        self.dispatch_patients(PatientsAction::ListStarted { seq });

        match patients::list(self.client(), &filter, page).await {
            Ok((items, pagination)) => {
                self.dispatch_patients(PatientsAction::ListLoaded {
                    seq,
                    items,
                    pagination,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to load patients");
                self.dispatch_patients(PatientsAction::ListFailed { seq, message });
                Err(err)
            }
        }
    }

    pub async fn fetch_patient(&self, id: Uuid) -> Result<()> {
        self.dispatch_patients(PatientsAction::OpStarted);
        match patients::get(self.client(), id).await {
            Ok(patient) => {
                self.dispatch_patients(PatientsAction::CurrentLoaded(patient));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to fetch patient");
                self.dispatch_patients(PatientsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn create_patient(&self, data: &CreatePatient) -> Result<()> {
        self.dispatch_patients(PatientsAction::OpStarted);
        match patients::create(self.client(), data).await {
            Ok(patient) => {
                self.dispatch_patients(PatientsAction::Created(patient));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to create patient");
                self.dispatch_patients(PatientsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn update_patient(&self, id: Uuid, data: &UpdatePatient) -> Result<()> {
        self.dispatch_patients(PatientsAction::OpStarted);
        match patients::update(self.client(), id, data).await {
            Ok(patient) => {
                self.dispatch_patients(PatientsAction::Updated(patient));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to update patient");
                self.dispatch_patients(PatientsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub async fn delete_patient(&self, id: Uuid) -> Result<()> {
        self.dispatch_patients(PatientsAction::OpStarted);
        match patients::remove(self.client(), id).await {
            Ok(()) => {
                self.dispatch_patients(PatientsAction::Removed(id));
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Failed to delete patient");
                self.dispatch_patients(PatientsAction::OpFailed { message });
                Err(err)
            }
        }
    }

    pub fn set_patient_filter(&self, filter: PatientFilter) {
        self.dispatch_patients(PatientsAction::FilterChanged(filter));
    }
}
