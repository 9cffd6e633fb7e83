//! Domain models shared by the client facade and the store slices.

pub mod appointment;
pub mod billing;
pub mod doctor;
pub mod identity;
pub mod pagination;
pub mod patient;
pub mod role;
pub mod stats;
pub mod tenant;
pub mod user;

pub use appointment::{
    Appointment, AppointmentFilter, AppointmentStatus, CreateAppointment, UpdateAppointment,
};
pub use billing::{Invoice, InvoiceStatus, Payment, PaymentMethod, PaymentStatus};
pub use doctor::{CreateDoctor, Doctor, DoctorFilter, UpdateDoctor};
pub use identity::{Identity, Notification};
pub use pagination::{PageQuery, Pagination};
pub use patient::{CreatePatient, Patient, PatientFilter, UpdatePatient};
pub use role::{CreateRole, Role, RoleFilter, UpdateRole};
pub use stats::DashboardStats;
pub use tenant::Tenant;
pub use user::{CreateUser, UpdateUser, User, UserFilter};
