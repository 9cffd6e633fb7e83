//! schedulix-core: shared kernel for the Schedulix client core.

pub mod config;
pub mod errors;
pub mod models;

pub use config::{ClientOptions, ClientOptionsBuilder};
pub use errors::{CoreResult, ErrorKind, SchedulixError};
