pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactFields, ContactId},
};
pub use crate::errors::AppError;
pub use crate::http_api::{self, MAX_BODY_BYTES, Problem, routes};
pub use crate::store::{self, ContactStore, MemStore, Store};
