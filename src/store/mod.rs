pub mod memory;

use std::sync::{Arc, RwLock};

use crate::domain::{Contact, ContactFields, ContactId};
use crate::errors::AppError;
use crate::validation;

pub use memory::MemStore;

/// Backend holding the authoritative contact collection.
///
/// Implementations assume exclusive access; [`Store`] provides the locking.
pub trait ContactStore: Send + Sync {
    fn list(&self) -> Vec<Contact>;

    fn get(&self, id: ContactId) -> Result<Contact, AppError>;

    fn create(&mut self, fields: ContactFields) -> Result<Contact, AppError>;

    fn update(&mut self, id: ContactId, fields: ContactFields) -> Result<Contact, AppError>;

    fn delete(&mut self, id: ContactId) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

/// Cloneable handle shared by every request.
///
/// Mutations hold the write lock for their whole duration, so readers only
/// ever see a create, update or delete fully applied or not at all.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Box<dyn ContactStore>>>,
}

impl Store {
    pub fn new(backend: Box<dyn ContactStore>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(backend)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemStore::new()))
    }

    pub fn medium(&self) -> Result<String, AppError> {
        Ok(self.inner.read()?.medium().to_string())
    }

    pub fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.read()?.list())
    }

    pub fn get(&self, id: ContactId) -> Result<Contact, AppError> {
        self.inner.read()?.get(id)
    }

    pub fn create(&self, fields: ContactFields) -> Result<Contact, AppError> {
        let contact = self.inner.write()?.create(fields)?;
        tracing::info!(id = contact.id, "contact created");
        Ok(contact)
    }

    pub fn update(&self, id: ContactId, fields: ContactFields) -> Result<Contact, AppError> {
        let contact = self.inner.write()?.update(id, fields)?;
        tracing::info!(id, "contact updated");
        Ok(contact)
    }

    pub fn delete(&self, id: ContactId) -> Result<(), AppError> {
        self.inner.write()?.delete(id)?;
        tracing::info!(id, "contact deleted");
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::in_memory()
    }
}
