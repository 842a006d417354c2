use super::*;

/// Contacts held in insertion order together with the next id to hand out.
pub struct MemStore {
    data: Vec<Contact>,
    next_id: ContactId,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            next_id: 1,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.data.iter().position(|c| c.id == id)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn list(&self) -> Vec<Contact> {
        self.iter().cloned().collect()
    }

    fn get(&self, id: ContactId) -> Result<Contact, AppError> {
        self.iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn create(&mut self, fields: ContactFields) -> Result<Contact, AppError> {
        validation::require_names(&fields)?;

        let id = self.next_id;
        // Reserve the successor first so a failure leaves the store untouched
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("contact id space exhausted".to_string()))?;

        let contact = Contact::new(id, fields);
        self.data.push(contact.clone());
        self.next_id = next_id;

        Ok(contact)
    }

    fn update(&mut self, id: ContactId, fields: ContactFields) -> Result<Contact, AppError> {
        let contact = self
            .data
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        fields.apply(contact);
        Ok(contact.clone())
    }

    fn delete(&mut self, id: ContactId) -> Result<(), AppError> {
        match self.position(id) {
            Some(index) => {
                // Vec::remove keeps the remaining contacts in insertion order
                self.data.remove(index);
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    fn medium(&self) -> &str {
        "memory"
    }
}

fn not_found(id: ContactId) -> AppError {
    AppError::NotFound(format!("Contact {}", id))
}
