use serde::{Deserialize, Deserializer, Serialize};

pub type ContactId = u64;

/// A directory entry as stored and as sent over the wire.
///
/// The serialized field names are the public JSON contract and the field
/// order matches the order of the records the service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,

    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo_electronico")]
    pub email: String,
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    #[serde(rename = "notas")]
    pub notes: String,
    #[serde(rename = "fecha_cumpleanos")]
    pub birthday: String,
}

/// Caller supplied contact data, used both for creating and patching.
///
/// `None` means the key was not sent. A `null` value counts as sent and
/// reads as "". Keys outside the recognised set, `id` included, are
/// dropped by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
    #[serde(rename = "nombre", default, deserialize_with = "null_as_empty")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default, deserialize_with = "null_as_empty")]
    pub last_name: Option<String>,
    #[serde(rename = "telefono", default, deserialize_with = "null_as_empty")]
    pub phone: Option<String>,
    #[serde(rename = "correo_electronico", default, deserialize_with = "null_as_empty")]
    pub email: Option<String>,
    #[serde(rename = "calle", default, deserialize_with = "null_as_empty")]
    pub street: Option<String>,
    #[serde(rename = "ciudad", default, deserialize_with = "null_as_empty")]
    pub city: Option<String>,
    #[serde(rename = "estado", default, deserialize_with = "null_as_empty")]
    pub state: Option<String>,
    #[serde(rename = "empresa", default, deserialize_with = "null_as_empty")]
    pub company: Option<String>,
    #[serde(rename = "cargo", default, deserialize_with = "null_as_empty")]
    pub job_title: Option<String>,
    #[serde(rename = "notas", default, deserialize_with = "null_as_empty")]
    pub notes: Option<String>,
    #[serde(rename = "fecha_cumpleanos", default, deserialize_with = "null_as_empty")]
    pub birthday: Option<String>,
}

impl Contact {
    /// Builds a fresh record, every field the caller left out becomes "".
    pub fn new(id: ContactId, fields: ContactFields) -> Self {
        Contact {
            id,
            first_name: fields.first_name.unwrap_or_default(),
            last_name: fields.last_name.unwrap_or_default(),
            phone: fields.phone.unwrap_or_default(),
            email: fields.email.unwrap_or_default(),
            street: fields.street.unwrap_or_default(),
            city: fields.city.unwrap_or_default(),
            state: fields.state.unwrap_or_default(),
            company: fields.company.unwrap_or_default(),
            job_title: fields.job_title.unwrap_or_default(),
            notes: fields.notes.unwrap_or_default(),
            birthday: fields.birthday.unwrap_or_default(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ContactFields {
    pub fn named(first_name: &str, last_name: &str) -> Self {
        ContactFields {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            ..Default::default()
        }
    }

    /// Overwrites exactly the fields that are present, empty strings included.
    pub fn apply(self, contact: &mut Contact) {
        if let Some(first_name) = self.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            contact.last_name = last_name;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(street) = self.street {
            contact.street = street;
        }
        if let Some(city) = self.city {
            contact.city = city;
        }
        if let Some(state) = self.state {
            contact.state = state;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(job_title) = self.job_title {
            contact.job_title = job_title;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
        if let Some(birthday) = self.birthday {
            contact.birthday = birthday;
        }
    }
}

// Only called for keys that are present, so `null` becomes `Some("")`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Some(value.unwrap_or_default()))
}
