use crate::models::json::to_display;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

pub const UHID: &str = "UHID";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const AGE: &str = "age";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const TOTAL_APPOINTMENTS: &str = "totalAppointments";

/// A document in the `patients` collection, kept exactly as stored.
///
/// Patients are written by other systems, so no field is assumed to be
/// present or to have a particular BSON type; accessors return what is there.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Patient(Document);

impl Patient {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Bson> {
        self.0.get(field).filter(|v| !matches!(v, Bson::Null | Bson::Undefined))
    }

    /// True when the stored `UHID` is the string `uhid`. Non-string ids
    /// never match, as with an equality filter on a string.
    pub fn has_uhid(&self, uhid: &str) -> bool {
        matches!(self.0.get(UHID), Some(Bson::String(s)) if s == uhid)
    }

    /// `firstName lastName`, skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [FIRST_NAME, LAST_NAME]
            .iter()
            .filter_map(|field| self.get(field))
            .map(to_display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Document> for Patient {
    fn from(document: Document) -> Self {
        Self(document)
    }
}
