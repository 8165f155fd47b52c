//! Café Table Model

use serde::{Deserialize, Serialize};

/// Café table entity as served by the booking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(rename = "_id")]
    pub id: String,
    pub table_number: i32,
    pub name: String,
    pub capacity: i32,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Table {
    /// Whether the table can seat `guests`
    pub fn fits(&self, guests: i32) -> bool {
        self.capacity >= guests
    }

    /// Available and large enough for the party
    pub fn is_bookable(&self, guests: i32) -> bool {
        self.is_available && self.fits(guests)
    }
}

/// Create table payload (admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub table_number: i32,
    pub name: String,
    pub capacity: i32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
