//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single book record in the catalog.
///
/// The `id` is unique across the store and immutable once created;
/// all other fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique numeric identifier
    pub id: i64,
    /// Title, must not be empty
    pub title: String,
    /// Author name, free-form
    pub author: String,
    /// Publication year, between 1000 and 2026
    pub year: i32,
    /// ISBN, exactly 10 or 13 characters
    pub isbn: String,
}
