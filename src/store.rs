//! In-memory book store.
//!
//! One store instance is shared by all requests through `AppState`. The
//! collection sits behind a single `RwLock`: mutating operations take the
//! write guard, snapshot reads take the read guard, so mutations serialize
//! against each other and against reads.

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Ordered in-memory collection of book records keyed by id.
///
/// Records keep insertion order; at most one record per id exists at
/// any time.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Append a new record. Fails if a record with the same id exists.
    pub async fn add(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Duplicate(format!(
                "Book with id {} already exists",
                book.id
            )));
        }
        books.push(book.clone());
        Ok(book)
    }

    /// Return a snapshot of all records in insertion order.
    ///
    /// The returned vector is a clone and is unaffected by later
    /// mutation of the store.
    pub async fn list_all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Look up a record by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Replace the record matching `id` in place, preserving its position.
    ///
    /// The id of the replacement record must equal `id`; a mismatch is a
    /// caller error since record ids are immutable.
    pub async fn update(&self, id: i64, book: Book) -> AppResult<Book> {
        if book.id != id {
            return Err(AppError::BadRequest(format!(
                "Book id {} in body does not match path id {}",
                book.id, id
            )));
        }
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                *slot = book.clone();
                Ok(book)
            }
            None => Err(AppError::NotFound(format!("Book with id {} not found", id))),
        }
    }

    /// Remove the first record with matching id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(pos) => {
                books.remove(pos);
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Book with id {} not found", id))),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
