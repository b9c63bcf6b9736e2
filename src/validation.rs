//! Field validation for incoming book data.
//!
//! Validation is explicit rather than derive-based: each rule is a plain
//! function returning a typed error, invoked before any store mutation.
//! Rules are checked in order and the first failure is reported.

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Earliest accepted publication year
pub const MIN_YEAR: i32 = 1000;
/// Latest accepted publication year
pub const MAX_YEAR: i32 = 2026;

/// Validate a candidate book record.
///
/// Returns `Ok(())` when every field constraint holds, otherwise an
/// `AppError::Validation` naming the offending field.
pub fn validate_book(book: &Book) -> AppResult<()> {
    check_title(&book.title)?;
    check_year(book.year)?;
    check_isbn(&book.isbn)?;
    Ok(())
}

fn check_title(title: &str) -> AppResult<()> {
    if title.is_empty() {
        return Err(AppError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn check_year(year: i32) -> AppResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(AppError::Validation(format!(
            "Year must be between {} and {}",
            MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

fn check_isbn(isbn: &str) -> AppResult<()> {
    // Length is in characters, not bytes
    let len = isbn.chars().count();
    if len != 10 && len != 13 {
        return Err(AppError::Validation(
            "ISBN must be 10 or 13 characters long".to_string(),
        ));
    }
    Ok(())
}
