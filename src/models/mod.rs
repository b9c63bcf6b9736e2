//! Data models for the Digital Library

pub mod book;

pub use book::Book;
