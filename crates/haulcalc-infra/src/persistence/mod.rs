//! Persistence implementations

pub mod load_book_store;
