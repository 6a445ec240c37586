//! Domain types shared by the bookshelf storage and HTTP layers.

pub mod book;
pub mod error;
pub mod types;
