// src/presentation/http/controllers/mod.rs
pub mod authors;
pub mod categories;
pub mod comments;
pub mod posts;
