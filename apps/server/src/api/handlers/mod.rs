//! Request handlers

pub mod concordances;
pub mod health;
