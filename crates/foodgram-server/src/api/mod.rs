//! HTTP API handlers

pub mod ingredient;
pub mod recipe;
pub mod route;
pub mod tag;
