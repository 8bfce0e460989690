//! Foodgram Auth - Authentication token validation
//!
//! This crate provides:
//! - JWT decoding with a short-lived validation cache
//! - The per-request authentication context inserted by the HTTP middleware

pub mod model;
pub mod service;

pub use model::{AuthContext, JwtPayload};
