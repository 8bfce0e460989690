//! Authentication services

pub mod token;
