//! Business services behind the HTTP handlers

pub mod collection;
pub mod shopping_list;
