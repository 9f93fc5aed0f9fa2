//! Page-level components, one per route.

pub mod admin;
pub mod ask;
pub mod document;
pub mod history;
pub mod login;
pub mod upload;
