//! HTML helpers for generated dashboard pages.

pub mod sanitize;
pub mod template;
