//! Service-agnostic data types for the extraction framework.

pub mod config;
pub mod item;
pub mod link;
pub mod media;
pub mod page;
