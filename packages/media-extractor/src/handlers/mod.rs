//! Reusable link handler factories.

pub mod pattern;

pub use pattern::PatternLinkHandlerFactory;
