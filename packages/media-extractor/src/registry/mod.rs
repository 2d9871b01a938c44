//! Registries resolving ids and URLs to services and kiosks.

pub mod kiosk;
pub mod services;

pub use kiosk::{KioskExtractorFactory, KioskList, KioskRequest};
pub use services::ServiceList;
