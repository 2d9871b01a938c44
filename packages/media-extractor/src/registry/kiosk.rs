//! Kiosk registry: the curated feeds of one service.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{ExtractionError, Result};
use crate::traits::extractor::KioskExtractor;
use crate::traits::link_handler::ListLinkHandlerFactory;
use crate::types::config::ExtractorContext;
use crate::types::link::ListLinkHandler;

/// Everything a kiosk extractor factory needs to build an extractor.
#[derive(Debug, Clone)]
pub struct KioskRequest {
    pub service_id: u32,
    pub handler: ListLinkHandler,
    pub kiosk_id: String,
    /// Cursor the caller intends to continue from, if any
    pub next_page_url: Option<String>,
    pub context: ExtractorContext,
}

/// Builds a kiosk extractor for a resolved request.
pub type KioskExtractorFactory =
    Box<dyn Fn(KioskRequest) -> Result<Box<dyn KioskExtractor>> + Send + Sync>;

struct KioskEntry {
    extractor_factory: KioskExtractorFactory,
    handler_factory: Arc<dyn ListLinkHandlerFactory>,
}

/// Kiosks of one service, keyed by kiosk id in registration order.
///
/// Populated once at startup, read-only afterwards.
pub struct KioskList {
    service_id: u32,
    entries: IndexMap<String, KioskEntry>,
    default_kiosk: Option<String>,
}

impl KioskList {
    pub fn new(service_id: u32) -> Self {
        Self {
            service_id,
            entries: IndexMap::new(),
            default_kiosk: None,
        }
    }

    pub fn service_id(&self) -> u32 {
        self.service_id
    }

    /// Register a kiosk. A duplicate id is rejected and leaves the list unchanged.
    pub fn add_kiosk_entry<F>(
        &mut self,
        factory: F,
        handler_factory: Arc<dyn ListLinkHandlerFactory>,
        id: impl Into<String>,
    ) -> Result<()>
    where
        F: Fn(KioskRequest) -> Result<Box<dyn KioskExtractor>> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(ExtractionError::KioskAlreadyExists { id });
        }

        info!(service_id = self.service_id, kiosk_id = %id, "Registered kiosk");
        self.entries.insert(
            id,
            KioskEntry {
                extractor_factory: Box::new(factory),
                handler_factory,
            },
        );
        Ok(())
    }

    /// Choose the kiosk returned by [`default_kiosk_extractor`](Self::default_kiosk_extractor).
    pub fn set_default_kiosk(&mut self, id: &str) -> Result<()> {
        if !self.entries.contains_key(id) {
            return Err(ExtractionError::UnknownKiosk { id: id.to_string() });
        }
        self.default_kiosk = Some(id.to_string());
        Ok(())
    }

    /// The explicitly chosen default, if any.
    pub fn default_kiosk_id(&self) -> Option<&str> {
        self.default_kiosk.as_deref()
    }

    /// Extractor for the default kiosk.
    ///
    /// Without an explicit default the first registered kiosk is used.
    /// `Ok(None)` when no kiosk is registered.
    pub fn default_kiosk_extractor(
        &self,
        next_page_url: Option<&str>,
        ctx: &ExtractorContext,
    ) -> Result<Option<Box<dyn KioskExtractor>>> {
        let id = match self.default_kiosk.as_deref() {
            Some(id) => id,
            None => match self.entries.keys().next() {
                Some(first) => first.as_str(),
                None => return Ok(None),
            },
        };
        self.extractor_by_id(id, next_page_url, ctx).map(Some)
    }

    /// Extractor for a registered kiosk id.
    pub fn extractor_by_id(
        &self,
        id: &str,
        next_page_url: Option<&str>,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn KioskExtractor>> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| ExtractionError::UnknownKiosk { id: id.to_string() })?;
        let handler = entry.handler_factory.from_list_id(id)?;
        self.build(entry, id, handler, next_page_url, ctx)
    }

    /// Extractor for the first kiosk (in registration order) whose handler
    /// factory accepts `url`.
    pub fn extractor_by_url(
        &self,
        url: &str,
        next_page_url: Option<&str>,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn KioskExtractor>> {
        let (id, entry) = self
            .entries
            .iter()
            .find(|(_, entry)| entry.handler_factory.accept_url(url))
            .ok_or_else(|| ExtractionError::NoMatchingExtractor {
                url: url.to_string(),
            })?;
        let handler = entry.handler_factory.from_list_url(url)?;
        self.build(entry, id, handler, next_page_url, ctx)
    }

    /// Whether any registered kiosk accepts `url`.
    pub fn accepts_url(&self, url: &str) -> bool {
        self.entries
            .values()
            .any(|entry| entry.handler_factory.accept_url(url))
    }

    /// Registered kiosk ids in registration order.
    pub fn available_kiosks(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn handler_factory(&self, id: &str) -> Option<&dyn ListLinkHandlerFactory> {
        self.entries
            .get(id)
            .map(|entry| entry.handler_factory.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build(
        &self,
        entry: &KioskEntry,
        id: &str,
        handler: ListLinkHandler,
        next_page_url: Option<&str>,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn KioskExtractor>> {
        debug!(service_id = self.service_id, kiosk_id = id, url = %handler.url, "Creating kiosk extractor");
        (entry.extractor_factory)(KioskRequest {
            service_id: self.service_id,
            handler,
            kiosk_id: id.to_string(),
            next_page_url: next_page_url.map(str::to_string),
            context: ctx.clone(),
        })
    }
}

impl fmt::Debug for KioskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KioskList")
            .field("service_id", &self.service_id)
            .field("kiosks", &self.available_kiosks())
            .field("default_kiosk", &self.default_kiosk)
            .finish()
    }
}
