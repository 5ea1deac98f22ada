//! Identifier-keyed routing of inbound frames
//!
//! The router maps a frame identifier to a route value chosen by the
//! application (typically a small `Copy` enum naming a state module). It
//! never owns the handlers: [`Router::dispatch`] resolves the route and
//! hands it, together with the payload, to a closure supplied by the caller.
//! This keeps the state modules owned by the loop that polls them.

use heapless::FnvIndexMap;

use crate::frame::Frame;
use crate::result::{ProcessingError, ProcessingResult};

/// Maximum number of registered identifiers
pub const MAX_ROUTES: usize = 8;

/// Registration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouterError {
    /// The identifier already has a route; the existing route is kept
    Duplicate(u8),
    /// The routing table has no room left
    Full,
}

/// Identifier to route table
#[derive(Debug, Clone)]
pub struct Router<R> {
    routes: FnvIndexMap<u8, R, MAX_ROUTES>,
}

impl<R: Copy> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy> Router<R> {
    /// Create an empty router
    pub fn new() -> Self {
        Self {
            routes: FnvIndexMap::new(),
        }
    }

    /// Register a route for an identifier
    ///
    /// Each identifier maps to exactly one route. Registering an identifier
    /// twice is rejected and leaves the first registration in place.
    pub fn register(&mut self, identifier: u8, route: R) -> Result<(), RouterError> {
        if self.routes.contains_key(&identifier) {
            return Err(RouterError::Duplicate(identifier));
        }
        self.routes
            .insert(identifier, route)
            .map_err(|_| RouterError::Full)?;
        Ok(())
    }

    /// Look up the route for an identifier
    pub fn resolve(&self, identifier: u8) -> Option<R> {
        self.routes.get(&identifier).copied()
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route a received frame to its handler
    ///
    /// Returns [`ProcessingError::UnknownIdentifier`] without calling
    /// `handler` when the identifier has no route.
    pub fn dispatch<F>(&self, frame: &Frame, handler: F) -> ProcessingResult
    where
        F: FnOnce(R, &[u8]) -> ProcessingResult,
    {
        let route = self
            .resolve(frame.identifier)
            .ok_or(ProcessingError::UnknownIdentifier(frame.identifier))?;
        handler(route, &frame.payload)
    }
}
