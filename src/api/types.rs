//! Shared API state and response envelopes.

use std::sync::Arc;

use serde::Serialize;

use crate::store::RecordStore;

// ═══════════════════════════════════════════════════════════
// Shared context
// ═══════════════════════════════════════════════════════════

/// Shared state passed to all endpoint handlers via `State`.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<RecordStore>,
}

impl ApiContext {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

// ═══════════════════════════════════════════════════════════
// Response envelopes
// ═══════════════════════════════════════════════════════════

/// Envelope wrapping the created record on POST endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message,
            data,
        }
    }
}

/// Body for operations that confirm an action without returning a record.
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub status: &'static str,
    pub message: String,
}

impl ConfirmationResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
