//! atriarisk-web — Web UI for the atriarisk scoring service.
//! Provides:
//!   - Per-model CSV upload endpoints with default-dataset fallback
//!   - Single-patient scoring forms
//!   - Gauge result pages
//!   - Request-scoped upload/plot housekeeping

pub mod error;
pub mod handlers;
pub mod router;
pub mod scope;
pub mod state;
