//! Remote REST table backend for the folio content store.
//!
//! Talks to a PostgREST-style API (one endpoint per table, filters in the
//! query string) and implements the same [`ContentStore`] trait as the local
//! fixture backend. Filtering and ordering are pushed to the server; the
//! response rows decode straight into the shared record types.
//!
//! [`ContentStore`]: folio_content::ContentStore

mod client;

pub use client::{ApiError, ApiStore};
