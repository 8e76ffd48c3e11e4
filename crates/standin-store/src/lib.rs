//! # standin-store
//!
//! The in-memory multi-collection store behind Standin.
//!
//! This crate provides:
//! - [`StandinService`]: handle-keyed, type-erased record collections
//! - generic queries with shape filtering, pagination, and output modes
//! - first-match selective update honoring no-update field markers
//! - the uniform success/error response envelope
//!
//! ## Data model
//!
//! ```text
//! SourceId (u32 handle)
//!     │
//! Vec<StoredRecord>            ← insertion-order, heterogeneous shapes
//!     │  shape id + JSON value
//! Shape (standin-record)       ← recovers typed records at query time
//! ```
//!
//! Everything is synchronous and in-memory. The store carries no locking;
//! hosts serialize access (see [`StandinService`]).

pub mod envelope;
pub mod query;
pub mod store;
pub mod update;

pub use query::{OutputMode, Page, QueryOptions};
pub use store::{SourceId, StandinService, StoreError, StoredRecord};
