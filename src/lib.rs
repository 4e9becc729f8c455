//! # Factgrid
//!
//! Transforms raw report execution results into UI-ready tables: ordered
//! columns, aggregate summary values, and flat or grouped row data.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           Raw Report Execution Result (JSON)             │
//! │   (metadata, groupings, per-scope fact tables)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [source]
//! ┌─────────────────────────────────────────────────────────┐
//! │        ReportExecution  (or the not-found signal)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [transform]
//! ┌─────────────────────────────────────────────────────────┐
//! │   columns → aggregates → rows (flat) | groups (tree)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │      ReportTable  (columns, aggregates, row data)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The transformation itself is pure and synchronous; fetching the raw
//! result is the caller's concern, abstracted behind the
//! [`source::ReportSource`] trait.

pub mod error;
pub mod model;
pub mod source;
pub mod transform;

pub use error::{ReportError, Result};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::error::{ReportError, Result};
    pub use crate::model::{
        AggregateEntry, Column, ColumnKind, GroupNode, ReportExecution, ReportTable, RowData,
        RowRecord,
    };
    pub use crate::source::{FetchOutcome, FileSource, ReportSource, NOT_FOUND_SENTINEL};
    pub use crate::transform::{run, transform, TransformRequest};
}
