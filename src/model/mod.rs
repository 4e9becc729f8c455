//! Data model for the transformation engine.
//!
//! Split along the engine's boundary: `result` types mirror the reporting
//! engine's JSON response shape bit-exact and are deserialize-only; `table`
//! types are the owned, serialize-only output handed to the UI layer.

mod result;
mod table;

pub use result::*;
pub use table::*;
