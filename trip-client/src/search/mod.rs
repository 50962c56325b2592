//! Place search fields.
//!
//! Each endpoint has its own [`SearchField`]. A field never performs IO:
//! the event loop feeds it keystrokes, quiet-period ticks and provider
//! responses, and it answers with what should happen next.

mod field;

pub use field::{InputOutcome, ListUpdate, Lookup, SearchField};
