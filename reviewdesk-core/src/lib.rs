//! reviewdesk Core - Note and Report Types
//!
//! Pure data structures plus the in-memory note store. All other crates
//! depend on this one. No I/O happens here.

pub mod entities;
pub mod error;
pub mod identity;
pub mod report;
pub mod store;

pub use entities::{Note, NoteDraft, NoteField};
pub use error::{CoreResult, ValidationError};
pub use identity::{NoteId, Timestamp};
pub use report::ReportState;
pub use store::NoteStore;
