//! Column-to-field matching
//!
//! First-match-wins resolution of source columns against the field
//! registry, plus the per-import session state that enforces one column per
//! field.

pub mod session;
pub mod types;

pub use session::{MatchSession, RowValues};
pub use types::ColumnMatch;
