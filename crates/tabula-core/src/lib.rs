//! Tabula Core - record data model for the grid engine
//!
//! Defines the types every grid consumes from its host page:
//!
//! - `Record` - an opaque id plus an ordered field map
//! - `RecordId` - record identity used by selection and row actions
//! - `Value` - a single field value

mod record;
mod value;

pub use record::{Record, RecordId};
pub use value::Value;
