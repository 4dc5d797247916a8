//! Core contract between the embedding host and symbol plugins: the wire
//! data model, change notifications, the [`Symbol`] trait, and the shared
//! error type.

pub mod change;
pub mod data;
pub mod error;
pub mod symbol;

pub use change::ChangeSet;
pub use data::{series_key, DataEnvelope, Sample, ScalarValue, Series};
pub use error::{Result, VizletError};
pub use symbol::Symbol;
