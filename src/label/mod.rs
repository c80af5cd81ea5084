//! Drug label records: decoding, search assembly, projection and sourcing.

pub mod projector;
pub mod query;
pub mod record;
pub mod source;

// Re-export commonly used types
pub use projector::*;
pub use query::*;
pub use record::*;
pub use source::*;
