// Domain types and value objects
pub mod observation;

// Re-export commonly used types
pub use observation::{PriceObservation, ZoneKind};
