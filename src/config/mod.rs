//! Configuration module for the zone-scout application.

pub mod debug;
pub mod demo;
pub mod detector;

// Re-export commonly used items
pub use demo::DEMO;
pub use detector::{DETECTOR, DetectorConfig};
