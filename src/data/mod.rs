// Observation files and demo data
pub mod demo_series;
pub mod series_file;

// Re-export commonly used types
pub use demo_series::demo_series;
pub use series_file::{load_observations, save_observations};
