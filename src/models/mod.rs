// Output models for zone detection
// Pure data types independent of the scanning logic

pub mod zones;

// Re-export key types for convenience
pub use zones::{
    OVERLAP_KIND, OverlapZone, RawResistance, RawSupport, ResistanceZone, SupportZone, ZoneReport,
};
