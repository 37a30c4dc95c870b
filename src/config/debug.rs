//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so normal
//! runs stay quiet even with RUST_LOG=debug.

/// Emit a log line for every candidate base index the scanner examines,
/// including ancient-filter and proximity-dedup skips.
pub const PRINT_SCANNER_CANDIDATES: bool = false;

/// Emit per-touch detail: touch index, reversal index, and whether the
/// trend check confirmed the pair.
pub const PRINT_TOUCH_EVENTS: bool = false;

/// Emit each support/resistance pair considered by the overlap matcher with
/// its relative distance.
pub const PRINT_OVERLAP_MATCHES: bool = false;
