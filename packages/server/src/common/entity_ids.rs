//! Typed ID definitions for the directory collections.
//!
//! One marker type per collection keeps IDs from different directories
//! incompatible at compile time.

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Provider entities (therapy/service providers).
pub struct Provider;

/// Marker type for School entities.
pub struct School;

/// Marker type for Daycare entities.
pub struct Daycare;

/// Marker type for Event entities.
pub struct Event;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Provider entities.
pub type ProviderId = Id<Provider>;

/// Typed ID for School entities.
pub type SchoolId = Id<School>;

/// Typed ID for Daycare entities.
pub type DaycareId = Id<Daycare>;

/// Typed ID for Event entities.
pub type EventId = Id<Event>;
