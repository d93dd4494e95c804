//! Core data types for transit data.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::identifiers::*;
use crate::spatial::projection::Location;

// ============================================================================
// Data Structures
// ============================================================================

/// A boarding location served on a given day
///
/// Two stops are the same stop when their identifiers match; location and
/// accessibility are not part of identity.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopIdentifier,
    pub location: Location,
    pub wheelchair_accessible: bool,
}

impl Stop {
    pub fn new(
        id: impl Into<StopIdentifier>,
        location: Location,
        wheelchair_accessible: bool,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            wheelchair_accessible,
        }
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Stop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// A single scheduled vehicle run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id: TripIdentifier,
    pub route_id: RouteIdentifier,
    /// Public route label (e.g., "2", "80"), when the feed has one
    pub route_short_name: Option<Arc<str>>,
    pub bikes_allowed: bool,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Stop not found: {0}")]
    StopNotFound(StopIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;
