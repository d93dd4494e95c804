//! Core traits for transit data access.
//!
//! The index only needs a day's stop population. Implementations can be
//! in-memory, database-backed, or remote.

use chrono::NaiveDate;

use crate::models::types::*;

/// Supplier of the stops and trips that run on a given service day
pub trait StopSource: Send + Sync {
    /// Stops visited by at least one trip running on `date`
    ///
    /// Deduplicated by identifier and sorted by identifier.
    fn stops_for_day(&self, date: NaiveDate) -> Result<Vec<Stop>>;

    /// Trips running on `date`, sorted by identifier
    ///
    /// When `route` is given, only trips whose route id or route short name
    /// equals it are returned.
    fn trips_for_day(&self, date: NaiveDate, route: Option<&str>) -> Result<Vec<Trip>>;
}
