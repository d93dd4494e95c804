//! # transit-stop-index
//!
//! Rectangle and radius queries over the stops a transit feed serves on a
//! given day.
//!
//! ## Features
//!
//! - **Flat-earth projection**: stop lat/lon becomes signed miles from a
//!   reference point, measured with the haversine formula along each axis
//! - **Partition tree**: median splits alternating x/y by depth, flat leaves
//!   below a configurable depth, pruning range search
//! - **Day filter**: services running on a date → their trips → the stops
//!   those trips visit
//! - **Per-day contexts**: build once, query read-only from any thread
//!
//! ## Example
//!
//! ```
//! use transit_stop_index::prelude::*;
//!
//! let stops = vec![
//!     Stop::new("capitol", Location::from_lat_lon(REFERENCE_LAT, REFERENCE_LON), true),
//!     Stop::new("east", Location::new(10.0, 0.0), false),
//!     Stop::new("west", Location::new(-10.0, 0.0), true),
//! ];
//!
//! let tree = PartitionTree::build(stops, IndexConfig::default().max_depth);
//!
//! let downtown = tree.search((-5.0, 5.0), (-5.0, 5.0));
//! assert_eq!(downtown.len(), 1);
//!
//! let nearby = tree.search_circle((0.0, 0.0), 10.0);
//! assert_eq!(nearby.len(), 3);
//! ```

pub mod config;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod query;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::IndexConfig;
    pub use crate::identifiers::*;
    pub use crate::models::{calendar::*, traits::*, types::*};
    pub use crate::provider::static_provider::{
        StaticTransitProvider, StopRecord, StopTimeRecord, TripRecord,
    };
    pub use crate::query::QueryContext;
    pub use crate::spatial::index::{Axis, PartitionNode, PartitionTree, Traversal};
    pub use crate::spatial::projection::{
        haversine_miles, Location, Projection, REFERENCE_LAT, REFERENCE_LON,
    };
    pub use crate::spatial::queries::{AxisRange, QueryRect};
}

pub use prelude::*;
