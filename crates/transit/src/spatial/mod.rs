//! Spatial indexing and query utilities.

pub mod index;
pub mod projection;
pub mod queries;

pub use index::{Axis, PartitionNode, PartitionTree, Traversal};
pub use projection::{haversine_miles, Location, Projection};
pub use queries::{AxisRange, QueryRect};
