//! Partition tree over projected stop locations.
//!
//! A k-d-tree-like index: each internal node splits its stops at the median
//! along one axis, alternating x (odd depth) and y (even depth). Once the
//! configured depth is reached the remaining stops are stored flat in a leaf.
//! A subset of zero or one stop also becomes a leaf, whatever the configured
//! depth, so tree height stays near `log2(n)` even for a huge `max_depth`.
//!
//! ## Median convention
//!
//! After sorting a subset by the split axis, the element at `len / 2` supplies
//! the split value and goes to the RIGHT child. Every stop on the left
//! therefore has a coordinate `<= split`, every stop on the right `>= split`.
//! Search pruning relies on exactly this:
//! - split inside the query range: both children may match
//! - split below the range: only the right child can match
//! - split above the range: only the left child can match

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::types::Stop;
use crate::spatial::projection::Location;
use crate::spatial::queries::{AxisRange, QueryRect};

/// Depth used when no configuration is supplied
pub const DEFAULT_MAX_DEPTH: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Split axis for a 1-indexed depth
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 1 { Axis::X } else { Axis::Y }
    }

    pub fn coordinate(self, location: &Location) -> f64 {
        match self {
            Axis::X => location.x,
            Axis::Y => location.y,
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Clone, Debug)]
pub enum PartitionNode {
    Internal {
        axis: Axis,
        split: f64,
        left: Box<PartitionNode>,
        right: Box<PartitionNode>,
    },
    Leaf {
        stops: Vec<Arc<Stop>>,
    },
}

impl PartitionNode {
    fn build(mut stops: Vec<Arc<Stop>>, depth: usize, max_depth: usize) -> Self {
        if depth >= max_depth || stops.len() <= 1 {
            return PartitionNode::Leaf { stops };
        }

        let axis = Axis::for_depth(depth);
        stops.sort_by(|a, b| {
            axis.coordinate(&a.location)
                .total_cmp(&axis.coordinate(&b.location))
        });

        let mid = stops.len() / 2;
        let split = axis.coordinate(&stops[mid].location);
        let right = stops.split_off(mid);

        PartitionNode::Internal {
            axis,
            split,
            left: Box::new(Self::build(stops, depth + 1, max_depth)),
            right: Box::new(Self::build(right, depth + 1, max_depth)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    /// Lazy pre-order walk of this subtree; `depth` of this node is 1
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal {
            stack: vec![(self, 1)],
        }
    }

    /// Every stop stored below this node, in leaf order
    pub fn stops(&self) -> impl Iterator<Item = &Arc<Stop>> + '_ {
        self.traverse()
            .filter_map(|(node, _)| match node {
                PartitionNode::Leaf { stops } => Some(stops.iter()),
                PartitionNode::Internal { .. } => None,
            })
            .flatten()
    }

    fn collect_within(&self, rect: &QueryRect, out: &mut Vec<Arc<Stop>>) {
        match self {
            PartitionNode::Leaf { stops } => {
                out.extend(stops.iter().filter(|s| rect.contains(&s.location)).cloned());
            }
            PartitionNode::Internal {
                axis,
                split,
                left,
                right,
            } => {
                let AxisRange { min, max } = rect.range(*axis);
                if *split >= min && *split <= max {
                    left.collect_within(rect, out);
                    right.collect_within(rect, out);
                } else if *split < min {
                    right.collect_within(rect, out);
                } else {
                    left.collect_within(rect, out);
                }
            }
        }
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Read-only spatial index over a fixed stop population
#[derive(Clone, Debug)]
pub struct PartitionTree {
    root: PartitionNode,
    len: usize,
    max_depth: usize,
}

impl PartitionTree {
    /// Build the tree; nodes at `depth >= max_depth` become leaves
    pub fn build<I>(stops: I, max_depth: usize) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Stop>>,
    {
        let stops: Vec<Arc<Stop>> = stops.into_iter().map(Into::into).collect();
        let len = stops.len();
        let root = PartitionNode::build(stops, 1, max_depth);

        let tree = Self {
            root,
            len,
            max_depth,
        };
        debug!(
            stops = len,
            max_depth,
            leaves = tree.traverse().filter(|(node, _)| node.is_leaf()).count(),
            "built partition tree"
        );
        tree
    }

    pub fn root(&self) -> &PartitionNode {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Lazy pre-order walk yielding `(node, depth)` with the root at depth 1
    pub fn traverse(&self) -> Traversal<'_> {
        self.root.traverse()
    }

    /// Stops whose location lies inside both ranges, bounds inclusive.
    ///
    /// Reversed bounds are accepted. Results come left subtree first, leaf
    /// stops in stored order.
    pub fn search(
        &self,
        x_range: impl Into<AxisRange>,
        y_range: impl Into<AxisRange>,
    ) -> Vec<Arc<Stop>> {
        self.search_rect(&QueryRect::new(x_range, y_range))
    }

    pub fn search_rect(&self, rect: &QueryRect) -> Vec<Arc<Stop>> {
        let mut found = Vec::new();
        if rect.is_nan() {
            warn!(?rect, "Rejecting range query with NaN bounds");
            return found;
        }
        self.root.collect_within(rect, &mut found);
        found
    }

    /// Stops within `radius` of `origin` (inclusive).
    ///
    /// A negative or NaN radius matches nothing; a zero radius matches stops
    /// exactly at the origin.
    pub fn search_circle(&self, origin: impl Into<Location>, radius: f64) -> Vec<Arc<Stop>> {
        let origin = origin.into();
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }

        let radius_2 = radius * radius;
        let mut found = self.search_rect(&QueryRect::around(origin, radius));
        found.retain(|stop| stop.location.distance_squared_to(&origin) <= radius_2);
        found
    }
}

/// Pre-order iterator over a subtree, see [`PartitionTree::traverse`]
pub struct Traversal<'a> {
    stack: Vec<(&'a PartitionNode, usize)>,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = (&'a PartitionNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let PartitionNode::Internal { left, right, .. } = node {
            self.stack.push((&**right, depth + 1));
            self.stack.push((&**left, depth + 1));
        }
        Some((node, depth))
    }
}
