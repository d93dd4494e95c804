//! Per-day query facade.
//!
//! A [`QueryContext`] fixes one service day: it pulls that day's stops from a
//! [`StopSource`], builds the partition tree once, and answers rectangle and
//! radius queries against it. Contexts are independent and read-only, so
//! several days can be held and queried side by side.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::config::IndexConfig;
use crate::models::{traits::StopSource, types::*};
use crate::spatial::index::PartitionTree;
use crate::spatial::projection::Location;
use crate::spatial::queries::AxisRange;

#[derive(Clone, Debug)]
pub struct QueryContext {
    date: NaiveDate,
    tree: PartitionTree,
}

impl QueryContext {
    pub fn new(source: &dyn StopSource, date: NaiveDate, config: &IndexConfig) -> Result<Self> {
        let stops = source.stops_for_day(date)?;
        let tree = PartitionTree::build(stops, config.max_depth);

        info!(%date, stops = tree.len(), max_depth = config.max_depth, "query context ready");
        Ok(Self { date, tree })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    /// Every stop served on this day
    pub fn stops(&self) -> impl Iterator<Item = &Arc<Stop>> + '_ {
        self.tree.root().stops()
    }

    pub fn query_rect(
        &self,
        x_range: impl Into<AxisRange>,
        y_range: impl Into<AxisRange>,
    ) -> Vec<Arc<Stop>> {
        self.tree.search(x_range, y_range)
    }

    pub fn query_circle(&self, origin: impl Into<Location>, radius: f64) -> Vec<Arc<Stop>> {
        self.tree.search_circle(origin, radius)
    }
}
