//! In-memory day filter over decoded feed records.
//!
//! Resolves date → running services → trips → visited stops. Records are
//! taken as already parsed; reading feed files happens elsewhere.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use geo::Point;
use tracing::debug;

use crate::identifiers::*;
use crate::models::{calendar::ServiceCalendar, traits::StopSource, types::*};
use crate::spatial::projection::Projection;

// ============================================================================
// Feed Records
// ============================================================================

/// One row of stops.txt
#[derive(Clone, Debug)]
pub struct StopRecord {
    pub stop_id: StopIdentifier,
    /// x = longitude, y = latitude
    pub location: Point,
    pub wheelchair_boarding: bool,
}

/// One row of trips.txt
#[derive(Clone, Debug)]
pub struct TripRecord {
    pub trip_id: TripIdentifier,
    pub route_id: RouteIdentifier,
    pub route_short_name: Option<Arc<str>>,
    pub service_id: ServiceIdentifier,
    pub bikes_allowed: bool,
}

impl TripRecord {
    fn serves_route(&self, route: &str) -> bool {
        self.route_id.as_str() == route || self.route_short_name.as_deref() == Some(route)
    }

    fn to_trip(&self) -> Trip {
        Trip {
            id: self.trip_id.clone(),
            route_id: self.route_id.clone(),
            route_short_name: self.route_short_name.clone(),
            bikes_allowed: self.bikes_allowed,
        }
    }
}

/// One row of stop_times.txt, reduced to the trip/stop link
#[derive(Clone, Debug)]
pub struct StopTimeRecord {
    pub trip_id: TripIdentifier,
    pub stop_id: StopIdentifier,
}

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory feed tables answering per-day stop and trip lookups
#[derive(Clone, Debug, Default)]
pub struct StaticTransitProvider {
    calendars: Vec<ServiceCalendar>,
    trips: Vec<TripRecord>,

    // Lookup maps
    stops_by_trip: HashMap<TripIdentifier, Vec<StopIdentifier>>,
    stop_map: HashMap<StopIdentifier, StopRecord>,

    projection: Projection,
}

impl StaticTransitProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(
        calendars: Vec<ServiceCalendar>,
        trips: Vec<TripRecord>,
        stop_times: Vec<StopTimeRecord>,
        stops: Vec<StopRecord>,
    ) -> Self {
        let mut stops_by_trip: HashMap<TripIdentifier, Vec<StopIdentifier>> = HashMap::new();
        for stop_time in stop_times {
            stops_by_trip
                .entry(stop_time.trip_id)
                .or_default()
                .push(stop_time.stop_id);
        }

        let stop_map: HashMap<_, _> = stops
            .into_iter()
            .map(|s| (s.stop_id.clone(), s))
            .collect();

        Self {
            calendars,
            trips,
            stops_by_trip,
            stop_map,
            projection: Projection::default(),
        }
    }

    /// Project stop coordinates around a different origin
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Services whose calendar covers `date`, sorted
    pub fn service_ids_for_day(&self, date: NaiveDate) -> Vec<ServiceIdentifier> {
        let mut ids: Vec<ServiceIdentifier> = self
            .calendars
            .iter()
            .filter(|c| c.runs_on(date))
            .map(|c| c.service_id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    fn running_trips(&self, date: NaiveDate) -> impl Iterator<Item = &TripRecord> {
        let services: HashSet<ServiceIdentifier> =
            self.service_ids_for_day(date).into_iter().collect();
        self.trips
            .iter()
            .filter(move |t| services.contains(&t.service_id))
    }
}

impl StopSource for StaticTransitProvider {
    fn stops_for_day(&self, date: NaiveDate) -> Result<Vec<Stop>> {
        let mut visited: BTreeMap<StopIdentifier, Stop> = BTreeMap::new();

        for trip in self.running_trips(date) {
            let Some(stop_ids) = self.stops_by_trip.get(&trip.trip_id) else {
                continue;
            };

            for stop_id in stop_ids {
                if visited.contains_key(stop_id) {
                    continue;
                }

                let record = self
                    .stop_map
                    .get(stop_id)
                    .ok_or_else(|| TransitError::StopNotFound(stop_id.clone()))?;

                let point = record.location;
                if !point.x().is_finite() || !point.y().is_finite() {
                    return Err(TransitError::InvalidData(format!(
                        "Stop {} has non-finite coordinates (lat {}, lon {})",
                        stop_id,
                        point.y(),
                        point.x()
                    )));
                }

                let location = self.projection.project_point(point);
                visited.insert(
                    stop_id.clone(),
                    Stop::new(stop_id.clone(), location, record.wheelchair_boarding),
                );
            }
        }

        debug!(%date, stops = visited.len(), "resolved stops for service day");
        Ok(visited.into_values().collect())
    }

    fn trips_for_day(&self, date: NaiveDate, route: Option<&str>) -> Result<Vec<Trip>> {
        let mut seen = HashSet::new();
        let mut trips: Vec<Trip> = self
            .running_trips(date)
            .filter(|t| route.map_or(true, |r| t.serves_route(r)))
            .filter(|t| seen.insert(t.trip_id.clone()))
            .map(TripRecord::to_trip)
            .collect();
        trips.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(%date, route, trips = trips.len(), "resolved trips for service day");
        Ok(trips)
    }
}
