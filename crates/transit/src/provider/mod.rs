//! Stop and trip providers.

pub mod static_provider;

pub use static_provider::{StaticTransitProvider, StopRecord, StopTimeRecord, TripRecord};
