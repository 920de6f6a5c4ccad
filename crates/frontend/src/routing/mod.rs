pub mod context;
pub mod location_store;
pub mod synchronizer;
pub mod viewport;

pub use context::{use_routing, RoutingContext};
