pub mod api;
pub mod common;
pub mod routeplanner;

pub use api::routeplanner::{
    FailedAddress, IpBlock, RoutePlannerKind, RouteStatus, RouteStatusDetails,
};
pub use common::errors::RouteStatusError;
pub use routeplanner::decode_route_status;
