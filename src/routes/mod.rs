//! Route builders: deployment probes and the /v1 API tree.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes_with_ready;
