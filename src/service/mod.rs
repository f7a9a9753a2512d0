//! Query layer: all SQL lives here. Handlers validate, call in, and wrap
//! results in the response envelope.

pub mod contact;
pub mod events;
pub mod ministries;
pub mod sermons;
pub mod users;
pub mod validation;
