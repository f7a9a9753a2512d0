//! HTTP handlers: parse and validate input, call the query layer, wrap
//! results in the response envelope.

pub mod auth;
pub mod contact;
pub mod events;
pub mod i18n;
pub mod ministries;
pub mod sermons;
