//! Typed rows and request DTOs for the API resources.

pub mod contact;
pub mod event;
pub mod ministry;
pub mod sermon;
pub mod user;

pub use contact::*;
pub use event::*;
pub use ministry::*;
pub use sermon::*;
pub use user::*;
