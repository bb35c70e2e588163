//! Request handlers, one module per resource.

pub mod ads;
pub mod categories;
pub mod locations;
pub mod users;
