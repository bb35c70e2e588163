//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the query projection
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-field replacement

pub mod ad;
pub mod ad_user;
pub mod category;
pub mod location;
