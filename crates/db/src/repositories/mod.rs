//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Helpers that take
//! `&mut PgConnection` participate in callers' transactions.

pub mod ad_repo;
pub mod ad_user_repo;
pub mod category_repo;
pub mod location_repo;

pub use ad_repo::{AdRepo, AdWriteError};
pub use ad_user_repo::AdUserRepo;
pub use category_repo::CategoryRepo;
pub use location_repo::LocationRepo;
