//! SeaORM entity models
//!
//! Table models backing the Postgres adapters. Kept in the shape
//! `sea-orm-cli generate entity` produces so regeneration after a
//! migration stays a drop-in.

pub mod ip_assets;
pub mod licenses;
