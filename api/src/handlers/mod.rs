//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod assets;
pub mod licenses;
pub mod scores;
pub mod social;

pub use assets::{create_asset, get_asset, list_assets, score_asset, set_asset_license};
pub use licenses::{
    get_questions, issue_license, list_asset_licenses, list_licenses, post_generate,
};
pub use scores::{get_score_tiers, post_score};
pub use social::{get_platforms, post_parse};
