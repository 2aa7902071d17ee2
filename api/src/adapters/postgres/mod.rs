//! PostgreSQL adapters (SeaORM)

pub mod asset_repo;
pub mod license_repo;

pub use asset_repo::PostgresAssetRepository;
pub use license_repo::PostgresLicenseRepository;
