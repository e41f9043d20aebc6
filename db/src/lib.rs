//! Database plumbing shared by the booking services.
//!
//! Pool construction from configuration, pagination arithmetic, database
//! error classification and loading of JSON seed files. Migrations stay with
//! each service, which embeds its own `migrations/` directory.

pub mod config;
pub mod errors;
pub mod pagination;
pub mod pool;
pub mod seed;

pub use config::DatabaseConfig;
pub use errors::unique_violation;
pub use pagination::Pagination;
pub use pool::create_pool;
pub use seed::read_seed_file;
pub use seed::SeedError;
