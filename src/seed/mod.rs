//! Idempotent seeding of reference data through the backend's REST API.

pub mod data;
pub mod driver;
pub mod index;
pub mod record;

pub use driver::{seed_records, ItemOutcome, ItemReport, SeedOptions, SeedSummary, Tag};
pub use index::{normalize_key, ExistingIndex};
pub use record::{CategorySeed, Lookups, PayloadError, ProductSeed, SeedRecord, WarehouseSeed};
