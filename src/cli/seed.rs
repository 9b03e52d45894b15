use anyhow::Result;
use tracing::info;

use crate::api::client::ResourceApi;
use crate::api::models::{KeyField, Resource};
use crate::seed::data::{CATEGORIES, PRODUCTS, WAREHOUSES};
use crate::seed::{seed_records, ExistingIndex, Lookups, SeedOptions, SeedSummary};

pub async fn run_categories(api: &dyn ResourceApi, opts: SeedOptions) -> Result<SeedSummary> {
    seed_records(api, CATEGORIES, &Lookups::default(), opts).await
}

pub async fn run_warehouses(api: &dyn ResourceApi, opts: SeedOptions) -> Result<SeedSummary> {
    seed_records(api, WAREHOUSES, &Lookups::default(), opts).await
}

/// Products reference categories by id, so the category index is read first.
/// Categories are never created from here.
pub async fn run_products(api: &dyn ResourceApi, opts: SeedOptions) -> Result<SeedSummary> {
    let categories = ExistingIndex::build(api, Resource::Categories, KeyField::Name).await?;
    println!("Loaded {} categories", categories.len());
    let lookups = Lookups {
        categories: Some(categories),
    };
    seed_records(api, PRODUCTS, &lookups, opts).await
}

/// Categories, then warehouses, then products (which depend on categories).
/// A failed index read stops the sequence; per-item failures do not.
pub async fn run_all(api: &dyn ResourceApi, opts: SeedOptions) -> Result<Vec<SeedSummary>> {
    let mut summaries = Vec::with_capacity(3);
    summaries.push(run_categories(api, opts).await?);
    summaries.push(run_warehouses(api, opts).await?);
    summaries.push(run_products(api, opts).await?);
    let failed: usize = summaries.iter().map(SeedSummary::failed).sum();
    info!(failed, "full seed finished");
    Ok(summaries)
}
