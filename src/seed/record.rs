//! Desired-record types and how each maps onto its create payload.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

use super::index::ExistingIndex;
use crate::api::models::{
    CategoryPayload, Dimensions, KeyField, LocationPayload, ProductPayload, RemoteRecord,
    Resource, WarehousePayload,
};

/// Indexes of other resources that some payloads reference by id.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub categories: Option<ExistingIndex>,
}

#[derive(Debug)]
pub enum PayloadError {
    /// A referenced record (e.g. a product's category) is not on the backend.
    MissingReference { resource: Resource, key: String },
    Encode(serde_json::Error),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::MissingReference { resource, key } => {
                write!(f, "{} '{}' not found", resource.singular(), key)
            }
            PayloadError::Encode(e) => write!(f, "payload encoding failed: {e}"),
        }
    }
}

impl std::error::Error for PayloadError {}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        PayloadError::Encode(e)
    }
}

/// Printed in place of an id the backend did not return.
pub const UNKNOWN_ID: &str = "unknown";

/// A statically defined record the seeder makes sure exists remotely.
pub trait SeedRecord {
    const RESOURCE: Resource;
    /// Remote attribute holding the natural key.
    const KEY_FIELD: KeyField;

    fn natural_key(&self) -> &str;
    fn name(&self) -> &str;
    fn payload(&self, lookups: &Lookups) -> Result<Value, PayloadError>;

    /// Fails when a record this one points at is absent. Runs before the
    /// existing-record check, so a broken reference is always reported.
    fn check_references(&self, _lookups: &Lookups) -> Result<(), PayloadError> {
        Ok(())
    }

    /// How the record is referred to in skip lines, e.g. `Category 'Electronics'`.
    fn subject(&self) -> String {
        let noun = Self::RESOURCE.singular();
        let mut chars = noun.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{title} '{}'", self.name())
    }

    fn created_summary(&self, created: Option<&RemoteRecord>) -> String {
        let name = created
            .and_then(|r| r.name.as_deref())
            .unwrap_or(self.name());
        let id = created.and_then(|r| r.id.as_deref()).unwrap_or(UNKNOWN_ID);
        format!("Created {} '{}' (id={})", Self::RESOURCE.singular(), name, id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

impl SeedRecord for CategorySeed {
    const RESOURCE: Resource = Resource::Categories;
    const KEY_FIELD: KeyField = KeyField::Name;

    fn natural_key(&self) -> &str {
        self.name
    }

    fn name(&self) -> &str {
        self.name
    }

    fn payload(&self, _lookups: &Lookups) -> Result<Value, PayloadError> {
        Ok(serde_json::to_value(CategoryPayload {
            name: self.name,
            description: self.description,
        })?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProductSeed {
    pub name: &'static str,
    pub sku: &'static str,
    pub barcode: Option<&'static str>,
    /// Category *name*; resolved to an id against the live category index.
    pub category: &'static str,
    pub uom: Option<&'static str>,
    pub reorder_point: Option<u32>,
    pub cost_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub metadata: &'static [(&'static str, &'static str)],
}

impl ProductSeed {
    fn category_id<'a>(&self, lookups: &'a Lookups) -> Result<&'a str, PayloadError> {
        lookups
            .categories
            .as_ref()
            .and_then(|idx| idx.get(self.category))
            .ok_or_else(|| PayloadError::MissingReference {
                resource: Resource::Categories,
                key: self.category.to_string(),
            })
    }
}

impl SeedRecord for ProductSeed {
    const RESOURCE: Resource = Resource::Products;
    const KEY_FIELD: KeyField = KeyField::Sku;

    fn natural_key(&self) -> &str {
        self.sku
    }

    fn name(&self) -> &str {
        self.name
    }

    fn check_references(&self, lookups: &Lookups) -> Result<(), PayloadError> {
        self.category_id(lookups).map(|_| ())
    }

    fn payload(&self, lookups: &Lookups) -> Result<Value, PayloadError> {
        let category_id = self.category_id(lookups)?;
        let metadata: IndexMap<&str, &str> = self
            .metadata
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .copied()
            .collect();
        Ok(serde_json::to_value(ProductPayload {
            name: self.name,
            sku: self.sku,
            barcode: self.barcode,
            category_id,
            uom: self.uom,
            reorder_point: self.reorder_point.unwrap_or(0),
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            dimensions: self.dimensions,
            metadata,
        })?)
    }

    fn subject(&self) -> String {
        format!("Product with SKU '{}'", self.sku)
    }

    fn created_summary(&self, created: Option<&RemoteRecord>) -> String {
        let name = created
            .and_then(|r| r.name.as_deref())
            .unwrap_or(self.name);
        let sku = created.and_then(|r| r.sku.as_deref()).unwrap_or(self.sku);
        let id = created.and_then(|r| r.id.as_deref()).unwrap_or(UNKNOWN_ID);
        format!("Created product '{name}' (sku={sku}, id={id})")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WarehouseSeed {
    pub name: &'static str,
    pub address: Option<&'static str>,
    pub locations: &'static [LocationPayload<'static>],
}

impl SeedRecord for WarehouseSeed {
    const RESOURCE: Resource = Resource::Warehouses;
    const KEY_FIELD: KeyField = KeyField::Name;

    fn natural_key(&self) -> &str {
        self.name
    }

    fn name(&self) -> &str {
        self.name
    }

    fn payload(&self, _lookups: &Lookups) -> Result<Value, PayloadError> {
        Ok(serde_json::to_value(WarehousePayload {
            name: self.name,
            address: self.address,
            locations: self.locations,
        })?)
    }
}
