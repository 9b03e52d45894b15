// Wire shapes for the warehouse backend's REST API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collections the seeder knows how to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    Products,
    Warehouses,
}

impl Resource {
    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Categories => "categories",
            Resource::Products => "products",
            Resource::Warehouses => "warehouses",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Resource::Categories => "category",
            Resource::Products => "product",
            Resource::Warehouses => "warehouse",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which remote attribute acts as the natural key of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    Name,
    Sku,
}

/// Server-side record. Only the attributes the seeder reads are decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl RemoteRecord {
    pub fn key(&self, field: KeyField) -> Option<&str> {
        match field {
            KeyField::Name => self.name.as_deref(),
            KeyField::Sku => self.sku.as_deref(),
        }
    }
}

/// `GET /{resource}` body: `{ "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Vec<RemoteRecord>,
}

/// `POST /{resource}` success body. Products answer under `product`, every
/// other resource under `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreatedEnvelope {
    Product { product: RemoteRecord },
    Data { data: RemoteRecord },
}

impl CreatedEnvelope {
    pub fn into_record(self) -> RemoteRecord {
        match self {
            CreatedEnvelope::Product { product } => product,
            CreatedEnvelope::Data { data } => data,
        }
    }
}

/// Raw outcome of a create call: status plus the unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResponse {
    pub status: u16,
    pub body: String,
}

/// Substring the backend puts in uniqueness-violation errors.
pub const DUPLICATE_KEY_MARKER: &str = "duplicate key";

impl WriteResponse {
    pub fn is_created(&self) -> bool {
        self.status == 201
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.status, 400 | 409)
            && self.body.to_ascii_lowercase().contains(DUPLICATE_KEY_MARKER)
    }

    /// Decodes the created record; `None` when the body matches neither envelope.
    pub fn created_record(&self) -> Option<RemoteRecord> {
        serde_json::from_str::<CreatedEnvelope>(&self.body)
            .ok()
            .map(CreatedEnvelope::into_record)
    }
}

fn is_blank(v: &Option<&str>) -> bool {
    v.map_or(true, |s| s.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct CategoryPayload<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.volume.is_none()
    }
}

fn dimensions_absent(v: &Option<Dimensions>) -> bool {
    v.as_ref().map_or(true, Dimensions::is_empty)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub barcode: Option<&'a str>,
    pub category_id: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub uom: Option<&'a str>,
    pub reorder_point: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(skip_serializing_if = "dimensions_absent")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<&'a str, &'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationPayload<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub aisle: Option<&'a str>,
    #[serde(skip_serializing_if = "is_blank")]
    pub rack: Option<&'a str>,
    #[serde(skip_serializing_if = "is_blank")]
    pub bin: Option<&'a str>,
}

fn no_locations(v: &&[LocationPayload<'_>]) -> bool {
    v.is_empty()
}

#[derive(Debug, Serialize)]
pub struct WarehousePayload<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub address: Option<&'a str>,
    #[serde(skip_serializing_if = "no_locations")]
    pub locations: &'a [LocationPayload<'a>],
}
