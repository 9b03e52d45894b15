// Backend API surface: authenticated client and wire models

pub mod client;
pub mod models;

pub use client::{ApiClient, ResourceApi};
pub use models::{RemoteRecord, Resource, WriteResponse};
