use anyhow::Result;
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

use super::index::ExistingIndex;
use super::record::{Lookups, PayloadError, SeedRecord, UNKNOWN_ID};
use crate::api::client::ResourceApi;
use crate::api::models::Resource;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Read the index and report what would be created, but issue no writes.
    pub dry_run: bool,
}

/// Console tag for an item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Skip,
    Error,
    DryRun,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Ok => "[OK]",
            Tag::Skip => "[SKIP]",
            Tag::Error => "[ERROR]",
            Tag::DryRun => "[DRY-RUN]",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Natural key was already in the index; nothing sent.
    AlreadyExists { id: String },
    Created { id: Option<String> },
    /// 400/409 carrying the duplicate-key marker: someone else seeded it first.
    Duplicate { status: u16 },
    Rejected { status: u16, body: String },
    Transport { error: String },
    /// The record could not be turned into a request body.
    Invalid { error: String },
    MissingReference { resource: Resource, key: String },
    WouldCreate,
}

impl ItemOutcome {
    pub fn tag(&self) -> Tag {
        match self {
            ItemOutcome::Created { .. } => Tag::Ok,
            ItemOutcome::AlreadyExists { .. } | ItemOutcome::Duplicate { .. } => Tag::Skip,
            ItemOutcome::Rejected { .. }
            | ItemOutcome::Transport { .. }
            | ItemOutcome::Invalid { .. }
            | ItemOutcome::MissingReference { .. } => Tag::Error,
            ItemOutcome::WouldCreate => Tag::DryRun,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemReport {
    pub key: String,
    pub outcome: ItemOutcome,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub resource: Resource,
    pub existing: usize,
    pub items: Vec<ItemReport>,
    pub elapsed_ms: u128,
}

impl SeedSummary {
    fn count(&self, tag: Tag) -> usize {
        self.items.iter().filter(|i| i.outcome.tag() == tag).count()
    }

    pub fn created(&self) -> usize {
        self.count(Tag::Ok)
    }

    pub fn skipped(&self) -> usize {
        self.count(Tag::Skip)
    }

    pub fn failed(&self) -> usize {
        self.count(Tag::Error)
    }

    pub fn planned(&self) -> usize {
        self.count(Tag::DryRun)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[seed] {}: created={} skipped={} failed={}",
            self.resource,
            self.created(),
            self.skipped(),
            self.failed()
        )?;
        if self.planned() > 0 {
            write!(f, " planned={}", self.planned())?;
        }
        write!(f, " elapsed_ms={}", self.elapsed_ms)
    }
}

/// Makes sure every record in `records` exists on the backend.
///
/// One collection read builds the index (its failure aborts the run), then
/// records are processed strictly in order with at most one write each. Per-item
/// failures are reported and never stop the batch.
pub async fn seed_records<R: SeedRecord>(
    api: &dyn ResourceApi,
    records: &[R],
    lookups: &Lookups,
    opts: SeedOptions,
) -> Result<SeedSummary> {
    let started = Instant::now();
    let resource = R::RESOURCE;
    let mut index = ExistingIndex::build(api, resource, R::KEY_FIELD).await?;
    let existing = index.len();
    println!("Found {existing} existing {resource}");

    let mut items = Vec::with_capacity(records.len());
    for record in records {
        let key = record.natural_key();
        let (outcome, line) = match (record.check_references(lookups), index.get(key)) {
            (Err(e), _) => payload_failure(record, e),
            (Ok(()), Some(id)) => (
                ItemOutcome::AlreadyExists { id: id.to_string() },
                format!("{} already exists (id={id})", record.subject()),
            ),
            (Ok(()), None) => create_one(api, record, lookups, opts).await,
        };
        let line = format!("{} {}", outcome.tag(), line);
        println!("{line}");

        // Keeps a repeated key later in the same list from being posted twice.
        if let ItemOutcome::Created { id } = &outcome {
            index.insert(key, id.as_deref().unwrap_or(UNKNOWN_ID));
        }
        items.push(ItemReport {
            key: key.to_string(),
            outcome,
            line,
        });
    }

    let summary = SeedSummary {
        resource,
        existing,
        items,
        elapsed_ms: started.elapsed().as_millis(),
    };
    info!(
        %resource,
        created = summary.created(),
        skipped = summary.skipped(),
        failed = summary.failed(),
        "seed run finished"
    );
    Ok(summary)
}

fn payload_failure<R: SeedRecord>(record: &R, err: PayloadError) -> (ItemOutcome, String) {
    let name = record.name();
    match err {
        PayloadError::MissingReference { resource, key } => {
            let line = format!(
                "Skipping '{name}' because {} '{key}' not found",
                resource.singular()
            );
            (ItemOutcome::MissingReference { resource, key }, line)
        }
        e @ PayloadError::Encode(_) => {
            let error = e.to_string();
            let line = format!("Failed to create {} '{name}': {error}", R::RESOURCE.singular());
            (ItemOutcome::Invalid { error }, line)
        }
    }
}

async fn create_one<R: SeedRecord>(
    api: &dyn ResourceApi,
    record: &R,
    lookups: &Lookups,
    opts: SeedOptions,
) -> (ItemOutcome, String) {
    let singular = R::RESOURCE.singular();
    let name = record.name();

    let payload = match record.payload(lookups) {
        Ok(p) => p,
        Err(e) => return payload_failure(record, e),
    };

    if opts.dry_run {
        return (ItemOutcome::WouldCreate, format!("Would create {singular} '{name}'"));
    }

    match api.create(R::RESOURCE, &payload).await {
        Ok(resp) if resp.is_created() => {
            let created = resp.created_record();
            if created.is_none() {
                warn!(%singular, %name, "201 body matched no known envelope");
            }
            let line = record.created_summary(created.as_ref());
            let id = created.and_then(|r| r.id);
            (ItemOutcome::Created { id }, line)
        }
        Ok(resp) if resp.is_duplicate_key() => (
            ItemOutcome::Duplicate { status: resp.status },
            format!("{} already exists (duplicate key)", record.subject()),
        ),
        Ok(resp) => {
            let line = format!(
                "Failed to create {singular} '{name}' status={} body={}",
                resp.status, resp.body
            );
            (
                ItemOutcome::Rejected {
                    status: resp.status,
                    body: resp.body,
                },
                line,
            )
        }
        Err(e) => {
            let error = format!("{e:#}");
            let line = format!("Failed to create {singular} '{name}': {error}");
            (ItemOutcome::Transport { error }, line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::WriteResponse;
    use crate::seed::data::{CATEGORIES, PRODUCTS, WAREHOUSES};
    use crate::seed::record::{CategorySeed, ProductSeed};
    use crate::seed::testing::FakeBackend;
    use serde_json::Value;

    const ELECTRONICS: CategorySeed = CategorySeed {
        name: "Electronics",
        description: Some("Electronic devices and accessories"),
    };

    fn tags(summary: &SeedSummary) -> Vec<Tag> {
        summary.items.iter().map(|i| i.outcome.tag()).collect()
    }

    fn category_lookups(backend: &FakeBackend) -> Lookups {
        let records = backend.records(Resource::Categories);
        Lookups {
            categories: Some(ExistingIndex::from_records(
                &records,
                crate::api::models::KeyField::Name,
            )),
        }
    }

    #[tokio::test]
    async fn empty_backend_then_rerun_is_idempotent() {
        let backend = FakeBackend::default();

        let first = seed_records(&backend, &[ELECTRONICS], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(backend.list_calls(Resource::Categories), 1);
        assert_eq!(backend.posted(Resource::Categories).len(), 1);
        assert_eq!(first.existing, 0);
        assert_eq!(first.created(), 1);
        assert!(first.items[0].line.starts_with("[OK] Created category 'Electronics' (id="));

        let second = seed_records(&backend, &[ELECTRONICS], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(backend.list_calls(Resource::Categories), 2);
        assert_eq!(backend.posted(Resource::Categories).len(), 1);
        assert_eq!(second.existing, 1);
        assert_eq!(tags(&second), vec![Tag::Skip]);
        assert!(second.items[0]
            .line
            .starts_with("[SKIP] Category 'Electronics' already exists (id="));
    }

    #[tokio::test]
    async fn existing_keys_match_case_insensitively_and_issue_no_writes() {
        let backend = FakeBackend::default();
        backend.preload(Resource::Categories, "c1", Some("  ELECTRONICS "), None);
        backend.preload(Resource::Categories, "c2", Some("groceries"), None);

        let summary = seed_records(&backend, CATEGORIES, &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        let posted: Vec<String> = backend
            .posted(Resource::Categories)
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(posted, vec!["Office Supplies", "Health & Beauty", "Household"]);
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.created(), 3);
        assert_eq!(summary.items[0].outcome, ItemOutcome::AlreadyExists { id: "c1".into() });
    }

    #[tokio::test]
    async fn payloads_never_carry_empty_fields() {
        let backend = FakeBackend::default();
        const SPARSE: CategorySeed = CategorySeed { name: "Misc", description: Some("") };
        seed_records(&backend, &[SPARSE], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        seed_records(&backend, WAREHOUSES, &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();

        let mut all = backend.posted(Resource::Categories);
        all.extend(backend.posted(Resource::Warehouses));
        assert_eq!(all.len(), 1 + WAREHOUSES.len());
        for payload in &all {
            assert_no_empty_values(payload);
        }
        assert_eq!(all[0], serde_json::json!({"name": "Misc"}));
    }

    fn assert_no_empty_values(v: &Value) {
        match v {
            Value::Null => panic!("null in payload"),
            Value::String(s) => assert!(!s.trim().is_empty(), "blank string in payload"),
            Value::Array(a) => {
                assert!(!a.is_empty(), "empty array in payload");
                a.iter().for_each(assert_no_empty_values);
            }
            Value::Object(o) => {
                assert!(!o.is_empty(), "empty object in payload");
                o.values().for_each(assert_no_empty_values);
            }
            _ => {}
        }
    }

    #[tokio::test]
    async fn products_with_unknown_category_are_never_posted() {
        let backend = FakeBackend::default();
        backend.preload(Resource::Categories, "c-elec", Some("Electronics"), None);
        let lookups = category_lookups(&backend);

        let summary = seed_records(&backend, PRODUCTS, &lookups, SeedOptions::default())
            .await
            .unwrap();
        let posted = backend.posted(Resource::Products);
        assert_eq!(posted.len(), 2);
        assert!(posted.iter().all(|p| p["categoryId"] == "c-elec"));
        assert_eq!(summary.failed(), PRODUCTS.len() - 2);

        let missing = &summary.items[2];
        assert_eq!(
            missing.outcome,
            ItemOutcome::MissingReference {
                resource: Resource::Categories,
                key: "Office Supplies".into()
            }
        );
        assert_eq!(
            missing.line,
            "[ERROR] Skipping 'A4 Printer Paper (500 sheets)' because category 'Office Supplies' not found"
        );
    }

    #[tokio::test]
    async fn missing_category_wins_over_existing_sku() {
        let backend = FakeBackend::default();
        backend.preload(Resource::Products, "p1", Some("USB-C Cable 1m"), Some("ELEC-USBC-1M"));

        let summary = seed_records(&backend, &PRODUCTS[..1], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(
            summary.items[0].line,
            "[ERROR] Skipping 'USB-C Cable 1m' because category 'Electronics' not found"
        );
        assert_eq!(summary.failed(), 1);
        assert!(backend.posted(Resource::Products).is_empty());
    }

    #[tokio::test]
    async fn products_are_matched_by_sku_and_use_product_envelope() {
        let backend = FakeBackend::default();
        backend.preload(Resource::Categories, "c-elec", Some("Electronics"), None);
        backend.preload(Resource::Products, "p-old", Some("Renamed cable"), Some("elec-usbc-1m"));
        let lookups = category_lookups(&backend);

        let summary = seed_records(&backend, &PRODUCTS[..2], &lookups, SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(
            summary.items[0].line,
            "[SKIP] Product with SKU 'ELEC-USBC-1M' already exists (id=p-old)"
        );
        assert!(summary.items[1]
            .line
            .starts_with("[OK] Created product 'Wireless Mouse' (sku=ELEC-MOUSE-WL, id=fake-"));
    }

    #[tokio::test]
    async fn status_classification() {
        let backend = FakeBackend::default();
        backend.respond_to(
            "Office Supplies",
            WriteResponse {
                status: 409,
                body: r#"{"error":"E11000 duplicate key error collection"}"#.into(),
            },
        );
        backend.respond_to(
            "Groceries",
            WriteResponse { status: 400, body: r#"{"error":"name is required"}"#.into() },
        );
        backend.respond_to(
            "Health & Beauty",
            WriteResponse { status: 500, body: "duplicate key".into() },
        );
        backend.respond_to("Household", WriteResponse { status: 201, body: "{}".into() });

        let summary = seed_records(&backend, CATEGORIES, &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(tags(&summary), vec![Tag::Ok, Tag::Skip, Tag::Error, Tag::Error, Tag::Ok]);
        assert_eq!(
            summary.items[1].line,
            "[SKIP] Category 'Office Supplies' already exists (duplicate key)"
        );
        assert_eq!(
            summary.items[2].line,
            r#"[ERROR] Failed to create category 'Groceries' status=400 body={"error":"name is required"}"#
        );
        assert_eq!(
            summary.items[4].line,
            "[OK] Created category 'Household' (id=unknown)"
        );
        // Every item was attempted despite the failures in the middle.
        assert_eq!(backend.posted(Resource::Categories).len(), CATEGORIES.len());
    }

    #[tokio::test]
    async fn rejected_line_carries_the_whole_body() {
        let backend = FakeBackend::default();
        let body = format!("{}name is required", "x".repeat(3000));
        backend.respond_to("Electronics", WriteResponse { status: 422, body: body.clone() });

        let summary = seed_records(&backend, &[ELECTRONICS], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(
            summary.items[0].line,
            format!("[ERROR] Failed to create category 'Electronics' status=422 body={body}")
        );
        assert_eq!(
            summary.items[0].outcome,
            ItemOutcome::Rejected { status: 422, body }
        );
    }

    #[test]
    fn unencodable_record_is_invalid_not_transport() {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        let (outcome, line) = payload_failure(&ELECTRONICS, PayloadError::Encode(err));
        assert!(matches!(outcome, ItemOutcome::Invalid { .. }));
        assert_eq!(outcome.tag(), Tag::Error);
        assert!(line.starts_with("Failed to create category 'Electronics': payload encoding failed"));
    }

    #[tokio::test]
    async fn transport_failures_are_per_item() {
        let backend = FakeBackend::default();
        backend.fail_create("Electronics");

        let summary = seed_records(&backend, CATEGORIES, &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert!(matches!(summary.items[0].outcome, ItemOutcome::Transport { .. }));
        assert!(summary.items[0]
            .line
            .starts_with("[ERROR] Failed to create category 'Electronics': "));
        assert_eq!(summary.created(), CATEGORIES.len() - 1);
    }

    #[tokio::test]
    async fn index_failure_aborts_before_any_write() {
        let backend = FakeBackend::default();
        backend.fail_lists();
        let res = seed_records(&backend, CATEGORIES, &Lookups::default(), SeedOptions::default()).await;
        assert!(res.is_err());
        assert!(backend.posted(Resource::Categories).is_empty());
    }

    #[tokio::test]
    async fn dry_run_reads_but_never_writes() {
        let backend = FakeBackend::default();
        backend.preload(Resource::Warehouses, "w1", Some("Central Warehouse"), None);

        let summary = seed_records(&backend, WAREHOUSES, &Lookups::default(), SeedOptions { dry_run: true })
            .await
            .unwrap();
        assert_eq!(backend.list_calls(Resource::Warehouses), 1);
        assert!(backend.posted(Resource::Warehouses).is_empty());
        assert_eq!(tags(&summary), vec![Tag::Skip, Tag::DryRun]);
        assert_eq!(summary.items[1].line, "[DRY-RUN] Would create warehouse 'East Side Warehouse'");
        assert!(summary.to_string().contains("planned=1"));
    }

    #[tokio::test]
    async fn repeated_key_in_one_list_is_posted_once() {
        let backend = FakeBackend::default();
        const DUP: CategorySeed = CategorySeed { name: "electronics ", description: None };
        let summary = seed_records(&backend, &[ELECTRONICS, DUP], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(backend.posted(Resource::Categories).len(), 1);
        assert_eq!(tags(&summary), vec![Tag::Ok, Tag::Skip]);
    }

    #[tokio::test]
    async fn repeated_key_after_idless_create_reports_unknown_id() {
        let backend = FakeBackend::default();
        backend.respond_to("Electronics", WriteResponse { status: 201, body: "{}".into() });
        const DUP: CategorySeed = CategorySeed { name: "ELECTRONICS", description: None };
        let summary = seed_records(&backend, &[ELECTRONICS, DUP], &Lookups::default(), SeedOptions::default())
            .await
            .unwrap();
        assert_eq!(summary.items[0].line, "[OK] Created category 'Electronics' (id=unknown)");
        assert_eq!(
            summary.items[1].line,
            "[SKIP] Category 'ELECTRONICS' already exists (id=unknown)"
        );
    }

    #[tokio::test]
    async fn summary_line_counts_outcomes() {
        let backend = FakeBackend::default();
        let lookups = Lookups::default();
        let products: &[ProductSeed] = &PRODUCTS[..1];
        let summary = seed_records(&backend, products, &lookups, SeedOptions::default())
            .await
            .unwrap();
        let text = summary.to_string();
        assert!(text.starts_with("[seed] products: created=0 skipped=0 failed=1 elapsed_ms="), "{text}");
    }
}
