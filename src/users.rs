//! Offline generator for synthetic StockMaster users.
//!
//! Produces a JSON file meant for manual import; it never talks to the backend.
//! Passwords are plaintext placeholders that the backend hashes on import.

use anyhow::{Context, Result};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_OUTPUT: &str = "fake_users.json";
pub const ADMIN_EMAIL: &str = "admin@stockmaster.com";
const ADMIN_PASSWORD: &str = "Admin@123";
const USER_PASSWORD: &str = "Pass@123";
const PLACEHOLDER_WAREHOUSES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    WarehouseStaff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub assigned_warehouse: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UserGenOptions {
    /// Defaults to a random 4-5.
    pub managers: Option<usize>,
    /// Defaults to a random 10-15.
    pub staff: Option<usize>,
    /// Real warehouse ids to assign; random placeholder ids when empty.
    pub warehouse_ids: Vec<String>,
    /// Fixed RNG seed for reproducible output.
    pub seed: Option<u64>,
}

/// 24 hex chars shaped like a MongoDB ObjectId: 4-byte timestamp + 8 random bytes.
pub fn object_id<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let ts = chrono::Utc::now().timestamp() as u32;
    format!("{ts:08x}{:016x}", rng.next_u64())
}

fn unique_email(rng: &mut StdRng, taken: &mut HashSet<String>) -> String {
    for _ in 0..32 {
        let email: String = SafeEmail().fake_with_rng::<String, _>(&mut *rng).to_lowercase();
        if taken.insert(email.clone()) {
            return email;
        }
    }
    // Faker pool exhausted for this seed; disambiguate with a counter.
    let mut n = taken.len();
    loop {
        let email = format!("user{n}@example.com");
        if taken.insert(email.clone()) {
            return email;
        }
        n += 1;
    }
}

pub fn generate_users(opts: &UserGenOptions) -> Vec<FakeUser> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let managers = opts.managers.unwrap_or_else(|| rng.gen_range(4..=5));
    let staff = opts.staff.unwrap_or_else(|| rng.gen_range(10..=15));
    let warehouses: Vec<String> = if opts.warehouse_ids.is_empty() {
        (0..PLACEHOLDER_WAREHOUSES).map(|_| object_id(&mut rng)).collect()
    } else {
        opts.warehouse_ids.clone()
    };
    debug!(managers, staff, warehouses = warehouses.len(), "generating fake users");

    let mut taken = HashSet::from([ADMIN_EMAIL.to_string()]);
    let mut users = Vec::with_capacity(1 + managers + staff);
    users.push(FakeUser {
        id: object_id(&mut rng),
        name: "Super Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
        role: Role::Admin,
        assigned_warehouse: None,
        is_active: true,
    });

    let roles = std::iter::repeat(Role::Manager)
        .take(managers)
        .chain(std::iter::repeat(Role::WarehouseStaff).take(staff));
    for role in roles {
        let assigned_warehouse = warehouses.choose(&mut rng).cloned();
        users.push(FakeUser {
            id: object_id(&mut rng),
            name: Name().fake_with_rng::<String, _>(&mut rng),
            email: unique_email(&mut rng, &mut taken),
            password: USER_PASSWORD.to_string(),
            role,
            assigned_warehouse,
            is_active: true,
        });
    }
    users
}

/// Pretty-prints with a four-space indent.
pub fn write_users_file(path: &Path, users: &[FakeUser]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    users.serialize(&mut ser).context("serializing users")?;
    std::fs::write(path, buf).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
