//! Credential lookup for the login flow.
//!
//! Secrets are held only as BLAKE3 digests. `blake3::Hash` equality is
//! constant-time, so comparing digests does not leak the stored secret.

use std::collections::HashMap;

use async_trait::async_trait;

use super::role::Role;

#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub identifier: String,
    pub secret_hash: blake3::Hash,
    pub role: Role,
}

impl CredentialRecord {
    pub fn new(identifier: impl Into<String>, secret: &str, role: Role) -> Self {
        Self {
            identifier: identifier.into(),
            secret_hash: hash_secret(secret),
            role,
        }
    }

    pub fn matches_secret(&self, secret: &str) -> bool {
        self.secret_hash == hash_secret(secret)
    }
}

pub fn hash_secret(secret: &str) -> blake3::Hash {
    blake3::hash(secret.as_bytes())
}

/// Source of credential records. Lookup is case-insensitive on the identifier.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn lookup(&self, identifier: &str) -> Option<CredentialRecord>;
}

/// Fixed in-memory table, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl StaticCredentialStore {
    pub fn new(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.identifier.to_lowercase(), r))
            .collect();
        Self { records }
    }

    /// The demo accounts: `admin`, `manager` and `user`.
    pub fn builtin() -> Self {
        Self::new(
            [
                ("admin", "admin123"),
                ("user", "user123"),
                ("manager", "manager123"),
            ]
            .into_iter()
            .map(|(id, secret)| CredentialRecord::new(id, secret, Role::for_identifier(id))),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn lookup(&self, identifier: &str) -> Option<CredentialRecord> {
        self.records.get(&identifier.to_lowercase()).cloned()
    }
}
