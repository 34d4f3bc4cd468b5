//! Link entity mapping a short key to a redirect destination.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// The `key` is globally unique across the store; the `destination` is not,
/// although the admission pipeline deduplicates by destination on a
/// best-effort basis. Links are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub key: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, key: String, destination: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            key,
            destination,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` is assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub key: String,
    pub destination: String,
}
