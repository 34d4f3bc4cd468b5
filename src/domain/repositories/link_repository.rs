//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a conditional insert.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The key was free and the link is now stored.
    Inserted(Link),
    /// The key is already claimed; nothing was written.
    KeyTaken,
}

/// Repository interface for the durable key-to-destination mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
///   implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link if and only if its key is unclaimed.
    ///
    /// This is the single write path of the store and must behave as one
    /// atomic conditional insert keyed on key uniqueness: two concurrent
    /// calls racing for the same key resolve to exactly one
    /// [`InsertOutcome::Inserted`] and one [`InsertOutcome::KeyTaken`].
    /// Implementations must push the uniqueness decision into the backing
    /// store rather than sequencing a read before the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its destination URL (exact string match).
    ///
    /// Used by the admission pipeline's best-effort dedup read. When the
    /// tolerated creation race has produced several links for one
    /// destination, the earliest-created one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError>;
}
