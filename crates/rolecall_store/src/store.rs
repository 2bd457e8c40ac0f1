//! Storage trait definition.

use rolecall_error::RolecallResult;

/// Trait for hierarchical string-keyed durable storage.
///
/// Paths are dot-joined segments, e.g. `"guild.channel.message"`. Values are
/// stored at leaves; interior segments are branches. The empty path names
/// the root branch and is only meaningful to [`keys`](ControllerStore::keys).
#[async_trait::async_trait]
pub trait ControllerStore: Send + Sync {
    /// Prepare the backend, loading any persisted state.
    async fn init(&self) -> RolecallResult<()>;

    /// Get the leaf value at a path, if present.
    async fn get(&self, path: &str) -> RolecallResult<Option<String>>;

    /// Set the leaf value at a path, creating intermediate branches.
    async fn set(&self, path: &str, value: &str) -> RolecallResult<()>;

    /// Remove the entry at a path. Branches emptied by the removal are
    /// pruned. Removing an absent path is a no-op.
    async fn remove(&self, path: &str) -> RolecallResult<()>;

    /// Whether a leaf or branch exists at the path.
    async fn exists(&self, path: &str) -> RolecallResult<bool>;

    /// The child segment names of the branch at the path; the empty path
    /// lists the root. A leaf or absent path has no children.
    async fn keys(&self, path: &str) -> RolecallResult<Vec<String>>;
}
