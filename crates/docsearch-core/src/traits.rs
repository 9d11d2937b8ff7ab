use crate::error::Result;
use crate::types::Snapshot;

/// Persistence collaborator: stores the corpus and search history as one
/// opaque blob. `load` yields `None` when nothing has been saved yet.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>>;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
