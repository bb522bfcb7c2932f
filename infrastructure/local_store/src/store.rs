use std::fs;
use std::path::PathBuf;

use business::domain::cart::model::CartState;
use business::domain::cart::store::{CartStore, SnapshotError};

use crate::entity::CartSnapshot;

/// Default file name for the cart snapshot, the fixed "key" of the store.
pub const DEFAULT_SNAPSHOT_FILE: &str = "tiffin_cart.json";

/// JSON-file-backed `CartStore`: one blob under a well-known path, replaced
/// wholesale on every save. The single-writer contract of the cart makes a
/// plain write sufficient.
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in `dir` under the default snapshot file name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(DEFAULT_SNAPSHOT_FILE);
        Self { path }
    }
}

impl CartStore for FileCartStore {
    fn save(&self, state: &CartState) -> Result<(), SnapshotError> {
        let snapshot = CartSnapshot::from_state(state);
        let bytes = serde_json::to_vec(&snapshot).map_err(|_| SnapshotError::Encode)?;
        fs::write(&self.path, bytes).map_err(|_| SnapshotError::Write)
    }

    fn load(&self) -> CartState {
        let Ok(bytes) = fs::read(&self.path) else {
            return CartState::empty();
        };
        serde_json::from_slice::<CartSnapshot>(&bytes)
            .ok()
            .and_then(CartSnapshot::into_state)
            .unwrap_or_else(CartState::empty)
    }
}
