use metroscope::{repository::Repository, sim::SnapshotStore};

pub struct AppState {
    pub repository: Repository,
    pub store: SnapshotStore,
}

impl AppState {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            store: SnapshotStore::new(),
        }
    }
}
