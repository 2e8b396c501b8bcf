use crate::storage::RecordStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub credential_path: PathBuf,
    pub store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new(credential_path: PathBuf, store: RecordStore) -> Self {
        Self {
            credential_path,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
