use std::sync::Arc;

use shortcut_core::Repository;

#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Repository>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &dyn Repository {
        self.storage.as_ref()
    }
}
