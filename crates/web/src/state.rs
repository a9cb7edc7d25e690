use std::sync::Arc;

use storage::Store;

use crate::auth::TokenKeys;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenKeys) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
