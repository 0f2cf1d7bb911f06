use std::sync::Arc;

use crate::store::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
}
