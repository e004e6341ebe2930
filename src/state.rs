use std::sync::Arc;

use crate::{config::AppConfig, dispatch::DispatchHandle};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dispatch: DispatchHandle,
}
