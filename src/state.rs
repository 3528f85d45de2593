//! Shared application state for all routes.

use crate::config::Settings;
use crate::service::UserService;
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, settings: &Settings) -> Self {
        AppState {
            users: UserService::new(store, settings.id_scheme, settings.update_name_policy),
        }
    }
}
