use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Combined state: server config + Leptos options.
/// The manual `FromRef` impl lets Leptos extract `LeptosOptions` from the same router state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let leptos_options = config.leptos_options()?;
        Ok(Self {
            config: Arc::new(config),
            leptos_options,
        })
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
