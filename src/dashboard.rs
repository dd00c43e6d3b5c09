//! Composition root: the match view plus an optional backend handle
use tracing::{info, warn};

use crate::backend::{BackendSettings, ClientHandle};
use crate::view::MatchView;

pub struct Dashboard {
    view: MatchView,
    backend: Option<ClientHandle>,
}

impl Dashboard {
    pub fn new(view: MatchView) -> Self {
        Self { view, backend: None }
    }

    pub fn with_backend(mut self, backend: ClientHandle) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach a backend when the settings are valid; a bad configuration is
    /// only logged since nothing on screen needs the backend
    pub fn with_backend_settings(self, settings: &BackendSettings) -> Self {
        if !settings.is_configured() {
            info!("No backend configured");
            return self;
        }
        match settings.connect() {
            Ok(handle) => self.with_backend(handle),
            Err(e) => {
                warn!("Backend disabled: {}", e);
                self
            }
        }
    }

    pub fn view(&self) -> &MatchView {
        &self.view
    }

    pub fn backend(&self) -> Option<&ClientHandle> {
        self.backend.as_ref()
    }
}
