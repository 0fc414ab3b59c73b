//! Core service bridge
//!
//! Implementations of the alert service seams backed by the platform layers.
//! The native dialog and notification surfaces are not part of this layer;
//! every call logs the presentation it would hand off, and the session bridge
//! keeps real state so routing policy (logout guards) behaves as in the app.

use lumen_alerts::{
    AlertPresenter, LinkOpener, ModalRequest, NotificationService, PresentedAlert, SessionService,
    SessionStatus, UpdateService, WindowService,
};
use std::sync::Mutex;
use tracing::{info, warn};
use url::Url;

/// Bridge to the platform dialog/notification/session surfaces.
pub struct CoreBridge {
    session_status: Mutex<SessionStatus>,
}

impl CoreBridge {
    pub fn new() -> Self {
        Self {
            session_status: Mutex::new(SessionStatus::Established),
        }
    }

    pub fn set_session_status(&self, status: SessionStatus) {
        *self.session_status.lock().unwrap() = status;
    }
}

impl Default for CoreBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPresenter for CoreBridge {
    fn display(&self, alert: PresentedAlert) {
        let body = alert
            .body
            .map(|b| b.to_plain_string())
            .or(alert.message)
            .unwrap_or_default();
        let actions: Vec<&str> = alert.actions.iter().map(|a| a.title.as_str()).collect();
        info!(
            "dialog: {} | {} {:?}",
            alert.title.as_deref().unwrap_or(""),
            body,
            actions
        );
    }
}

impl WindowService for CoreBridge {
    fn present_key_modal(&self, request: ModalRequest) {
        info!("key modal: {:?}", request);
    }
}

impl SessionService for CoreBridge {
    fn status(&self) -> SessionStatus {
        *self.session_status.lock().unwrap()
    }

    fn log_out(&self, force: bool) {
        warn!("logging out (force: {force})");
        *self.session_status.lock().unwrap() = SessionStatus::NotEstablished;
    }
}

impl NotificationService for CoreBridge {
    fn notify_server_maintenance(&self) {
        info!("notification: server going on maintenance");
    }
}

impl UpdateService for CoreBridge {
    fn start_update(&self) {
        info!("starting application update");
    }
}

impl LinkOpener for CoreBridge {
    fn open(&self, url: &Url) {
        info!("opening link: {url}");
    }
}
