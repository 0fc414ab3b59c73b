//! External service seams
//!
//! The VPN core, window layer, notifications and updater live outside this
//! crate; the router only ever talks to them through these object-safe
//! traits. All calls are fire-and-forget: implementations handle their own
//! failures, nothing is surfaced back to the router.

use crate::alert::{AlertAction, Callback};
use crate::text::StyledText;
use url::Url;

/// Whether the user session with the core is currently established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Established,
    NotEstablished,
}

/// A fully resolved dialog handed to the presenter.
#[derive(Debug, Clone)]
pub struct PresentedAlert {
    pub title: Option<String>,
    pub message: Option<String>,
    /// Styled body; replaces `message` when present.
    pub body: Option<StyledText>,
    /// Never empty by the time the presenter sees it.
    pub actions: Vec<AlertAction>,
}

/// Dedicated modal view requests for the richer alert variants.
#[derive(Debug, Clone)]
pub enum ModalRequest {
    /// Explains the system agent password prompt on first connection
    HelperCredentialsHelp,
    /// Multi-Hop upsell with its stored completion
    MultiHopUpgrade { on_upgrade: Option<Callback> },
    /// Helper reinstall flow for kill switch on legacy installs
    KillSwitchLegacyHelper { actions: Vec<AlertAction> },
}

/// Generic modal dialog presentation.
pub trait AlertPresenter: Send + Sync {
    fn display(&self, alert: PresentedAlert);
}

/// Key-modal presentation for dedicated view controllers.
pub trait WindowService: Send + Sync {
    fn present_key_modal(&self, request: ModalRequest);
}

/// Session state owned by the core.
pub trait SessionService: Send + Sync {
    fn status(&self) -> SessionStatus;
    fn log_out(&self, force: bool);
}

/// System notification surface.
pub trait NotificationService: Send + Sync {
    fn notify_server_maintenance(&self);
}

/// Application updater.
pub trait UpdateService: Send + Sync {
    fn start_update(&self);
}

/// Opens links in the default browser (or routes deep links in-app).
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &Url);
}
