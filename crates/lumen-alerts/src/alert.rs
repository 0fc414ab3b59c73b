//! System alert model
//!
//! A closed set of alert variants, each carrying its kind-specific payload.
//! The router dispatches on the variant through one exhaustive match, so a
//! missing branch is a compile error rather than a runtime condition.

use std::fmt;
use std::sync::Arc;

/// Default confirm button title.
pub const OK: &str = "OK";

/// Visual style of an alert action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Confirmative,
    Destructive,
    Cancel,
}

/// Shared completion callback attached to actions and alert payloads.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Continuation invoked when the user dismisses a verification alert.
#[derive(Clone)]
pub struct FailureCallback(Arc<dyn Fn(VerificationError) + Send + Sync>);

impl FailureCallback {
    pub fn new(f: impl Fn(VerificationError) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self, error: VerificationError) {
        (self.0)(error)
    }
}

impl fmt::Debug for FailureCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FailureCallback")
    }
}

/// A labeled response option attached to an alert.
#[derive(Debug, Clone)]
pub struct AlertAction {
    pub title: String,
    pub style: ActionStyle,
    pub handler: Option<Callback>,
}

impl AlertAction {
    pub fn new(title: &str, style: ActionStyle) -> Self {
        Self {
            title: title.to_string(),
            style,
            handler: None,
        }
    }

    pub fn with_handler(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler = Some(Callback::new(f));
        self
    }

    /// The synthesized confirmatory action for alerts that carry none.
    pub fn ok() -> Self {
        Self::new(OK, ActionStyle::Confirmative)
    }

    pub fn invoke(&self) {
        if let Some(handler) = &self.handler {
            handler.invoke();
        }
    }
}

/// Server kind an upgrade alert refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    Standard,
    MultiHop,
    P2p,
    Tor,
}

/// Pre-classified verification failure carried by a verification alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    pub message: String,
}

impl VerificationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// The closed set of alerts the client can raise.
#[derive(Debug, Clone)]
pub enum AlertKind {
    AppUpdateRequired,
    CannotAccessCredentials,
    ExistingConnection,
    FirstTimeConnecting,
    P2pBlocked,
    P2pForwarded,
    RefreshTokenExpired,
    UpgradeRequired {
        server: ServerKind,
        for_specific_country: bool,
        completion: Option<Callback>,
    },
    DelinquentUser,
    VpnStuck,
    NetworkUnreachable,
    SessionCountLimit,
    BillingError {
        reason: String,
    },
    BillingValidationBypass,
    Maintenance,
    LogoutWarning,
    ActiveFirewall,
    InstallingHelper,
    UpdatingHelper,
    HelperInstallFailed,
    BugReportSent,
    UnknownError {
        message: String,
    },
    MitmDetected,
    KillSwitchError,
    KillSwitchBlocking,
    KillSwitchLegacyHelper,
    ClearApplicationData,
    ActiveSessionWarning,
    QuitWarning,
    MultiHopToggle,
    ServerOnMaintenance,
    ReconnectOnShieldChange,
    ShieldRequiresUpgrade,
    MultiHopRequiresUpgrade,
    UserVerification {
        error: VerificationError,
        on_failure: FailureCallback,
    },
}

impl AlertKind {
    /// Short variant name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            AlertKind::AppUpdateRequired => "app-update-required",
            AlertKind::CannotAccessCredentials => "cannot-access-credentials",
            AlertKind::ExistingConnection => "existing-connection",
            AlertKind::FirstTimeConnecting => "first-time-connecting",
            AlertKind::P2pBlocked => "p2p-blocked",
            AlertKind::P2pForwarded => "p2p-forwarded",
            AlertKind::RefreshTokenExpired => "refresh-token-expired",
            AlertKind::UpgradeRequired { .. } => "upgrade-required",
            AlertKind::DelinquentUser => "delinquent-user",
            AlertKind::VpnStuck => "vpn-stuck",
            AlertKind::NetworkUnreachable => "network-unreachable",
            AlertKind::SessionCountLimit => "session-count-limit",
            AlertKind::BillingError { .. } => "billing-error",
            AlertKind::BillingValidationBypass => "billing-validation-bypass",
            AlertKind::Maintenance => "maintenance",
            AlertKind::LogoutWarning => "logout-warning",
            AlertKind::ActiveFirewall => "active-firewall",
            AlertKind::InstallingHelper => "installing-helper",
            AlertKind::UpdatingHelper => "updating-helper",
            AlertKind::HelperInstallFailed => "helper-install-failed",
            AlertKind::BugReportSent => "bug-report-sent",
            AlertKind::UnknownError { .. } => "unknown-error",
            AlertKind::MitmDetected => "mitm-detected",
            AlertKind::KillSwitchError => "kill-switch-error",
            AlertKind::KillSwitchBlocking => "kill-switch-blocking",
            AlertKind::KillSwitchLegacyHelper => "kill-switch-legacy-helper",
            AlertKind::ClearApplicationData => "clear-application-data",
            AlertKind::ActiveSessionWarning => "active-session-warning",
            AlertKind::QuitWarning => "quit-warning",
            AlertKind::MultiHopToggle => "multi-hop-toggle",
            AlertKind::ServerOnMaintenance => "server-on-maintenance",
            AlertKind::ReconnectOnShieldChange => "reconnect-on-shield-change",
            AlertKind::ShieldRequiresUpgrade => "shield-requires-upgrade",
            AlertKind::MultiHopRequiresUpgrade => "multi-hop-requires-upgrade",
            AlertKind::UserVerification { .. } => "user-verification",
        }
    }

    /// Default dialog title, for variants presented as dialogs.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            AlertKind::AppUpdateRequired => Some("Update required"),
            AlertKind::CannotAccessCredentials => Some("Connection error"),
            AlertKind::ExistingConnection => Some("Active connection"),
            AlertKind::FirstTimeConnecting => None,
            AlertKind::P2pBlocked => Some("P2P blocked"),
            AlertKind::P2pForwarded => Some("P2P traffic rerouted"),
            AlertKind::RefreshTokenExpired => Some("Session expired"),
            AlertKind::UpgradeRequired { .. } => Some("Upgrade required"),
            AlertKind::DelinquentUser => Some("Payment overdue"),
            AlertKind::VpnStuck => Some("Connection stuck"),
            AlertKind::NetworkUnreachable => Some("Network unreachable"),
            AlertKind::SessionCountLimit => Some("Too many sessions"),
            AlertKind::BillingError { .. } => Some("Billing error"),
            AlertKind::BillingValidationBypass => Some("Purchase pending"),
            AlertKind::Maintenance => Some("Servers under maintenance"),
            AlertKind::LogoutWarning => Some("Log out?"),
            AlertKind::ActiveFirewall => Some("Firewall active"),
            AlertKind::InstallingHelper => Some("Installing helper"),
            AlertKind::UpdatingHelper => Some("Updating helper"),
            AlertKind::HelperInstallFailed => Some("Helper installation failed"),
            AlertKind::BugReportSent => Some("Report sent"),
            AlertKind::UnknownError { .. } => Some("Something went wrong"),
            AlertKind::MitmDetected => Some("Insecure network"),
            AlertKind::KillSwitchError => Some("Kill switch error"),
            AlertKind::KillSwitchBlocking => Some("Kill switch blocking traffic"),
            AlertKind::KillSwitchLegacyHelper => None,
            AlertKind::ClearApplicationData => Some("Delete application data?"),
            AlertKind::ActiveSessionWarning => Some("Active session"),
            AlertKind::QuitWarning => Some("Quit Lumen VPN?"),
            AlertKind::MultiHopToggle => Some("Reconnect required"),
            AlertKind::ServerOnMaintenance => None,
            AlertKind::ReconnectOnShieldChange => Some("Reconnect required"),
            AlertKind::ShieldRequiresUpgrade => Some("Shield is a paid feature"),
            AlertKind::MultiHopRequiresUpgrade => Some("Multi-Hop is a paid feature"),
            AlertKind::UserVerification { .. } => Some("Verification required"),
        }
    }

    /// Default dialog message. Custom handlers may replace this with a styled
    /// body or variant-specific copy.
    pub fn message(&self) -> Option<String> {
        let text = match self {
            AlertKind::AppUpdateRequired => {
                "This version of Lumen VPN is out of date. Update to keep connecting."
            }
            AlertKind::CannotAccessCredentials => {
                "Your VPN credentials could not be accessed. Please sign in again."
            }
            AlertKind::ExistingConnection => {
                "A VPN connection is already active. Connecting will replace it."
            }
            AlertKind::FirstTimeConnecting => return None,
            AlertKind::P2pBlocked => "P2P traffic is not permitted on this server.",
            AlertKind::P2pForwarded => return None,
            AlertKind::RefreshTokenExpired => {
                "Your session has expired. Please log in again to continue."
            }
            AlertKind::UpgradeRequired { .. } => return None,
            AlertKind::DelinquentUser => {
                "Your account has unpaid invoices. Settle them to keep using Lumen VPN."
            }
            AlertKind::VpnStuck => {
                "The VPN connection could not be re-established. Try a different server."
            }
            AlertKind::NetworkUnreachable => "The network is unreachable. Check your connection.",
            AlertKind::SessionCountLimit => {
                "You have reached the maximum number of simultaneous sessions."
            }
            AlertKind::BillingError { reason } => return Some(reason.clone()),
            AlertKind::BillingValidationBypass => {
                "Your purchase is being processed and will be credited shortly."
            }
            AlertKind::Maintenance => {
                "The servers are under maintenance. Please try again in a few minutes."
            }
            AlertKind::LogoutWarning => "Logging out will end your active VPN connection.",
            AlertKind::ActiveFirewall => {
                "An active firewall is interfering with the VPN connection."
            }
            AlertKind::InstallingHelper => return None,
            AlertKind::UpdatingHelper => return None,
            AlertKind::HelperInstallFailed => {
                "The privileged helper could not be installed. Kill switch is unavailable."
            }
            AlertKind::BugReportSent => "Thank you, your report was sent successfully.",
            AlertKind::UnknownError { message } => return Some(message.clone()),
            AlertKind::MitmDetected => {
                "The server certificate could not be verified. Your network may be intercepted."
            }
            AlertKind::KillSwitchError => "The kill switch could not be configured.",
            AlertKind::KillSwitchBlocking => return None,
            AlertKind::KillSwitchLegacyHelper => return None,
            AlertKind::ClearApplicationData => {
                "All application data will be deleted and you will be logged out."
            }
            AlertKind::ActiveSessionWarning => {
                "Another session is active on this account. Continuing will disconnect it."
            }
            AlertKind::QuitWarning => "Quitting will end your VPN connection.",
            AlertKind::MultiHopToggle => "Changing Multi-Hop requires reconnecting.",
            AlertKind::ServerOnMaintenance => return None,
            AlertKind::ReconnectOnShieldChange => "Changing Shield requires reconnecting.",
            AlertKind::ShieldRequiresUpgrade => {
                "Shield blocks ads and trackers. Upgrade your plan to enable it."
            }
            AlertKind::MultiHopRequiresUpgrade => {
                "Multi-Hop routes you through two servers. Upgrade your plan to enable it."
            }
            AlertKind::UserVerification { .. } => {
                "Complete human verification to continue using Lumen VPN."
            }
        };
        Some(text.to_string())
    }
}

/// An alert instance: a variant plus the actions the caller attached.
#[derive(Debug, Clone)]
pub struct SystemAlert {
    pub kind: AlertKind,
    pub actions: Vec<AlertAction>,
}

impl SystemAlert {
    pub fn new(kind: AlertKind) -> Self {
        Self {
            kind,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(kind: AlertKind, actions: Vec<AlertAction>) -> Self {
        Self { kind, actions }
    }
}
