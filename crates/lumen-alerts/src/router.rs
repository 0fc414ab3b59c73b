//! Alert router
//!
//! Receives `SystemAlert`s from anywhere in the client and maps each variant
//! onto exactly one presentation call. Dialogs are only ever constructed on
//! the thread that owns the router: callers on other threads go through an
//! `AlertHandle`, which enqueues the alert on the redirect channel for the
//! owning thread to `pump()` in FIFO order.
//!
//! ```text
//!  background threads            UI thread
//!  ─────────────────             ─────────────────────────────
//!  AlertHandle::push ──channel──▶ AlertRouter::pump ─▶ dispatch
//!                                 AlertRouter::push ─▶ dispatch
//!                                                        │
//!                         presenter / window / notification service
//! ```
//!
//! Handlers never fail: downstream calls (open link, logout, update) are
//! fire-and-forget and the services own their error handling.

use crate::alert::{
    ActionStyle, AlertAction, AlertKind, Callback, OK, ServerKind, SystemAlert,
};
use crate::config::AlertConfig;
use crate::services::{
    AlertPresenter, LinkOpener, ModalRequest, NotificationService, PresentedAlert, SessionService,
    SessionStatus, UpdateService, WindowService,
};
use crate::text::StyledText;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Instant;
use tracing::{debug, warn};

/// The external services the router presents through.
#[derive(Clone)]
pub struct AlertServices {
    pub presenter: Arc<dyn AlertPresenter>,
    pub windows: Arc<dyn WindowService>,
    pub session: Arc<dyn SessionService>,
    pub notifications: Arc<dyn NotificationService>,
    pub updater: Arc<dyn UpdateService>,
    pub links: Arc<dyn LinkOpener>,
}

/// Cloneable cross-thread entry point to the router.
#[derive(Clone)]
pub struct AlertHandle {
    tx: Sender<SystemAlert>,
}

impl AlertHandle {
    /// Enqueue an alert for the owning thread. Fire-and-forget: returns
    /// immediately, never blocks, never fails the caller.
    pub fn push(&self, alert: SystemAlert) {
        if self.tx.send(alert).is_err() {
            warn!("alert router is gone, dropping alert");
        }
    }
}

/// Routes system alerts to their presentation.
///
/// Owned by the UI thread that constructs it. `last_maintenance_notice` is
/// only touched during dispatch on that thread, so it needs no lock.
pub struct AlertRouter {
    services: AlertServices,
    config: AlertConfig,
    ui_thread: ThreadId,
    redirect_tx: Sender<SystemAlert>,
    redirect_rx: Receiver<SystemAlert>,
    last_maintenance_notice: Option<Instant>,
}

impl AlertRouter {
    /// Create the router on the UI-owning thread.
    pub fn new(services: AlertServices, config: AlertConfig) -> Self {
        let (redirect_tx, redirect_rx) = unbounded();
        Self {
            services,
            config,
            ui_thread: thread::current().id(),
            redirect_tx,
            redirect_rx,
            last_maintenance_notice: None,
        }
    }

    /// Handle for pushing alerts from other threads.
    pub fn handle(&self) -> AlertHandle {
        AlertHandle {
            tx: self.redirect_tx.clone(),
        }
    }

    /// Route an alert. On the owning thread this dispatches synchronously;
    /// from any other thread the alert is re-enqueued onto the redirect
    /// channel and the call returns immediately.
    pub fn push(&mut self, alert: SystemAlert) {
        if thread::current().id() != self.ui_thread {
            debug!("redirecting alert {} to the UI thread", alert.kind.name());
            let _ = self.redirect_tx.send(alert);
            return;
        }
        self.dispatch(alert);
    }

    /// Drain redirected alerts in FIFO order. Called by the UI loop.
    pub fn pump(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(alert) = self.redirect_rx.try_recv() {
            self.dispatch(alert);
            dispatched += 1;
        }
        dispatched
    }

    fn dispatch(&mut self, alert: SystemAlert) {
        debug!("presenting alert: {}", alert.kind.name());

        let title = alert.kind.title().map(str::to_string);
        let message = alert.kind.message();
        let SystemAlert { kind, actions } = alert;

        match kind {
            AlertKind::AppUpdateRequired => self.show_app_update_required(title, message, actions),
            AlertKind::CannotAccessCredentials => {
                self.show_cannot_access_credentials(title, message, actions)
            }
            AlertKind::FirstTimeConnecting => self.show_first_time_connecting(),
            AlertKind::P2pForwarded => self.show_p2p_forwarded(title, actions),
            AlertKind::RefreshTokenExpired => {
                self.show_refresh_token_expired(title, message, actions)
            }
            AlertKind::UpgradeRequired {
                server,
                for_specific_country,
                completion,
            } => self.show_upgrade_required(server, for_specific_country, completion, actions),
            AlertKind::InstallingHelper => self.show_installing_helper(title, actions),
            AlertKind::UpdatingHelper => self.show_updating_helper(title, actions),
            AlertKind::KillSwitchBlocking => self.show_kill_switch_blocking(title, actions),
            AlertKind::KillSwitchLegacyHelper => self
                .services
                .windows
                .present_key_modal(ModalRequest::KillSwitchLegacyHelper { actions }),
            AlertKind::ServerOnMaintenance => self.show_server_on_maintenance(),
            AlertKind::UserVerification { error, on_failure } => {
                let mut actions = actions;
                let err = error;
                actions.push(
                    AlertAction::new(OK, ActionStyle::Confirmative)
                        .with_handler(move || on_failure.invoke(err.clone())),
                );
                self.present(title, message, None, actions);
            }

            AlertKind::ExistingConnection
            | AlertKind::P2pBlocked
            | AlertKind::DelinquentUser
            | AlertKind::VpnStuck
            | AlertKind::NetworkUnreachable
            | AlertKind::SessionCountLimit
            | AlertKind::BillingError { .. }
            | AlertKind::BillingValidationBypass
            | AlertKind::Maintenance
            | AlertKind::LogoutWarning
            | AlertKind::ActiveFirewall
            | AlertKind::HelperInstallFailed
            | AlertKind::BugReportSent
            | AlertKind::UnknownError { .. }
            | AlertKind::MitmDetected
            | AlertKind::KillSwitchError
            | AlertKind::ClearApplicationData
            | AlertKind::ActiveSessionWarning
            | AlertKind::QuitWarning
            | AlertKind::MultiHopToggle
            | AlertKind::ReconnectOnShieldChange
            | AlertKind::ShieldRequiresUpgrade
            | AlertKind::MultiHopRequiresUpgrade => self.present(title, message, None, actions),
        }
    }

    /// Hand a dialog to the presenter, synthesizing the confirmatory action
    /// when the alert carries none.
    fn present(
        &self,
        title: Option<String>,
        message: Option<String>,
        body: Option<StyledText>,
        mut actions: Vec<AlertAction>,
    ) {
        if actions.is_empty() {
            actions.push(AlertAction::ok());
        }
        self.services.presenter.display(PresentedAlert {
            title,
            message,
            body,
            actions,
        });
    }

    fn show_app_update_required(
        &self,
        title: Option<String>,
        message: Option<String>,
        mut actions: Vec<AlertAction>,
    ) {
        let links = self.services.links.clone();
        let support_url = self.config.support_form_url.clone();
        actions.push(
            AlertAction::new("Get help", ActionStyle::Confirmative)
                .with_handler(move || links.open(&support_url)),
        );

        let updater = self.services.updater.clone();
        actions.push(
            AlertAction::new("Update", ActionStyle::Confirmative)
                .with_handler(move || updater.start_update()),
        );

        self.present(title, message, None, actions);
    }

    fn show_cannot_access_credentials(
        &self,
        title: Option<String>,
        message: Option<String>,
        actions: Vec<AlertAction>,
    ) {
        // Already logged out; presenting again would force a second logout
        if self.services.session.status() != SessionStatus::Established {
            debug!("credentials alert suppressed: session not established");
            return;
        }
        self.services.session.log_out(true);
        self.present(title, message, None, actions);
    }

    fn show_first_time_connecting(&self) {
        if !self.config.explain_agent_prompt {
            debug!("agent prompt needs no explanation on this platform");
            return;
        }
        self.services
            .windows
            .present_key_modal(ModalRequest::HelperCredentialsHelp);
    }

    fn show_p2p_forwarded(&self, title: Option<String>, actions: Vec<AlertAction>) {
        let body = StyledText::new()
            .text("This server does not support ")
            .icon("p2p-white", 15.0, 12.0)
            .text(" traffic, so your connection is being rerouted through one that does.");
        self.present(title, None, Some(body), actions);
    }

    fn show_refresh_token_expired(
        &self,
        title: Option<String>,
        message: Option<String>,
        mut actions: Vec<AlertAction>,
    ) {
        let session = self.services.session.clone();
        actions.push(
            AlertAction::new(OK, ActionStyle::Confirmative)
                .with_handler(move || session.log_out(true)),
        );
        self.present(title, message, None, actions);
    }

    fn show_upgrade_required(
        &self,
        server: ServerKind,
        for_specific_country: bool,
        completion: Option<Callback>,
        mut actions: Vec<AlertAction>,
    ) {
        if server == ServerKind::MultiHop {
            self.services
                .windows
                .present_key_modal(ModalRequest::MultiHopUpgrade {
                    on_upgrade: completion,
                });
            return;
        }

        let message = if for_specific_country {
            "Upgrade your plan to access servers in this country."
        } else {
            "Upgrade your plan to access this server."
        };

        let links = self.services.links.clone();
        let dashboard = self.config.account_dashboard_url.clone();
        actions.push(
            AlertAction::new("Upgrade", ActionStyle::Confirmative).with_handler(move || {
                links.open(&dashboard);
                if let Some(done) = &completion {
                    done.invoke();
                }
            }),
        );

        self.present(
            Some("Upgrade required".to_string()),
            Some(message.to_string()),
            None,
            actions,
        );
    }

    fn show_installing_helper(&self, title: Option<String>, actions: Vec<AlertAction>) {
        let body = StyledText::new()
            .text("Lumen VPN needs to install a privileged helper for the kill switch. Enter your ")
            .bold_accent("password")
            .text(" when prompted.");
        self.present(title, None, Some(body), actions);
    }

    fn show_updating_helper(&self, title: Option<String>, actions: Vec<AlertAction>) {
        let body = StyledText::new()
            .text("Lumen VPN needs to update its privileged helper. Enter your ")
            .bold_accent("password")
            .text(" when prompted.");
        self.present(title, None, Some(body), actions);
    }

    fn show_kill_switch_blocking(&self, title: Option<String>, actions: Vec<AlertAction>) {
        let body = StyledText::new()
            .text("The kill switch is blocking all traffic because the tunnel is down. You can turn it off under ")
            .link("Preferences", self.config.connection_settings_url.as_str())
            .text(".");
        self.present(title, None, Some(body), actions);
    }

    fn show_server_on_maintenance(&mut self) {
        let due = self
            .last_maintenance_notice
            .is_none_or(|shown| shown.elapsed() >= self.config.maintenance_notice_interval());
        if !due {
            debug!("maintenance notice suppressed: shown recently");
            return;
        }
        self.services.notifications.notify_server_maintenance();
        self.last_maintenance_notice = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Callback, FailureCallback, VerificationError};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use url::Url;

    /// Records every service call the router makes.
    struct Recorder {
        presented: Mutex<Vec<PresentedAlert>>,
        modals: Mutex<Vec<ModalRequest>>,
        maintenance_notices: AtomicUsize,
        logouts: Mutex<Vec<bool>>,
        updates: AtomicUsize,
        opened: Mutex<Vec<Url>>,
        status: Mutex<SessionStatus>,
    }

    impl Default for Recorder {
        fn default() -> Self {
            Self {
                presented: Mutex::new(Vec::new()),
                modals: Mutex::new(Vec::new()),
                maintenance_notices: AtomicUsize::new(0),
                logouts: Mutex::new(Vec::new()),
                updates: AtomicUsize::new(0),
                opened: Mutex::new(Vec::new()),
                status: Mutex::new(SessionStatus::Established),
            }
        }
    }

    impl Recorder {
        fn presentation_count(&self) -> usize {
            self.presented.lock().unwrap().len()
                + self.modals.lock().unwrap().len()
                + self.maintenance_notices.load(Ordering::SeqCst)
        }

        fn last_presented(&self) -> PresentedAlert {
            self.presented.lock().unwrap().last().unwrap().clone()
        }
    }

    impl AlertPresenter for Recorder {
        fn display(&self, alert: PresentedAlert) {
            self.presented.lock().unwrap().push(alert);
        }
    }

    impl WindowService for Recorder {
        fn present_key_modal(&self, request: ModalRequest) {
            self.modals.lock().unwrap().push(request);
        }
    }

    impl SessionService for Recorder {
        fn status(&self) -> SessionStatus {
            *self.status.lock().unwrap()
        }

        fn log_out(&self, force: bool) {
            self.logouts.lock().unwrap().push(force);
        }
    }

    impl NotificationService for Recorder {
        fn notify_server_maintenance(&self) {
            self.maintenance_notices.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl UpdateService for Recorder {
        fn start_update(&self) {
            self.updates.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl LinkOpener for Recorder {
        fn open(&self, url: &Url) {
            self.opened.lock().unwrap().push(url.clone());
        }
    }

    fn services(recorder: &Arc<Recorder>) -> AlertServices {
        AlertServices {
            presenter: recorder.clone(),
            windows: recorder.clone(),
            session: recorder.clone(),
            notifications: recorder.clone(),
            updater: recorder.clone(),
            links: recorder.clone(),
        }
    }

    fn router_with(recorder: &Arc<Recorder>, config: AlertConfig) -> AlertRouter {
        AlertRouter::new(services(recorder), config)
    }

    fn all_kinds() -> Vec<AlertKind> {
        vec![
            AlertKind::AppUpdateRequired,
            AlertKind::CannotAccessCredentials,
            AlertKind::ExistingConnection,
            AlertKind::FirstTimeConnecting,
            AlertKind::P2pBlocked,
            AlertKind::P2pForwarded,
            AlertKind::RefreshTokenExpired,
            AlertKind::UpgradeRequired {
                server: ServerKind::Standard,
                for_specific_country: false,
                completion: None,
            },
            AlertKind::UpgradeRequired {
                server: ServerKind::MultiHop,
                for_specific_country: false,
                completion: None,
            },
            AlertKind::DelinquentUser,
            AlertKind::VpnStuck,
            AlertKind::NetworkUnreachable,
            AlertKind::SessionCountLimit,
            AlertKind::BillingError {
                reason: "card declined".to_string(),
            },
            AlertKind::BillingValidationBypass,
            AlertKind::Maintenance,
            AlertKind::LogoutWarning,
            AlertKind::ActiveFirewall,
            AlertKind::InstallingHelper,
            AlertKind::UpdatingHelper,
            AlertKind::HelperInstallFailed,
            AlertKind::BugReportSent,
            AlertKind::UnknownError {
                message: "tunnel handshake failed".to_string(),
            },
            AlertKind::MitmDetected,
            AlertKind::KillSwitchError,
            AlertKind::KillSwitchBlocking,
            AlertKind::KillSwitchLegacyHelper,
            AlertKind::ClearApplicationData,
            AlertKind::ActiveSessionWarning,
            AlertKind::QuitWarning,
            AlertKind::MultiHopToggle,
            AlertKind::ServerOnMaintenance,
            AlertKind::ReconnectOnShieldChange,
            AlertKind::ShieldRequiresUpgrade,
            AlertKind::MultiHopRequiresUpgrade,
            AlertKind::UserVerification {
                error: VerificationError::new("captcha dismissed"),
                on_failure: FailureCallback::new(|_| {}),
            },
        ]
    }

    #[test]
    fn test_every_kind_presents_exactly_once() {
        let config = AlertConfig {
            explain_agent_prompt: true,
            ..AlertConfig::default()
        };

        for kind in all_kinds() {
            let recorder = Arc::new(Recorder::default());
            let mut router = router_with(&recorder, config.clone());
            let name = kind.name();

            router.push(SystemAlert::new(kind));
            assert_eq!(
                recorder.presentation_count(),
                1,
                "alert {name} must present exactly once"
            );

            for alert in recorder.presented.lock().unwrap().iter() {
                assert!(
                    !alert.actions.is_empty(),
                    "alert {name} presented without actions"
                );
            }
        }
    }

    #[test]
    fn test_generic_synthesizes_ok_action() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::ExistingConnection));

        let presented = recorder.last_presented();
        assert_eq!(presented.actions.len(), 1);
        assert_eq!(presented.actions[0].title, OK);
    }

    #[test]
    fn test_caller_actions_preserved() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        let quit = AlertAction::new("Quit", ActionStyle::Destructive);
        router.push(SystemAlert::with_actions(AlertKind::QuitWarning, vec![quit]));

        let presented = recorder.last_presented();
        assert_eq!(presented.actions.len(), 1);
        assert_eq!(presented.actions[0].title, "Quit");
    }

    #[test]
    fn test_credentials_alert_swallowed_when_logged_out() {
        let recorder = Arc::new(Recorder::default());
        *recorder.status.lock().unwrap() = SessionStatus::NotEstablished;
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::CannotAccessCredentials));

        assert_eq!(recorder.presentation_count(), 0);
        assert!(recorder.logouts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_credentials_alert_forces_logout_when_established() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::CannotAccessCredentials));

        assert_eq!(recorder.presentation_count(), 1);
        assert_eq!(recorder.logouts.lock().unwrap().as_slice(), &[true]);
    }

    #[test]
    fn test_maintenance_notice_rate_limited() {
        let recorder = Arc::new(Recorder::default());
        let config = AlertConfig {
            maintenance_notice_interval_secs: 3600,
            ..AlertConfig::default()
        };
        let mut router = router_with(&recorder, config);

        router.push(SystemAlert::new(AlertKind::ServerOnMaintenance));
        router.push(SystemAlert::new(AlertKind::ServerOnMaintenance));

        assert_eq!(recorder.maintenance_notices.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_maintenance_notice_shown_after_window() {
        let recorder = Arc::new(Recorder::default());
        let config = AlertConfig {
            maintenance_notice_interval_secs: 0,
            ..AlertConfig::default()
        };
        let mut router = router_with(&recorder, config);

        router.push(SystemAlert::new(AlertKind::ServerOnMaintenance));
        router.push(SystemAlert::new(AlertKind::ServerOnMaintenance));

        assert_eq!(recorder.maintenance_notices.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cross_thread_push_defers_presentation() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());
        let handle = router.handle();

        let worker = thread::spawn(move || {
            handle.push(SystemAlert::new(AlertKind::VpnStuck));
        });
        worker.join().unwrap();

        // Nothing presented until the owning thread pumps
        assert_eq!(recorder.presentation_count(), 0);
        assert_eq!(router.pump(), 1);
        assert_eq!(recorder.presentation_count(), 1);
    }

    #[test]
    fn test_redirected_alerts_arrive_in_fifo_order() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());
        let handle = router.handle();

        thread::spawn(move || {
            handle.push(SystemAlert::new(AlertKind::P2pBlocked));
            handle.push(SystemAlert::new(AlertKind::MitmDetected));
        })
        .join()
        .unwrap();

        assert_eq!(router.pump(), 2);
        let presented = recorder.presented.lock().unwrap();
        assert_eq!(presented[0].title.as_deref(), Some("P2P blocked"));
        assert_eq!(presented[1].title.as_deref(), Some("Insecure network"));
    }

    #[test]
    fn test_same_thread_push_is_synchronous() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::Maintenance));
        assert_eq!(recorder.presentation_count(), 1);
        assert_eq!(router.pump(), 0);
    }

    #[test]
    fn test_update_alert_wires_support_and_update_actions() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::AppUpdateRequired));

        let presented = recorder.last_presented();
        let titles: Vec<&str> = presented.actions.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Get help", "Update"]);

        presented.actions[0].invoke();
        assert_eq!(
            recorder.opened.lock().unwrap().as_slice(),
            &[AlertConfig::default().support_form_url]
        );

        presented.actions[1].invoke();
        assert_eq!(recorder.updates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_token_expired_action_forces_logout() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::RefreshTokenExpired));
        assert!(recorder.logouts.lock().unwrap().is_empty());

        recorder.last_presented().actions[0].invoke();
        assert_eq!(recorder.logouts.lock().unwrap().as_slice(), &[true]);
    }

    #[test]
    fn test_multi_hop_upgrade_requests_modal() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::UpgradeRequired {
            server: ServerKind::MultiHop,
            for_specific_country: false,
            completion: Some(Callback::new(|| {})),
        }));

        let modals = recorder.modals.lock().unwrap();
        assert!(matches!(
            &modals[0],
            ModalRequest::MultiHopUpgrade { on_upgrade: Some(_) }
        ));
    }

    #[test]
    fn test_standard_upgrade_opens_dashboard_then_completes() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        let completed = Arc::new(AtomicBool::new(false));
        let flag = completed.clone();
        router.push(SystemAlert::new(AlertKind::UpgradeRequired {
            server: ServerKind::Standard,
            for_specific_country: true,
            completion: Some(Callback::new(move || flag.store(true, Ordering::SeqCst))),
        }));

        let presented = recorder.last_presented();
        assert_eq!(
            presented.message.as_deref(),
            Some("Upgrade your plan to access servers in this country.")
        );

        presented.actions[0].invoke();
        assert_eq!(
            recorder.opened.lock().unwrap().as_slice(),
            &[AlertConfig::default().account_dashboard_url]
        );
        assert!(completed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_p2p_forwarded_carries_icon_body() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::P2pForwarded));

        let body = recorder.last_presented().body.unwrap();
        assert!(body.spans.iter().any(|span| matches!(
            span,
            crate::text::Span::Icon { name, .. } if name == "p2p-white"
        )));
    }

    #[test]
    fn test_kill_switch_blocking_links_to_settings() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        router.push(SystemAlert::new(AlertKind::KillSwitchBlocking));

        let body = recorder.last_presented().body.unwrap();
        assert!(body.spans.iter().any(|span| matches!(
            span,
            crate::text::Span::Text { link: Some(target), .. }
                if target == AlertConfig::default().connection_settings_url.as_str()
        )));
    }

    #[test]
    fn test_first_time_connecting_respects_platform_gate() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());
        router.push(SystemAlert::new(AlertKind::FirstTimeConnecting));
        assert_eq!(recorder.presentation_count(), 0);

        let recorder = Arc::new(Recorder::default());
        let config = AlertConfig {
            explain_agent_prompt: true,
            ..AlertConfig::default()
        };
        let mut router = router_with(&recorder, config);
        router.push(SystemAlert::new(AlertKind::FirstTimeConnecting));

        let modals = recorder.modals.lock().unwrap();
        assert!(matches!(&modals[0], ModalRequest::HelperCredentialsHelp));
    }

    #[test]
    fn test_legacy_helper_modal_keeps_actions() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        let reinstall = AlertAction::new("Reinstall", ActionStyle::Confirmative);
        router.push(SystemAlert::with_actions(
            AlertKind::KillSwitchLegacyHelper,
            vec![reinstall],
        ));

        let modals = recorder.modals.lock().unwrap();
        assert!(matches!(
            &modals[0],
            ModalRequest::KillSwitchLegacyHelper { actions } if actions.len() == 1
        ));
    }

    #[test]
    fn test_verification_dismissal_invokes_failure() {
        let recorder = Arc::new(Recorder::default());
        let mut router = router_with(&recorder, AlertConfig::default());

        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        router.push(SystemAlert::new(AlertKind::UserVerification {
            error: VerificationError::new("captcha dismissed"),
            on_failure: FailureCallback::new(move |e| {
                *sink.lock().unwrap() = Some(e.message);
            }),
        }));

        recorder.last_presented().actions.last().unwrap().invoke();
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("captcha dismissed")
        );
    }
}
