//! Lumen Alerts - System Alert Routing
//!
//! Maps the client's closed set of system alerts onto native presentations.
//! The VPN core classifies failures and raises `SystemAlert`s; this crate
//! decides how each variant is shown (generic dialog, styled body, dedicated
//! modal, system notification) and guarantees dialogs are only built on the
//! UI-owning thread.
//!
//! # Architecture
//!
//! ```text
//!            SystemAlert (closed variant set)
//!                        │
//!      AlertHandle ──────┤ redirect channel (other threads)
//!                        ▼
//!                  AlertRouter ── exhaustive dispatch
//!                        │
//!        ┌───────────────┼───────────────────┐
//!        ▼               ▼                   ▼
//!  AlertPresenter   WindowService   NotificationService
//!  (generic dialog) (key modals)    (maintenance notice)
//! ```

mod alert;
mod config;
mod router;
mod services;
mod text;

pub use alert::{
    ActionStyle, AlertAction, AlertKind, Callback, FailureCallback, OK, ServerKind, SystemAlert,
    VerificationError,
};
pub use config::{AlertConfig, ConfigError};
pub use router::{AlertHandle, AlertRouter, AlertServices};
pub use services::{
    AlertPresenter, LinkOpener, ModalRequest, NotificationService, PresentedAlert, SessionService,
    SessionStatus, UpdateService, WindowService,
};
pub use text::{Span, StyledText, TextTone};
