//! Country row view-model
//!
//! Owned by the list layer that recycles rows; a row copies the display state
//! on bind and follows later changes through the model's event bus.

use crate::Color;
use crate::observer::{EventBus, Subscription};
use crossbeam_channel::Receiver;
use std::fmt;
use std::sync::Arc;

/// Expansion state of a country cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Collapsed,
    Expanded,
}

/// Server feature of a country entry.
///
/// The keyword badge is only shown for features ranked above `MultiHop`;
/// plain and multi-hop servers advertise themselves elsewhere in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerFeature {
    Standard,
    MultiHop,
    Tor,
    P2p,
    Streaming,
}

impl ServerFeature {
    pub fn rank(&self) -> u8 {
        match self {
            ServerFeature::Standard => 0,
            ServerFeature::MultiHop => 1,
            ServerFeature::Tor => 2,
            ServerFeature::P2p => 3,
            ServerFeature::Streaming => 4,
        }
    }

    /// Keyword badge asset, for features that carry one.
    pub fn badge_asset(&self) -> Option<&'static str> {
        match self {
            ServerFeature::Standard | ServerFeature::MultiHop => None,
            ServerFeature::Tor => Some("tor-badge"),
            ServerFeature::P2p => Some("p2p-badge"),
            ServerFeature::Streaming => Some("streaming-badge"),
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            ServerFeature::Standard | ServerFeature::MultiHop => None,
            ServerFeature::Tor => Some("Tor servers"),
            ServerFeature::P2p => Some("P2P servers"),
            ServerFeature::Streaming => Some("Streaming servers"),
        }
    }
}

/// State changes a model pushes to its bound row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    ConnectionChanged(bool),
    CellStateChanged(CellState),
}

/// Click handler slot on the view-model.
#[derive(Clone)]
pub struct RowAction(Arc<dyn Fn() + Send + Sync>);

impl RowAction {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowAction")
    }
}

/// View-model for one country entry.
pub struct CountryRowModel {
    pub country_code: String,
    pub display_name: String,
    pub feature: ServerFeature,
    pub connected: bool,
    pub under_maintenance: bool,
    pub background: Color,
    pub cell_state: CellState,
    connect_action: Option<RowAction>,
    expand_action: Option<RowAction>,
    events: EventBus<RowEvent>,
}

impl CountryRowModel {
    pub fn new(country_code: &str, display_name: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
            display_name: display_name.to_string(),
            feature: ServerFeature::Standard,
            connected: false,
            under_maintenance: false,
            background: Color::ROW_BG,
            cell_state: CellState::Collapsed,
            connect_action: None,
            expand_action: None,
            events: EventBus::new(),
        }
    }

    pub fn with_feature(mut self, feature: ServerFeature) -> Self {
        self.feature = feature;
        self
    }

    pub fn with_maintenance(mut self, under_maintenance: bool) -> Self {
        self.under_maintenance = under_maintenance;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the handler invoked by the row's connect button.
    pub fn on_connect(&mut self, f: impl Fn() + Send + Sync + 'static) {
        self.connect_action = Some(RowAction::new(f));
    }

    /// Set the handler invoked by the row surface and expand button.
    pub fn on_expand(&mut self, f: impl Fn() + Send + Sync + 'static) {
        self.expand_action = Some(RowAction::new(f));
    }

    pub fn connect_action(&self) -> Option<RowAction> {
        self.connect_action.clone()
    }

    pub fn expand_action(&self) -> Option<RowAction> {
        self.expand_action.clone()
    }

    pub fn keyword_tooltip(&self) -> Option<&'static str> {
        self.feature.tooltip()
    }

    /// Handle to the model's event bus, for rows to subscribe through.
    pub fn events(&self) -> EventBus<RowEvent> {
        self.events.clone()
    }

    pub fn subscribe(&self) -> (Subscription<RowEvent>, Receiver<RowEvent>) {
        self.events.subscribe()
    }

    /// Update the connection flag and notify subscribers.
    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            self.connected = connected;
            self.events.publish(RowEvent::ConnectionChanged(connected));
        }
    }

    /// Update the expansion state and notify subscribers.
    pub fn set_cell_state(&mut self, state: CellState) {
        if self.cell_state != state {
            self.cell_state = state;
            self.events.publish(RowEvent::CellStateChanged(state));
        }
    }
}
