//! Country list row
//!
//! One row of the country list: flag, name, keyword badge, connect button,
//! expand chevron, maintenance wrench. Rows are recycled by the list, so
//! `bind` is idempotent and re-callable, and the event-bus subscription is
//! paired with attach/detach so a stale model can never reach a reused row.
//!
//! Affordance precedence: disabled > maintenance > connection > hover.
//! The keyword badge shares the connect button's slot: it is visible exactly
//! when the connect affordance is hidden and the row is not under maintenance
//! (the wrench takes the slot instead).

use crate::draw::DrawCmd;
use crate::model::{CellState, CountryRowModel, RowAction, RowEvent, ServerFeature};
use crate::observer::{EventBus, Subscription};
use crate::Color;
use crossbeam_channel::Receiver;
use tracing::trace;

/// Row height in pixels
pub const ROW_HEIGHT: f32 = 40.0;

/// Flag icon size
const FLAG_W: f32 = 24.0;
const FLAG_H: f32 = 16.0;
/// Connect button size
const CONNECT_W: f32 = 72.0;
const CONNECT_H: f32 = 24.0;
/// Trailing icon size (badge, wrench, chevron)
const ICON_W: f32 = 16.0;
const ICON_H: f32 = 16.0;
const PADDING: f32 = 12.0;

/// What a click on the row resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClick {
    /// Connect button
    Connect,
    /// Row surface or expand chevron
    Surface,
}

/// One recyclable country row.
pub struct CountryRow {
    bounds: (f32, f32, f32, f32),
    disabled: bool,
    hide_separator: bool,
    hovered: bool,
    attached: bool,

    // State copied from the bound model
    country_code: String,
    display_name: String,
    feature: ServerFeature,
    connected: bool,
    under_maintenance: bool,
    background: Color,
    cell_state: CellState,
    keyword_tooltip: Option<&'static str>,
    connect_action: Option<RowAction>,
    expand_action: Option<RowAction>,

    // Resolved visibility
    connect_visible: bool,
    badge_visible: bool,

    bus: Option<EventBus<RowEvent>>,
    subscription: Option<Subscription<RowEvent>>,
    events: Option<Receiver<RowEvent>>,

    dirty: bool,
}

impl CountryRow {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            bounds: (x, y, width, ROW_HEIGHT),
            disabled: false,
            hide_separator: false,
            hovered: false,
            attached: false,
            country_code: String::new(),
            display_name: String::new(),
            feature: ServerFeature::Standard,
            connected: false,
            under_maintenance: false,
            background: Color::ROW_BG,
            cell_state: CellState::Collapsed,
            keyword_tooltip: None,
            connect_action: None,
            expand_action: None,
            connect_visible: false,
            badge_visible: false,
            bus: None,
            subscription: None,
            events: None,
            dirty: true,
        }
    }

    /// Bind the row to a view-model. Idempotent; called again on every reuse.
    ///
    /// Drops any previous subscription before subscribing to the new model,
    /// so events published on an old model's bus no longer reach this row.
    pub fn bind(&mut self, model: &CountryRowModel) {
        // Release the old model first
        self.subscription = None;
        self.events = None;

        self.country_code = model.country_code.clone();
        self.display_name = model.display_name.clone();
        self.feature = model.feature;
        self.connected = model.connected;
        self.under_maintenance = model.under_maintenance;
        self.background = model.background;
        self.cell_state = model.cell_state;
        self.keyword_tooltip = model.keyword_tooltip();
        self.connect_action = model.connect_action();
        self.expand_action = model.expand_action();
        self.bus = Some(model.events());

        if self.attached {
            self.subscribe_events();
        }

        self.set_connect_hidden(!self.connected);
        self.dirty = true;
    }

    /// Register the row in the view hierarchy: enables pointer tracking and
    /// subscribes to the bound model's events.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.subscribe_events();
        self.dirty = true;
    }

    /// Unregister from the view hierarchy. Always drops the subscription and
    /// the hover state, whatever path led here.
    pub fn detach(&mut self) {
        self.attached = false;
        self.subscription = None;
        self.events = None;
        self.hovered = false;
        self.set_connect_hidden(!self.connected);
        self.dirty = true;
    }

    fn subscribe_events(&mut self) {
        if let Some(bus) = &self.bus {
            let (sub, rx) = bus.subscribe();
            self.subscription = Some(sub);
            self.events = Some(rx);
        }
    }

    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32) {
        self.bounds = (x, y, width, ROW_HEIGHT);
        self.dirty = true;
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        self.bounds
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.dirty = true;
    }

    pub fn set_hide_separator(&mut self, hide: bool) {
        self.hide_separator = hide;
        self.dirty = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn connect_visible(&self) -> bool {
        self.connect_visible
    }

    pub fn badge_visible(&self) -> bool {
        self.badge_visible
    }

    /// Pointer entered the row's tracking region.
    pub fn handle_mouse_enter(&mut self) {
        if self.disabled || !self.attached {
            return;
        }
        self.hovered = true;
        self.set_connect_hidden(false);
    }

    /// Pointer left the row's tracking region.
    pub fn handle_mouse_exit(&mut self) {
        if !self.attached {
            return;
        }
        self.hovered = false;
        self.set_connect_hidden(!self.connected);
    }

    /// Drain pending model events and re-apply the visual state they carry.
    pub fn pump_events(&mut self) {
        let pending: Vec<RowEvent> = match &self.events {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };

        for event in pending {
            trace!("row {}: {:?}", self.country_code, event);
            match event {
                RowEvent::ConnectionChanged(connected) => {
                    self.connected = connected;
                    let hide = if connected { false } else { !self.hovered };
                    self.set_connect_hidden(hide);
                }
                RowEvent::CellStateChanged(state) => {
                    self.cell_state = state;
                    self.dirty = true;
                }
            }
        }
    }

    /// Resolve a click at window coordinates. Invokes the model action wired
    /// at bind time and reports which control took the click.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<RowClick> {
        if self.disabled || !self.contains(x, y) {
            return None;
        }

        if self.connect_visible && self.connect_rect_contains(x, y) {
            if let Some(action) = &self.connect_action {
                action.invoke();
            }
            return Some(RowClick::Connect);
        }

        // Row surface and the expand chevron both toggle the cell state,
        // including for rows under maintenance.
        if let Some(action) = &self.expand_action {
            action.invoke();
        }
        Some(RowClick::Surface)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (bx, by, bw, bh) = self.bounds;
        x >= bx && x <= bx + bw && y >= by && y <= by + bh
    }

    fn connect_rect(&self) -> (f32, f32, f32, f32) {
        let (x, y, w, h) = self.bounds;
        (
            x + w - PADDING - ICON_W - 8.0 - CONNECT_W,
            y + (h - CONNECT_H) / 2.0,
            CONNECT_W,
            CONNECT_H,
        )
    }

    fn connect_rect_contains(&self, x: f32, y: f32) -> bool {
        let (cx, cy, cw, ch) = self.connect_rect();
        x >= cx && x <= cx + cw && y >= cy && y <= cy + ch
    }

    /// Central visibility resolution. Maintenance always wins over hover and
    /// connection; the badge takes the connect slot when it is free.
    fn set_connect_hidden(&mut self, hide: bool) {
        self.connect_visible = !(hide || self.under_maintenance);
        self.badge_visible =
            self.feature.rank() > 1 && !self.under_maintenance && !self.connect_visible;
        self.dirty = true;
    }

    /// Label for assistive technology: country name plus the keyword tooltip.
    pub fn accessibility_label(&self) -> String {
        match self.keyword_tooltip {
            Some(tooltip) => format!("{} {}", self.display_name, tooltip),
            None => self.display_name.clone(),
        }
    }

    /// Emit the row's draw commands.
    pub fn draw(&self) -> Vec<DrawCmd> {
        let (x, y, w, h) = self.bounds;
        let mut cmds = Vec::new();

        cmds.push(DrawCmd::Rect {
            x,
            y,
            w,
            h,
            color: self.background,
            corner_radius: 0.0,
        });

        // Flag, desaturated while under maintenance
        cmds.push(DrawCmd::Icon {
            x: x + PADDING,
            y: y + (h - FLAG_H) / 2.0,
            w: FLAG_W,
            h: FLAG_H,
            name: format!("{}-plain", self.country_code.to_lowercase()),
            grayscale: self.under_maintenance,
        });

        cmds.push(DrawCmd::Text {
            x: x + PADDING + FLAG_W + 8.0,
            y: y + h / 2.0 + 4.0,
            text: self.display_name.clone(),
            color: if self.disabled {
                Color::MAINTENANCE
            } else {
                Color::ROW_TEXT
            },
            size: 13.0,
        });

        let slot_x = x + w - PADDING - ICON_W - 8.0 - CONNECT_W;
        let icon_y = y + (h - ICON_H) / 2.0;

        if self.under_maintenance {
            cmds.push(DrawCmd::Icon {
                x: slot_x + CONNECT_W - ICON_W,
                y: icon_y,
                w: ICON_W,
                h: ICON_H,
                name: "wrench".to_string(),
                grayscale: false,
            });
        } else if self.connect_visible {
            let (cx, cy, cw, ch) = self.connect_rect();
            cmds.push(DrawCmd::Rect {
                x: cx,
                y: cy,
                w: cw,
                h: ch,
                color: if self.connected {
                    Color::ACCENT
                } else {
                    Color::ROW_SEPARATOR
                },
                corner_radius: 4.0,
            });
            cmds.push(DrawCmd::Text {
                x: cx + 10.0,
                y: cy + ch / 2.0 + 4.0,
                text: if self.connected {
                    "Disconnect".to_string()
                } else {
                    "Connect".to_string()
                },
                color: Color::ROW_TEXT,
                size: 11.0,
            });
        } else if self.badge_visible {
            if let Some(asset) = self.feature.badge_asset() {
                cmds.push(DrawCmd::Icon {
                    x: slot_x + CONNECT_W - ICON_W,
                    y: icon_y,
                    w: ICON_W,
                    h: ICON_H,
                    name: asset.to_string(),
                    grayscale: false,
                });
            }
        }

        // Expand chevron, hidden under maintenance
        if !self.under_maintenance {
            cmds.push(DrawCmd::Text {
                x: x + w - PADDING - ICON_W,
                y: y + h / 2.0 + 4.0,
                text: match self.cell_state {
                    CellState::Collapsed => "▸".to_string(),
                    CellState::Expanded => "▾".to_string(),
                },
                color: Color::ROW_TEXT,
                size: 12.0,
            });
        }

        if !self.hide_separator {
            cmds.push(DrawCmd::Rect {
                x,
                y: y + h - 1.0,
                w,
                h: 1.0,
                color: Color::ROW_SEPARATOR,
                corner_radius: 0.0,
            });
        }

        cmds
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
