//! Lumen UI - Country List Widgets
//!
//! The country list of the Lumen VPN client as recyclable, immediate-mode
//! widgets. Rows bind to view-models owned by the list layer, follow their
//! state through an explicit event-bus subscription, and emit draw commands
//! instead of touching a surface.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 CountryList                    │
//! │  pointer dispatch, layout, row recycling       │
//! │                                                │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │ CountryRow   🇩🇪 Germany      [Connect] ▸ │  │
//! │  ├──────────────────────────────────────────┤  │
//! │  │ CountryRow   🇳🇱 Netherlands   (p2p)    ▸ │  │
//! │  ├──────────────────────────────────────────┤  │
//! │  │ CountryRow   🇫🇷 France        🔧         │  │
//! │  └──────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────┘
//!          ▲ bind / pump_events          │ draw
//!          │                             ▼
//!    CountryRowModel (EventBus)       Vec<DrawCmd>
//! ```

mod color;
mod draw;
mod list;
mod model;
mod observer;
mod prefill;
mod row;

pub use color::Color;
pub use draw::DrawCmd;
pub use list::CountryList;
pub use model::{CellState, CountryRowModel, RowAction, RowEvent, ServerFeature};
pub use observer::{EventBus, Subscription};
pub use prefill::PrefillInfo;
pub use row::{CountryRow, ROW_HEIGHT, RowClick};
