//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! store/storage/api layers. It implements the event-driven architecture that
//! powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Keys / Web results → Events → Event Handler → Store Operations → Actions → Side Effects
//!                                    ↑                                          ↓
//!                                    └──────────── FetchCompleted ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, OverlayState};
