//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through composable
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, fitting text)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnWidths, ControlsInfo, DashboardBody, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    KeyHint, LineStyle, OverlayLine, OverlayViewModel, UIViewModel,
};
