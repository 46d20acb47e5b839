//! State containers for the dashboard.
//!
//! Each store is a plain struct that owns its data and exposes explicit
//! operations. Stores are owned by [`AppState`](crate::app::AppState) and
//! passed by reference to the handler and view-model code; nothing here is
//! global.
//!
//! Fetch operations are split in two halves: `load_*` marks the store as
//! loading and returns a [`FetchRequest`](crate::api::FetchRequest) for the
//! runtime to issue, and `receive_*` applies the response when the host
//! delivers it.
//!
//! # Modules
//!
//! - `request`: Request lifecycle variant shared by both stores
//! - `directory`: User collection, search/sort parameters, derived view
//! - `posts`: Posts of the selected user

pub mod directory;
pub mod posts;
pub mod request;

pub use directory::{filter_and_sort, matches_term, DirectoryStore};
pub use posts::PostStore;
pub use request::RequestStatus;
