//! Domain layer for the userdeck plugin.
//!
//! Core record types served by the API and the error type shared by every
//! layer, independent of Zellij-specific APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: Directory user record
//! - [`post`]: Post record
//! - [`sort`]: Sort key and order enums

pub mod error;
pub mod post;
pub mod sort;
pub mod user;

pub use error::{Result, UserdeckError};
pub use post::Post;
pub use sort::{SortKey, SortOrder};
pub use user::{Address, Company, Geo, User, UserId};
