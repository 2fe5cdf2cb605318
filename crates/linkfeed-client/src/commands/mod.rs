//! Command handlers consumed by the presentation layer.
//!
//! Each sub-module groups related commands by domain. Every command takes
//! the [`SharedState`](crate::state::SharedState), runs one store operation
//! to completion and emits the matching change event.

pub mod comments;
pub mod feed;
pub mod identity;
pub mod links;
pub mod premium;
pub mod settings;
