//! # linkfeed-store
//!
//! In-memory state for the Linkfeed application.
//!
//! The [`Store`] is the single owner of every posted link, the local
//! identity and the feed selection. All mutations go through its methods,
//! which keep the invariants (unique ids, vote ordering, selection never
//! pointing at a deleted link) in one place. The [`views`] module derives
//! display data from a slice of items without touching the store.

pub mod comments;
pub mod identity;
pub mod items;
pub mod models;
pub mod seed;
pub mod store;
pub mod views;

mod error;

pub use error::{Result, StoreError};
pub use models::*;
pub use store::Store;
