//! # linkfeed-shared
//!
//! Types shared by the store and the client: the local identity, the
//! subscription plan, id newtypes and a few small helpers.

pub mod constants;
pub mod domain;
pub mod error;
pub mod identity;
pub mod plan;
pub mod types;

pub use error::ValidationError;
pub use identity::Identity;
pub use plan::{Plan, ProFeature};
pub use types::{CommentId, ItemId, SortOption, Theme, UserId, VoteDirection};
