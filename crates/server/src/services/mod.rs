//! Business services for the FriendGraph server.

pub mod friendship;

pub use friendship::{FriendshipError, FriendshipService};
