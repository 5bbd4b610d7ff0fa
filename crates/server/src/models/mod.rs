//! Domain models for the FriendGraph server.

pub mod user;

pub use user::User;
