//! Wire types of the portal backend API.

pub mod api;
pub mod auth;
pub mod content;
pub mod order;
pub mod plan;
pub mod ticket;
pub mod user;
