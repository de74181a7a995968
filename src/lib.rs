//! Client core of the Skyline subscription portal.
//!
//! This crate provides the session and reactive data-sync layer that sits between a portal
//! front end and the portal's REST backend: the authenticated session with its idle timeout,
//! a queue of transient notifications, a de-duplicating request cache for list reads, the
//! aggregated user-state store, and the settlement poller that follows a pending order until
//! it is paid, cancelled or completed.
//!
//! [`Portal`] wires all components together from a [`Config`].

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod notification;
pub mod portal;
pub mod session;
pub mod settlement;
pub mod store;
pub mod util;

pub use config::Config;
pub use error::Error;
pub use portal::Portal;
