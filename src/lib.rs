//! Core of a browser-resident employee-management application: an
//! in-process mock backend (in-memory resource store behind an HTTP-shaped
//! route table with simulated latency) and the role-based access gate that
//! decides which routes and menu links a signed-in principal can reach.
//! The view layer is a consumer of this crate, not part of it.

pub mod api;
pub mod auth;
pub mod boundary;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod store;
pub mod utils;

pub use boundary::{Envelope, MockApi};
pub use client::ApiClient;
pub use config::Config;
pub use error::ServiceError;
