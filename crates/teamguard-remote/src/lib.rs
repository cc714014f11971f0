//! Remote roster access for teamguard.
//!
//! Wraps the Heroku Platform API (teams and enterprise accounts) behind the
//! [`MembershipApi`] trait: paginated roster fetch, targeted member lookup,
//! and membership revocation, with a typed error taxonomy and bounded retry.
//!
//! Page parsing and merging are pure functions (see [`page`]); only
//! [`HerokuClient`] touches the network.

#![forbid(unsafe_code)]

pub mod page;

mod api;
mod client;
mod error;

pub use api::MembershipApi;
pub use client::{ClientConfig, HerokuClient, DEFAULT_API_URL};
pub use error::RemoteError;
