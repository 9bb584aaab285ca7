//! Global Logistics Solutions core - shared domain types.
//!
//! Types used by the site backend and its tests:
//! - typed record identifiers
//! - validated email addresses
//! - shipment status values
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP. This
//! keeps it lightweight and usable from any crate in the workspace.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, emails, and shipment statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
