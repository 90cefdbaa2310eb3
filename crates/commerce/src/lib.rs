//! Upstream commerce integration.
//!
//! The storefront does not own product/checkout data for the hosted offering;
//! that lives in the third-party GHL commerce API. This crate holds the one
//! read call we proxy: a single authenticated GET, envelope unwrap included.

pub mod client;

pub use client::{CommerceClient, CommerceError, GHL_API_BASE};
