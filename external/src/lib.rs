//! # External Message Service
//!
//! Public-facing half of the two-tier message service pair. This crate exposes
//! the same REST API as the internal service but owns no storage: every
//! operation is validated here and then forwarded to the internal service over
//! HTTP.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`dto`]: Data Transfer Objects for API requests and responses
//! - [`client`]: Gateway trait and HTTP client for the internal service
//! - [`service`]: Validation and upstream orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod client;
pub mod dto;
pub mod http;
pub mod service;
