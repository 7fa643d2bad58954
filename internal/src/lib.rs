//! # Internal Message Service
//!
//! Persistence-owning half of the two-tier message service pair. This crate
//! exposes a REST API via Axum for creating, updating, retrieving and deleting
//! messages, backed by PostgreSQL (Diesel) or an in-memory store.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`dto`]: Data Transfer Objects for API requests and responses
//! - [`entity`]: Stored domain model
//! - [`mapper`]: Explicit field-by-field DTO/entity mapping
//! - [`service`]: Generic CRUD service trait and the message implementation
//! - [`db`]: Repository pattern, storage backends and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod db;
pub mod dto;
pub mod entity;
pub mod http;
pub mod mapper;
pub mod service;
