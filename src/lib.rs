//! `trackd` - In-memory issue tracker over HTTP.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`server`] - axum router, request handlers, error translation
//! - [`config`] - command-line configuration using clap
//! - [`logging`] - tracing initialization
//!
//! The data model, issue store, deportment catalog, and query engine live
//! in the `tracker-lib` crate.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod logging;
pub mod server;
