//! checkip-agent: dynamic DNS update agent
//!
//! A library for discovering the public IPv4 address over HTTP and
//! notifying an external service when it changes.

pub mod agent;
pub mod config;
pub mod resolver;
pub mod transport;
pub mod webhook;
