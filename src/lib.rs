//! Prolog Assist - relay and conversation client for the Prolog Debugging Assistant
//!
//! The relay exposes `POST /api/chat`, forwards each query to the configured
//! assistant backend and normalizes its answer. The conversation controller
//! keeps a client-side transcript and talks to the relay.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
