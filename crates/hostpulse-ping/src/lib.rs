//! Ping service: static liveness payloads.
//!
//! - `GET /`     : `{"status":"ok","service":"ping-service"}`
//! - `GET /ping` : `{"response":"pong"}`

pub mod config;
pub mod handlers;
pub mod router;

pub const SERVICE_NAME: &str = "ping-service";
