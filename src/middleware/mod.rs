//! Middleware layers applied by the router

pub mod cors;
