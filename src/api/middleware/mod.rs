//! HTTP middleware for request admission control.

pub mod rate_limit;
