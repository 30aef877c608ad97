//! Adapter implementations for the subscription form ports.

pub mod http;
pub mod memory;
