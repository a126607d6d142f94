//! Inbound adapters translating requests into page renders.

pub mod http;
