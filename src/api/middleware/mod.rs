//! Request middleware helpers

mod client_ip;

pub use client_ip::client_ip;
