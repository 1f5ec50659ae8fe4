//! HTTP access to directory listings.

mod client;

pub use client::HttpClient;
