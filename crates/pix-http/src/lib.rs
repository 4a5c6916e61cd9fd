//! pix-http - HTTP-backed implementation of the pixflow backend API.

mod api;
mod client;
mod endpoints;

pub use api::HttpPixApi;
pub use client::HttpClient;
