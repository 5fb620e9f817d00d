//! IBGE localities API client.

mod client;
mod dto;

pub use client::{IBGE_API_BASE, IbgeClient};
