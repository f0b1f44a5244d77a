pub mod aggregate;
pub mod client;

pub use aggregate::{decode_feed, BlogPost};
pub use client::BlogClient;
