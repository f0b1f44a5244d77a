pub mod header;
pub mod navbar;

pub use header::Header;
