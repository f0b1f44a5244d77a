pub mod pages;
pub mod visitor;
