pub mod catalog;
pub mod entities;
pub mod requests;
pub mod responses;

pub use catalog::codes;
