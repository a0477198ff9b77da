pub mod entities;

pub use entities::{MenuItem, SIDEBAR_MENU};
