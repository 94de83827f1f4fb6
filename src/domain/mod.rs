pub mod icon;
pub mod link;

pub use icon::{Icon, IconError};
pub use link::is_embedded;
