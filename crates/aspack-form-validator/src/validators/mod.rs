//! Built-in rule predicates

pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;
pub mod type_check;

pub use length::{max_length, min_length};
pub use numeric::{max, min};
pub use pattern::pattern;
pub use required::required;
pub use type_check::type_of;
