pub mod required;
pub mod specifier;

pub use required::*;
pub use specifier::*;
