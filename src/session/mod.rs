//! Quiz session module

mod machine;
mod summary;


pub use machine::*;
pub use summary::*;
