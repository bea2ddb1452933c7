pub mod analyze;
pub mod extract;
pub mod help;
pub mod result;

#[allow(unused_imports)]
pub use result::CommandResult;
