pub mod draft;
pub mod job;
mod macros;
pub mod validation;
