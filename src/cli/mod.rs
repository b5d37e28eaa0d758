pub mod content;
pub mod submit;

pub use submit::SubmitArgs;
