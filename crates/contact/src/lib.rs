mod controller;
mod error;
pub mod link;
pub mod message;
mod request;
mod settings;
mod surface;
mod transport;
mod types;

pub use controller::*;
pub use error::*;
pub use message::Messages;
pub use request::*;
pub use settings::*;
pub use surface::*;
pub use transport::*;
pub use types::*;
