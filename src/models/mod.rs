mod lenient;
mod message;
mod plant;

pub use message::*;
pub use plant::*;
