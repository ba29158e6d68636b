pub mod signals;
pub mod volume;

pub use signals::*;
pub use volume::*;
