mod cli;
mod error;
mod mode;
mod pitch;
mod scale;

pub use cli::*;
pub use error::ScaleError;
pub use mode::*;
pub use pitch::*;
pub use scale::*;
