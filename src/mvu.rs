pub mod error;
pub mod round;
pub mod runtime;

pub use error::AppError;
pub use round::{AppModel, Effect, Msg, Screen, update};
pub use runtime::{Observer, Runtime};
