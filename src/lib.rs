pub mod args;
pub mod error;
pub mod model;
pub mod mvu;
pub mod repl;
pub mod view;

pub use error::ScorecardError;
