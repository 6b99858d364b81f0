pub mod cs;
pub mod error;
pub mod io;
pub mod math;

pub use cs::dynamic;
pub use error::{Error, Result};
