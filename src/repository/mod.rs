mod error;
mod theatres_repository;
mod users_repository;

pub use error::*;
pub use theatres_repository::*;
pub use users_repository::*;
