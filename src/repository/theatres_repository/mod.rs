mod dto;
mod entity;
mod theatres_repository;
mod theatres_repository_impl;
mod theatres_repository_memory;

pub use dto::*;
pub use theatres_repository::*;
pub use theatres_repository_impl::*;
pub use theatres_repository_memory::*;
