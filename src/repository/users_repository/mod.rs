mod dto;
mod entity;
mod users_repository;
mod users_repository_impl;
mod users_repository_memory;

pub use dto::*;
pub use users_repository::*;
pub use users_repository_impl::*;
pub use users_repository_memory::*;
