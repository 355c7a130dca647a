mod dto;
mod seats_query_service;
mod seats_query_service_impl;

pub use dto::SeatsQueryServiceConfig;
pub use seats_query_service::*;
pub use seats_query_service_impl::*;
