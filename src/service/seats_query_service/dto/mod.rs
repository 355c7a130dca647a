mod seats_query_service_config;

pub use seats_query_service_config::*;
