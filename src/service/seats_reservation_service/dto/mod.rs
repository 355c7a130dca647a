mod seats_reservation_service_config;

pub use seats_reservation_service_config::*;
