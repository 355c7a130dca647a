mod booking;
mod cinema_lookup;
mod seats_reservation;
mod show_time_query;
mod user_email;
mod validation;

pub use booking::*;
pub use cinema_lookup::*;
pub use seats_reservation::*;
pub use show_time_query::*;
pub use user_email::*;

pub(crate) use validation::required;
