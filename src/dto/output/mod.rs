mod booked_ticket;
mod booking_statistics;
mod envelope;
mod seats;
mod theatre;

pub use booked_ticket::*;
pub use booking_statistics::*;
pub use envelope::*;
pub use seats::*;
pub use theatre::*;
