mod booked_ticket;

pub use booked_ticket::*;
