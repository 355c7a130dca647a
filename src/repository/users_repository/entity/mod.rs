mod booked_ticket_entity;
mod user_find_entity;
mod user_insert_entity;

pub use booked_ticket_entity::*;
pub use user_find_entity::*;
pub use user_insert_entity::*;
