mod theatre_find_entity;
mod theatre_insert_entity;

pub use theatre_find_entity::*;
pub use theatre_insert_entity::*;
