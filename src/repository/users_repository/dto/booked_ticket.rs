use crate::repository::users_repository::entity::BookedTicketEntity;
use time::OffsetDateTime;

///
/// Single completed purchase in the user's ledger
///
#[derive(Debug, Clone, PartialEq)]
pub struct BookedTicket {
    pub movie_name: String,
    pub certification: String,
    pub genres: Vec<String>,
    pub language: String,
    pub theatre_name: String,
    pub theatre_location: String,
    pub show_date: String,
    pub show_time: String,
    pub total_amount: f64,
    pub selected_seats: Vec<String>,
    pub payment_id: Option<String>,
    pub booking_date: OffsetDateTime,
}

impl From<BookedTicketEntity> for BookedTicket {
    fn from(value: BookedTicketEntity) -> Self {
        Self {
            movie_name: value.movie_name,
            certification: value.certification,
            genres: value.genres,
            language: value.language,
            theatre_name: value.theatre_name,
            theatre_location: value.theatre_location,
            show_date: value.show_date,
            show_time: value.show_time,
            total_amount: value.total_amount,
            selected_seats: value.selected_seats,
            payment_id: value.payment_id,
            booking_date: value.booking_date.into(),
        }
    }
}
