use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub booking_date: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct Tickets {
    pub tickets: Vec<BookedTicket>,
}

impl From<repository::BookedTicket> for BookedTicket {
    fn from(value: repository::BookedTicket) -> Self {
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
            booking_date: value.booking_date,
        }
    }
}

impl From<Vec<repository::BookedTicket>> for Tickets {
    fn from(value: Vec<repository::BookedTicket>) -> Self {
        Self {
            tickets: value.into_iter().map(BookedTicket::from).collect(),
        }
    }
}
