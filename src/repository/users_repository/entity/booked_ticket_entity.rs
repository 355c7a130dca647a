use crate::repository::BookedTicket;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedTicketEntity {
    pub movie_name: String,
    #[serde(default)]
    pub certification: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub language: String,
    pub theatre_name: String,
    #[serde(default)]
    pub theatre_location: String,
    pub show_date: String,
    pub show_time: String,
    pub total_amount: f64,
    #[serde(default)]
    pub selected_seats: Vec<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
    pub booking_date: DateTime,
}

impl From<&BookedTicket> for BookedTicketEntity {
    fn from(value: &BookedTicket) -> Self {
        Self {
            movie_name: value.movie_name.clone(),
            certification: value.certification.clone(),
            genres: value.genres.clone(),
            language: value.language.clone(),
            theatre_name: value.theatre_name.clone(),
            theatre_location: value.theatre_location.clone(),
            show_date: value.show_date.clone(),
            show_time: value.show_time.clone(),
            total_amount: value.total_amount,
            selected_seats: value.selected_seats.clone(),
            payment_id: value.payment_id.clone(),
            booking_date: value.booking_date.into(),
        }
    }
}
