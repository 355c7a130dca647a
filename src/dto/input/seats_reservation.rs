use super::{validation, ShowTimeKey};
use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatsReservation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub selected_seats: Option<Vec<String>>,
    pub show_date: Option<String>,
    pub show_time: Option<String>,
    pub movie_name: Option<String>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidSeatsReservation {
    pub key: ShowTimeKey,
    pub address: String,
    pub location: String,
    /// Unique seat codes in submission order
    pub selected_seats: Vec<String>,
    pub payment_id: Option<String>,
}

impl TryFrom<SeatsReservation> for ValidSeatsReservation {
    type Error = Error;

    fn try_from(value: SeatsReservation) -> Result<Self, Self::Error> {
        let theatre_name = validation::required(value.name, "name is required")?;
        let address = validation::required(value.address, "address is required")?;
        let location = validation::required(value.location, "location is required")?;
        let selected_seats =
            validation::seat_codes(value.selected_seats, "selectedSeats is required")?;
        let date = validation::show_date(value.show_date, "showDate is required")?;
        let time = validation::required(value.show_time, "showTime is required")?;
        let movie_name = validation::required(value.movie_name, "movieName is required")?;

        Ok(Self {
            key: ShowTimeKey {
                theatre_name,
                date,
                time,
                movie_name,
            },
            address,
            location,
            selected_seats,
            payment_id: value.payment_id.filter(|payment_id| !payment_id.is_empty()),
        })
    }
}
