use super::validation;
use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AddBooking {
    pub email: Option<String>,
    pub booking: Option<Booking>,
}

///
/// Denormalized copy of a completed purchase as sent by the client
/// after the payment provider confirmed it
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub movie_name: Option<String>,
    pub certification: Option<String>,
    pub genres: Option<Vec<String>>,
    pub language: Option<String>,
    pub theatre_name: Option<String>,
    pub theatre_location: Option<String>,
    pub show_date: Option<String>,
    pub show_time: Option<String>,
    pub total_amount: Option<f64>,
    pub selected_seats: Option<Vec<String>>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidAddBooking {
    pub email: String,
    pub booking: ValidBooking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
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
}

impl TryFrom<AddBooking> for ValidAddBooking {
    type Error = Error;

    fn try_from(value: AddBooking) -> Result<Self, Self::Error> {
        let email = validation::required(value.email, "email is required")?;
        let booking = value
            .booking
            .ok_or(Error::Validation("booking is required"))?
            .try_into()?;

        Ok(Self { email, booking })
    }
}

impl TryFrom<Booking> for ValidBooking {
    type Error = Error;

    fn try_from(value: Booking) -> Result<Self, Self::Error> {
        let movie_name = validation::required(value.movie_name, "booking.movieName is required")?;
        let theatre_name =
            validation::required(value.theatre_name, "booking.theatreName is required")?;
        let show_date = validation::show_date(value.show_date, "booking.showDate is required")?;
        let show_time = validation::required(value.show_time, "booking.showTime is required")?;
        let selected_seats =
            validation::seat_codes(value.selected_seats, "booking.selectedSeats is required")?;

        let total_amount = value
            .total_amount
            .ok_or(Error::Validation("booking.totalAmount is required"))?;
        if !total_amount.is_finite() || total_amount < 0.0 {
            return Err(Error::Validation(
                "booking.totalAmount must be a non-negative number",
            ));
        }

        Ok(Self {
            movie_name,
            certification: value.certification.unwrap_or_default(),
            genres: value.genres.unwrap_or_default(),
            language: value.language.unwrap_or_default(),
            theatre_name,
            theatre_location: value.theatre_location.unwrap_or_default(),
            show_date,
            show_time,
            total_amount,
            selected_seats,
            payment_id: value.payment_id.filter(|payment_id| !payment_id.is_empty()),
        })
    }
}
