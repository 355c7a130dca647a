use super::validation;
use crate::error::Error;
use serde::Deserialize;

///
/// Raw query string of the seat lookup endpoints.
/// Fields are optional so a missing one is reported as a validation error
/// instead of a generic rejection.
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTimeQuery {
    pub theatre_name: Option<String>,
    pub date: Option<String>,
    pub show_time: Option<String>,
    pub movie_name: Option<String>,
}

///
/// Composite key of a single showtime's booked-seat set
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowTimeKey {
    pub theatre_name: String,
    pub date: String,
    pub time: String,
    pub movie_name: String,
}

impl TryFrom<ShowTimeQuery> for ShowTimeKey {
    type Error = Error;

    fn try_from(value: ShowTimeQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            theatre_name: validation::required(value.theatre_name, "theatreName is required")?,
            date: validation::required(value.date, "date is required")?,
            time: validation::required(value.show_time, "showTime is required")?,
            movie_name: validation::required(value.movie_name, "movieName is required")?,
        })
    }
}
