use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSeats {
    pub booked_seats: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeatsCount {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SeatAvailability {
    pub count: usize,
    pub status: SeatAvailabilityStatus,
}

///
/// Load of a showtime as shown by the booking UI
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatAvailabilityStatus {
    /// booked seats are below the load threshold
    Available,
    /// booked seats reached the load threshold
    Filling,
}
