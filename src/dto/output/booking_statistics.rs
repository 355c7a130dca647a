use serde::Serialize;

///
/// Aggregate of the booking ledgers of all users
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatistics {
    pub total_bookings: usize,
    /// number of booked seats
    pub total_tickets: usize,
    pub total_revenue: f64,
    /// most booked movies first
    pub movies: Vec<MoviePopularity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePopularity {
    pub movie_name: String,
    pub bookings: usize,
    pub tickets: usize,
    pub revenue: f64,
}
