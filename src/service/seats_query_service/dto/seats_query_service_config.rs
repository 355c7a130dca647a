pub struct SeatsQueryServiceConfig {
    /// number of booked seats from which a showtime is reported as filling
    pub seats_load_threshold: usize,
}
