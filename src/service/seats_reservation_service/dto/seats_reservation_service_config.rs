pub struct SeatsReservationServiceConfig {
    /// how many times the find-or-create chain is walked before giving up
    pub max_rounds: u32,
}
