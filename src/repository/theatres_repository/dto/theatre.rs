use crate::repository::theatres_repository::entity::{
    DateEntryFindEntity, ShowTimeEntryFindEntity, TheatreFindEntity,
};
use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq)]
pub struct Theatre {
    pub id: ObjectId,
    pub name: String,
    pub address: String,
    pub location: String,
    pub distance: String,
    pub is_full: bool,
    pub is_empty: bool,
    pub dates: Vec<DateEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateEntry {
    pub date: String,
    /// Legacy flat seat set, superseded by per showtime tracking
    pub seats: Vec<String>,
    pub show_times: Vec<ShowTimeEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowTimeEntry {
    pub time: String,
    pub movie_name: String,
    pub booked_seats: Vec<String>,
}

impl Theatre {
    /// Distance label of theatres created by a reservation
    pub const DEFAULT_DISTANCE: &'static str = "N/A";

    ///
    /// Finds booked seats of the showtime.
    /// Dates and showtimes are scanned linearly, the first matching entry wins.
    ///
    pub fn booked_seats(&self, date: &str, time: &str, movie_name: &str) -> Option<&[String]> {
        self.dates
            .iter()
            .find(|entry| entry.date == date)?
            .show_times
            .iter()
            .find(|show_time| show_time.matches(time, movie_name))
            .map(|show_time| show_time.booked_seats.as_slice())
    }
}

impl ShowTimeEntry {
    pub fn matches(&self, time: &str, movie_name: &str) -> bool {
        self.time == time && self.movie_name == movie_name
    }
}

impl From<TheatreFindEntity> for Theatre {
    fn from(value: TheatreFindEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
            location: value.location,
            distance: value.distance,
            is_full: value.is_full,
            is_empty: value.is_empty,
            dates: value.dates.into_iter().map(DateEntry::from).collect(),
        }
    }
}

impl From<DateEntryFindEntity> for DateEntry {
    fn from(value: DateEntryFindEntity) -> Self {
        Self {
            date: value.date,
            seats: value.seats,
            show_times: value
                .show_times
                .into_iter()
                .map(ShowTimeEntry::from)
                .collect(),
        }
    }
}

impl From<ShowTimeEntryFindEntity> for ShowTimeEntry {
    fn from(value: ShowTimeEntryFindEntity) -> Self {
        Self {
            time: value.time,
            movie_name: value.movie_name,
            booked_seats: value.booked_seats,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn theatre() -> Theatre {
        Theatre {
            id: ObjectId::new(),
            name: "PVR Saket".to_string(),
            address: "Addr".to_string(),
            location: "Delhi-NCR".to_string(),
            distance: String::new(),
            is_full: false,
            is_empty: false,
            dates: vec![DateEntry {
                date: "01-06-2025".to_string(),
                seats: Vec::new(),
                show_times: vec![
                    ShowTimeEntry {
                        time: "18:00".to_string(),
                        movie_name: "Inception".to_string(),
                        booked_seats: vec!["A1".to_string(), "A2".to_string()],
                    },
                    ShowTimeEntry {
                        time: "18:00".to_string(),
                        movie_name: "Tenet".to_string(),
                        booked_seats: vec!["B7".to_string()],
                    },
                ],
            }],
        }
    }

    #[test]
    fn booked_seats_found() {
        let theatre = theatre();

        let seats = theatre.booked_seats("01-06-2025", "18:00", "Tenet").unwrap();

        assert_eq!(seats, &["B7".to_string()]);
    }

    #[test]
    fn booked_seats_date_not_exist() {
        let theatre = theatre();

        let seats = theatre.booked_seats("02-06-2025", "18:00", "Inception");

        assert!(seats.is_none());
    }

    #[test]
    fn booked_seats_movie_not_exist() {
        let theatre = theatre();

        let seats = theatre.booked_seats("01-06-2025", "18:00", "Dune");

        assert!(seats.is_none());
    }

    #[test]
    fn booked_seats_date_compared_as_string() {
        let theatre = theatre();

        let seats = theatre.booked_seats("1-6-2025", "18:00", "Inception");

        assert!(seats.is_none());
    }
}
