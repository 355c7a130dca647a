use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: String,
    pub distance: String,
    pub is_full: bool,
    pub is_empty: bool,
    pub dates: Vec<DateEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntry {
    pub date: String,
    pub seats: Vec<String>,
    pub show_times: Vec<ShowTimeEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTimeEntry {
    pub time: String,
    pub movie_name: String,
    pub booked_seats: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CinemaVerification {
    pub exists: bool,
    pub data: Option<Theatre>,
}

impl From<repository::Theatre> for Theatre {
    fn from(value: repository::Theatre) -> Self {
        Self {
            id: value.id.to_hex(),
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

impl From<repository::DateEntry> for DateEntry {
    fn from(value: repository::DateEntry) -> Self {
        Self {
            date: value.date,
            seats: value.seats,
            show_times: value.show_times.into_iter().map(ShowTimeEntry::from).collect(),
        }
    }
}

impl From<repository::ShowTimeEntry> for ShowTimeEntry {
    fn from(value: repository::ShowTimeEntry) -> Self {
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
    use bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn theatre_json_serialize_camel_case() {
        let id = ObjectId::new();
        let theatre = repository::Theatre {
            id,
            name: "PVR Saket".to_string(),
            address: "Addr".to_string(),
            location: "Delhi-NCR".to_string(),
            distance: repository::Theatre::DEFAULT_DISTANCE.to_string(),
            is_full: false,
            is_empty: true,
            dates: vec![repository::DateEntry {
                date: "01-06-2025".to_string(),
                seats: Vec::new(),
                show_times: vec![repository::ShowTimeEntry {
                    time: "18:00".to_string(),
                    movie_name: "Inception".to_string(),
                    booked_seats: vec!["A1".to_string()],
                }],
            }],
        };

        let json = serde_json::to_value(Theatre::from(theatre)).unwrap();

        assert_eq!(
            json,
            json!({
                "_id": id.to_hex(),
                "name": "PVR Saket",
                "address": "Addr",
                "location": "Delhi-NCR",
                "distance": "N/A",
                "isFull": false,
                "isEmpty": true,
                "dates": [{
                    "date": "01-06-2025",
                    "seats": [],
                    "showTimes": [{
                        "time": "18:00",
                        "movieName": "Inception",
                        "bookedSeats": ["A1"],
                    }],
                }],
            })
        );
    }
}
