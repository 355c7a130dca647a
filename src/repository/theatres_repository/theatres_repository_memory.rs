use super::{DateEntry, ShowTimeEntry, Theatre, TheatresRepository};
use crate::{dto::input, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

///
/// In-process inventory keyed by theatre name.
/// Every operation runs under a single lock, which gives it the same
/// atomicity as a conditional document update.
///
pub struct TheatresRepositoryMemory {
    theatres: Mutex<BTreeMap<String, Theatre>>,
}

impl TheatresRepositoryMemory {
    pub fn new() -> Self {
        let theatres = BTreeMap::new();
        let theatres = Mutex::new(theatres);

        Self { theatres }
    }

    fn show_time(key: &input::ShowTimeKey, seats: &[String]) -> ShowTimeEntry {
        ShowTimeEntry {
            time: key.time.clone(),
            movie_name: key.movie_name.clone(),
            booked_seats: seats.to_vec(),
        }
    }

    fn date(key: &input::ShowTimeKey, seats: &[String]) -> DateEntry {
        DateEntry {
            date: key.date.clone(),
            seats: Vec::new(),
            show_times: vec![Self::show_time(key, seats)],
        }
    }
}

impl Default for TheatresRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TheatresRepository for TheatresRepositoryMemory {
    async fn find_by_name(&self, name: &str) -> Result<Option<Theatre>, Error> {
        let theatres = self.theatres.lock().await;

        Ok(theatres.get(name).cloned())
    }

    async fn find_by_name_and_location(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<Theatre>, Error> {
        let theatres = self.theatres.lock().await;

        let theatre = theatres
            .get(name)
            .filter(|theatre| theatre.location == location)
            .cloned();

        Ok(theatre)
    }

    async fn find_many_by_location(&self, location: &str) -> Result<Vec<Theatre>, Error> {
        let theatres = self.theatres.lock().await;

        let theatres = theatres
            .values()
            .filter(|theatre| theatre.location == location)
            .cloned()
            .collect();

        Ok(theatres)
    }

    async fn insert(
        &self,
        key: &input::ShowTimeKey,
        address: &str,
        location: &str,
        seats: &[String],
    ) -> Result<(), Error> {
        let mut theatres = self.theatres.lock().await;

        if theatres.contains_key(&key.theatre_name) {
            return Err(Error::InsertUniqueViolation);
        }

        let theatre = Theatre {
            id: ObjectId::new(),
            name: key.theatre_name.clone(),
            address: address.to_string(),
            location: location.to_string(),
            distance: Theatre::DEFAULT_DISTANCE.to_string(),
            is_full: false,
            is_empty: false,
            dates: vec![Self::date(key, seats)],
        };
        theatres.insert(key.theatre_name.clone(), theatre);

        Ok(())
    }

    async fn add_booked_seats(
        &self,
        key: &input::ShowTimeKey,
        seats: &[String],
    ) -> Result<(), Error> {
        let mut theatres = self.theatres.lock().await;

        let theatre = theatres
            .get_mut(&key.theatre_name)
            .ok_or(Error::NoDocumentUpdated)?;

        let mut matched = false;
        let show_times = theatre
            .dates
            .iter_mut()
            .filter(|entry| entry.date == key.date)
            .flat_map(|entry| entry.show_times.iter_mut())
            .filter(|show_time| show_time.matches(&key.time, &key.movie_name));

        for show_time in show_times {
            matched = true;
            for seat in seats {
                if !show_time.booked_seats.contains(seat) {
                    show_time.booked_seats.push(seat.clone());
                }
            }
        }

        match matched {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn push_show_time(
        &self,
        key: &input::ShowTimeKey,
        seats: &[String],
    ) -> Result<(), Error> {
        let mut theatres = self.theatres.lock().await;

        let date = theatres
            .get_mut(&key.theatre_name)
            .and_then(|theatre| {
                theatre.dates.iter_mut().find(|entry| {
                    entry.date == key.date
                        && !entry
                            .show_times
                            .iter()
                            .any(|show_time| show_time.matches(&key.time, &key.movie_name))
                })
            })
            .ok_or(Error::NoDocumentUpdated)?;

        date.show_times.push(Self::show_time(key, seats));

        Ok(())
    }

    async fn push_date(&self, key: &input::ShowTimeKey, seats: &[String]) -> Result<(), Error> {
        let mut theatres = self.theatres.lock().await;

        let theatre = theatres
            .get_mut(&key.theatre_name)
            .filter(|theatre| !theatre.dates.iter().any(|entry| entry.date == key.date))
            .ok_or(Error::NoDocumentUpdated)?;

        theatre.dates.push(Self::date(key, seats));

        Ok(())
    }
}
