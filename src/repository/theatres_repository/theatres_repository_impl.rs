use super::{
    entity::{
        DateEntryInsertEntity, ShowTimeEntryInsertEntity, TheatreFindEntity, TheatreInsertEntity,
    },
    Theatre, TheatresRepository,
};
use crate::{dto::input, repository::Error};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};

const THEATRES: &str = "theatres";
const INDEX_NAME_UNIQUE_NAME: &str = "unique_index_name";
const INDEX_NAME_LOCATION: &str = "index_location";

pub struct TheatresRepositoryImpl {
    database: Database,
}

impl TheatresRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.contains(&THEATRES.to_string()) {
            tracing::debug!(collection = THEATRES, "creating collection");
            database.create_collection(THEATRES).await?;
        }

        let collection = database.collection(THEATRES);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_NAME.to_string()) {
            Self::create_unique_name_index(&collection).await?;
            tracing::debug!(
                collection = THEATRES,
                index = INDEX_NAME_UNIQUE_NAME,
                "created index"
            );
        }
        if !index_names.contains(&INDEX_NAME_LOCATION.to_string()) {
            Self::create_location_index(&collection).await?;
            tracing::debug!(
                collection = THEATRES,
                index = INDEX_NAME_LOCATION,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_unique_name_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "name": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_NAME.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    async fn create_location_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "location": 1,
                "name": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_LOCATION.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn show_time_entity<'a>(
        key: &'a input::ShowTimeKey,
        seats: &'a [String],
    ) -> ShowTimeEntryInsertEntity<'a> {
        ShowTimeEntryInsertEntity {
            time: &key.time,
            movie_name: &key.movie_name,
            booked_seats: seats,
        }
    }

    fn date_entity<'a>(
        key: &'a input::ShowTimeKey,
        seats: &'a [String],
    ) -> DateEntryInsertEntity<'a> {
        DateEntryInsertEntity {
            date: &key.date,
            seats: [],
            show_times: [Self::show_time_entity(key, seats)],
        }
    }
}

#[async_trait]
impl TheatresRepository for TheatresRepositoryImpl {
    async fn find_by_name(&self, name: &str) -> Result<Option<Theatre>, Error> {
        let theatre = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find_one(doc! {
                "name": name,
            })
            .await?
            .map(Theatre::from);

        Ok(theatre)
    }

    async fn find_by_name_and_location(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<Theatre>, Error> {
        let theatre = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find_one(doc! {
                "name": name,
                "location": location,
            })
            .await?
            .map(Theatre::from);

        Ok(theatre)
    }

    async fn find_many_by_location(&self, location: &str) -> Result<Vec<Theatre>, Error> {
        let theatres = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find(doc! {
                "location": location,
            })
            .sort(doc! {
                "name": 1,
            })
            .await?
            .map_ok(Theatre::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(theatres)
    }

    async fn insert(
        &self,
        key: &input::ShowTimeKey,
        address: &str,
        location: &str,
        seats: &[String],
    ) -> Result<(), Error> {
        let insert_entity = TheatreInsertEntity {
            name: &key.theatre_name,
            address,
            location,
            distance: Theatre::DEFAULT_DISTANCE,
            is_full: false,
            is_empty: false,
            dates: [Self::date_entity(key, seats)],
        };

        self.database
            .collection::<TheatreInsertEntity>(THEATRES)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        Ok(())
    }

    async fn add_booked_seats(
        &self,
        key: &input::ShowTimeKey,
        seats: &[String],
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(THEATRES)
            .update_one(
                doc! {
                    "name": key.theatre_name.as_str(),
                    "dates": {
                        "$elemMatch": {
                            "date": key.date.as_str(),
                            "showTimes": {
                                "$elemMatch": {
                                    "time": key.time.as_str(),
                                    "movieName": key.movie_name.as_str(),
                                }
                            }
                        }
                    }
                },
                doc! {
                    "$addToSet": {
                        "dates.$[date].showTimes.$[showTime].bookedSeats": {
                            "$each": seats,
                        }
                    }
                },
            )
            .array_filters(vec![
                doc! {
                    "date.date": key.date.as_str(),
                },
                doc! {
                    "showTime.time": key.time.as_str(),
                    "showTime.movieName": key.movie_name.as_str(),
                },
            ])
            .await?;

        // already booked seats leave the document unmodified but matched
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn push_show_time(
        &self,
        key: &input::ShowTimeKey,
        seats: &[String],
    ) -> Result<(), Error> {
        let show_time = bson::to_bson(&Self::show_time_entity(key, seats))?;

        let update_result = self
            .database
            .collection::<Document>(THEATRES)
            .update_one(
                doc! {
                    "name": key.theatre_name.as_str(),
                    "dates": {
                        "$elemMatch": {
                            "date": key.date.as_str(),
                            "showTimes": {
                                "$not": {
                                    "$elemMatch": {
                                        "time": key.time.as_str(),
                                        "movieName": key.movie_name.as_str(),
                                    }
                                }
                            }
                        }
                    }
                },
                doc! {
                    "$push": {
                        "dates.$.showTimes": show_time,
                    }
                },
            )
            .await?;

        match update_result.modified_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn push_date(&self, key: &input::ShowTimeKey, seats: &[String]) -> Result<(), Error> {
        let date = bson::to_bson(&Self::date_entity(key, seats))?;

        let update_result = self
            .database
            .collection::<Document>(THEATRES)
            .update_one(
                doc! {
                    "name": key.theatre_name.as_str(),
                    "dates.date": {
                        "$ne": key.date.as_str(),
                    }
                },
                doc! {
                    "$push": {
                        "dates": date,
                    }
                },
            )
            .await?;

        match update_result.modified_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
