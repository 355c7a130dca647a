use super::{
    entity::{BookedTicketEntity, UserFindEntity, UserInsertEntity},
    BookedTicket, UsersRepository,
};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_EMAIL: &str = "unique_index_email";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.contains(&USERS.to_string()) {
            tracing::debug!(collection = USERS, "creating collection");
            database.create_collection(USERS).await?;
        }

        let collection = database.collection(USERS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_EMAIL.to_string()) {
            Self::create_unique_email_index(&collection).await?;
            tracing::debug!(
                collection = USERS,
                index = INDEX_NAME_UNIQUE_EMAIL,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_unique_email_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "email": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_EMAIL.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(&self, email: &str, name: &str) -> Result<(), Error> {
        let insert_entity = UserInsertEntity {
            email,
            name,
            seats_booked: [],
        };

        self.database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        Ok(())
    }

    async fn find_booked_tickets(&self, email: &str) -> Result<Option<Vec<BookedTicket>>, Error> {
        let tickets = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "email": email,
            })
            .projection(doc! {
                "seatsBooked": 1,
            })
            .await?
            .map(|user| {
                user.seats_booked
                    .into_iter()
                    .map(BookedTicket::from)
                    .collect()
            });

        Ok(tickets)
    }

    async fn push_booked_ticket(
        &self,
        email: &str,
        ticket: &BookedTicket,
    ) -> Result<Vec<BookedTicket>, Error> {
        let ticket = bson::to_bson(&BookedTicketEntity::from(ticket))?;

        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one_and_update(
                doc! {
                    "email": email,
                },
                doc! {
                    "$push": {
                        "seatsBooked": ticket,
                    }
                },
            )
            .projection(doc! {
                "seatsBooked": 1,
            })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(Error::NoDocumentUpdated)?;

        let tickets = user
            .seats_booked
            .into_iter()
            .map(BookedTicket::from)
            .collect();

        Ok(tickets)
    }

    async fn find_all_booked_tickets(&self) -> Result<Vec<BookedTicket>, Error> {
        let pipeline = vec![
            doc! {
                "$unwind": "$seatsBooked",
            },
            doc! {
                "$replaceRoot": {
                    "newRoot": "$seatsBooked",
                }
            },
        ];

        let documents = self
            .database
            .collection::<Document>(USERS)
            .aggregate(pipeline)
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        let mut tickets = Vec::with_capacity(documents.len());
        for document in documents {
            let entity = bson::from_document::<BookedTicketEntity>(document)?;
            tickets.push(BookedTicket::from(entity));
        }

        Ok(tickets)
    }
}
