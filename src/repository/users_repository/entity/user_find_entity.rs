use super::BookedTicketEntity;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFindEntity {
    #[serde(default)]
    pub seats_booked: Vec<BookedTicketEntity>,
}
