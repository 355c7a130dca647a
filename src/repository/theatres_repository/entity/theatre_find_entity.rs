use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheatreFindEntity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub is_full: bool,
    #[serde(default)]
    pub is_empty: bool,
    #[serde(default)]
    pub dates: Vec<DateEntryFindEntity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntryFindEntity {
    pub date: String,
    #[serde(default)]
    pub seats: Vec<String>,
    #[serde(default)]
    pub show_times: Vec<ShowTimeEntryFindEntity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTimeEntryFindEntity {
    pub time: String,
    pub movie_name: String,
    #[serde(default)]
    pub booked_seats: Vec<String>,
}
