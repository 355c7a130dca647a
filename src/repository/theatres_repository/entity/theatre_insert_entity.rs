use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheatreInsertEntity<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub location: &'a str,
    pub distance: &'a str,
    pub is_full: bool,
    pub is_empty: bool,
    pub dates: [DateEntryInsertEntity<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntryInsertEntity<'a> {
    pub date: &'a str,
    pub seats: [(); 0],
    pub show_times: [ShowTimeEntryInsertEntity<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTimeEntryInsertEntity<'a> {
    pub time: &'a str,
    pub movie_name: &'a str,
    pub booked_seats: &'a [String],
}
