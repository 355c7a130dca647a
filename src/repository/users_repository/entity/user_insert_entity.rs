use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInsertEntity<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub seats_booked: [(); 0],
}
