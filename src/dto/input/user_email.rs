use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UserEmail {
    pub email: Option<String>,
}
