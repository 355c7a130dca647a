use super::validation;
use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CinemaLookup {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaKey {
    pub name: String,
    pub location: String,
}

impl TryFrom<CinemaLookup> for CinemaKey {
    type Error = Error;

    fn try_from(value: CinemaLookup) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required(value.name, "name is required")?,
            location: validation::required(value.location, "location is required")?,
        })
    }
}
