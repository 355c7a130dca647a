use mongodb::error::{ErrorKind, WriteFailure};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("bson serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("bson deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Maps insert error so duplicate key is reported as [Error::InsertUniqueViolation]
    ///
    pub fn from_insert(err: mongodb::error::Error) -> Self {
        let ErrorKind::Write(ref write_failure) = *err.kind else {
            return Error::Mongo(err);
        };

        let WriteFailure::WriteError(write_error) = write_failure else {
            return Error::Mongo(err);
        };

        const DUPLICATE_KEY_CODE: i32 = 11000;
        match write_error.code == DUPLICATE_KEY_CODE {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }
}
