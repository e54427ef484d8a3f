use mongodb::bson;
use mongodb::error::Error as MongoError;
use thiserror::Error;
use bson::ser::Error as BsonError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),

    #[error("Serialization error")]
    SerializationError(#[from] BsonError),
}

// ----------------------------- TESTS --------------------------------
