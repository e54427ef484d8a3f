pub mod database;
pub mod mongodb;

pub use database::mongo_context;
pub use self::mongodb::{admin_repository, mascota_repository, usuario_repository};
