use actix_web::web::Data;

use crate::infrastructure::database::mongo_context::MongoContext;

#[derive(Clone)]
pub struct AppState {
    pub db: Data<MongoContext>
}
