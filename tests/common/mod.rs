use actix_web::web;

use mascotas_service::api::state::AppState;
use mascotas_service::infrastructure::database::mongo_context::MongoContext;

const TEST_DB: &str = "adopciones_test";

const DEFAULT_TEST_URI: &str =
    "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000&connectTimeoutMS=2000";

// Each test binary touches its own collection, so binaries can run in
// parallel against the same test database.
pub async fn try_test_state() -> Option<web::Data<AppState>> {
    let uri = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| DEFAULT_TEST_URI.to_string());

    match MongoContext::init(&uri, TEST_DB).await {
        Ok(context) => Some(web::Data::new(AppState { db: web::Data::new(context) })),
        Err(_) => {
            println!("MongoDB not available, skipping test");
            None
        }
    }
}

pub async fn clear_collection(state: &web::Data<AppState>, name: &str) {
    state.db
        .collection::<mongodb::bson::Document>(name)
        .delete_many(mongodb::bson::doc! {})
        .await
        .expect("Failed to clear test collection");
}
