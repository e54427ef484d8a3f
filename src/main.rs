use mascotas_service::{api::state::AppState, infrastructure::database::mongo_context::MongoContext, routes::{admin_routes, mascota_routes, usuario_routes}, utils::config::AppConfig};
use actix_web::{get, web, App, HttpServer, Responder};


#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the Adopciones API. Use the /mascotas endpoint to list the pets up for adoption."
}

#[tokio::main]
async fn main() -> std::io::Result<()> {

    let config = AppConfig::global();

    // The config loads .env first, so a RUST_LOG set there reaches the logger
    env_logger::init();

    let mongo_context = match MongoContext::init(&config.database_url, "adopciones").await {
        Ok(context) => {
            println!("Connected to MongoDB successfully.");
            context
        },
        Err(e) => {
            log::error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    println!("🚀 Server running at http://{}", config.server_addr);

    let mongo_data = web::Data::new(mongo_context);

    let app_state = AppState { db: mongo_data };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(admin_routes)
            .configure(mascota_routes)
            .configure(usuario_routes)
            .service(entry_point)
    })
    .bind(config.server_addr.as_str())?
    .run()
    .await
}
