use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;

use crate::api::state::AppState;
use crate::domain::admin::model::AdminReceive;
use crate::domain::admin::repository::AdminRepository;
use crate::infrastructure::mongodb::admin_repository::MongoAdminRepository;

pub async fn create_admin(
    state: web::Data<AppState>,
    admin: web::Json<AdminReceive>
) -> impl Responder {
    let admin_repo = MongoAdminRepository::new(&state.db);

    match admin_repo.create_admin(admin.into_inner()).await {
        Ok(_) => HttpResponse::Created().json(serde_json::json!({
            "mensaje": "Administrador creado correctamente"
        })),
        Err(e) => {
            log::error!("Failed to create Administrador: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "mensaje": "Ocurrió un error al crear un Administrador"
            }))
        }
    }
}

pub async fn get_all_admins(
    state: web::Data<AppState>
) -> impl Responder {
    let admin_repo = MongoAdminRepository::new(&state.db);

    match admin_repo.get_all_admins().await {
        Ok(admins) => {
            if admins.is_empty() {
                HttpResponse::Ok().json(serde_json::json!({
                    "mensaje": "No hay administradores almacenados"
                }))
            } else {
                HttpResponse::Ok().json(serde_json::json!({
                    "mensaje": "Se encontraron Administradores almacenados",
                    "lista": admins
                }))
            }
        },
        Err(e) => {
            log::error!("Failed to list Administradores: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al obtener los Administradores"
            }))
        }
    }
}

pub async fn delete_admin(
    state: web::Data<AppState>,
    id: web::Path<String>
) -> impl Responder {
    let admin_repo = MongoAdminRepository::new(&state.db);

    // A malformed id and an unknown id answer with the same envelope
    let admin_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(_) => return delete_admin_error(),
    };

    match admin_repo.delete_admin(admin_id).await {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Administrador eliminado exitosamente"
        })),
        Ok(None) => delete_admin_error(),
        Err(e) => {
            log::error!("Failed to delete Administrador: {}", e);
            delete_admin_error()
        }
    }
}

fn delete_admin_error() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "mensaje": "Ocurrió un error al eliminar Administrador"
    }))
}
