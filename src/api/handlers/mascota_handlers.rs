use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;

use crate::api::state::AppState;
use crate::domain::mascota::model::{MascotaReceive, MascotaUpdate};
use crate::domain::mascota::repository::MascotaRepository;
use crate::infrastructure::mongodb::mascota_repository::MongoMascotaRepository;

pub async fn create_mascota(
    state: web::Data<AppState>,
    mascota: web::Json<MascotaReceive>
) -> impl Responder {
    let mascota_repo = MongoMascotaRepository::new(&state.db);

    match mascota_repo.create_mascota(mascota.into_inner()).await {
        Ok(mascota) => HttpResponse::Created().json(serde_json::json!({
            "mensaje": "Mascota se agregó exitosamente",
            "mascota": mascota
        })),
        Err(e) => {
            log::error!("Failed to create Mascota: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al agregar la mascota"
            }))
        }
    }
}

pub async fn get_all_mascotas(
    state: web::Data<AppState>
) -> impl Responder {
    let mascota_repo = MongoMascotaRepository::new(&state.db);

    match mascota_repo.get_all_mascotas().await {
        Ok(mascotas) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Mascotas obtenidas exitosamente",
            "mascotas": mascotas
        })),
        Err(e) => {
            log::error!("Failed to list Mascotas: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al obtener las mascotas"
            }))
        }
    }
}

pub async fn update_mascota(
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<MascotaUpdate>
) -> impl Responder {
    let mascota_repo = MongoMascotaRepository::new(&state.db);

    // An id that does not parse cannot match any stored document
    let mascota_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(_) => return mascota_not_found(),
    };

    match mascota_repo.update_mascota(mascota_id, data.into_inner()).await {
        Ok(Some(mascota)) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Mascota actualizada exitosamente",
            "mascota": mascota
        })),
        Ok(None) => mascota_not_found(),
        Err(e) => {
            log::error!("Failed to update Mascota: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al actualizar la mascota"
            }))
        }
    }
}

pub async fn delete_mascota(
    state: web::Data<AppState>,
    id: web::Path<String>
) -> impl Responder {
    let mascota_repo = MongoMascotaRepository::new(&state.db);

    let mascota_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(_) => return mascota_not_found(),
    };

    match mascota_repo.delete_mascota(mascota_id).await {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Mascota eliminada correctamente"
        })),
        Ok(None) => mascota_not_found(),
        Err(e) => {
            log::error!("Failed to delete Mascota: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al eliminar la mascota"
            }))
        }
    }
}

fn mascota_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "mensaje": "Mascota no encontrada"
    }))
}
