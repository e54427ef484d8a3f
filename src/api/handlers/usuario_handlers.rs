use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;

use crate::api::state::AppState;
use crate::domain::usuario::model::{UsuarioReceive, UsuarioUpdate};
use crate::domain::usuario::repository::UsuarioRepository;
use crate::infrastructure::mongodb::usuario_repository::MongoUsuarioRepository;

pub async fn create_usuario(
    state: web::Data<AppState>,
    usuario: web::Json<UsuarioReceive>
) -> impl Responder {
    let usuario_repo = MongoUsuarioRepository::new(&state.db);

    match usuario_repo.create_usuario(usuario.into_inner()).await {
        Ok(usuario) => HttpResponse::Created().json(serde_json::json!({
            "mensaje": "Usuario creado correctamente",
            "datos": usuario
        })),
        Err(e) => {
            log::error!("Failed to create Usuario: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "mensaje": "Ocurrió un error al crear un usuario"
            }))
        }
    }
}

pub async fn get_all_usuarios(
    state: web::Data<AppState>
) -> impl Responder {
    let usuario_repo = MongoUsuarioRepository::new(&state.db);

    match usuario_repo.get_all_usuarios().await {
        Ok(usuarios) => {
            if usuarios.is_empty() {
                HttpResponse::Ok().json(serde_json::json!({
                    "mensaje": "No hay usuarios almacenados"
                }))
            } else {
                HttpResponse::Ok().json(serde_json::json!({
                    "mensaje": "Se encontraron usuarios almacenados",
                    "datos": usuarios
                }))
            }
        },
        Err(e) => {
            log::error!("Failed to list Usuarios: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "mensaje": "Ocurrió un error al obtener los usuarios"
            }))
        }
    }
}

pub async fn update_usuario(
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<UsuarioUpdate>
) -> impl Responder {
    let usuario_repo = MongoUsuarioRepository::new(&state.db);

    let usuario_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(_) => return update_usuario_error(),
    };

    match usuario_repo.update_usuario(usuario_id, data.into_inner()).await {
        Ok(Some(usuario)) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Usuario actualizado correctamente",
            "datos": usuario
        })),
        Ok(None) => usuario_not_found(),
        Err(e) => {
            log::error!("Failed to update Usuario: {}", e);
            update_usuario_error()
        }
    }
}

pub async fn delete_usuario(
    state: web::Data<AppState>,
    id: web::Path<String>
) -> impl Responder {
    let usuario_repo = MongoUsuarioRepository::new(&state.db);

    let usuario_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(_) => return delete_usuario_error(),
    };

    match usuario_repo.delete_usuario(usuario_id).await {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "mensaje": "Usuario eliminado exitosamente"
        })),
        Ok(None) => usuario_not_found(),
        Err(e) => {
            log::error!("Failed to delete Usuario: {}", e);
            delete_usuario_error()
        }
    }
}

fn usuario_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "mensaje": "Usuario no encontrado"
    }))
}

fn update_usuario_error() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "mensaje": "Ocurrió un error al actualizar el usuario"
    }))
}

fn delete_usuario_error() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "mensaje": "Ocurrió un error al eliminar el usuario"
    }))
}
