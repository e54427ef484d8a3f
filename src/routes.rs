use actix_web::web;

use crate::api::handlers::admin_handlers::{create_admin, delete_admin, get_all_admins};
use crate::api::handlers::mascota_handlers::{create_mascota, delete_mascota, get_all_mascotas, update_mascota};
use crate::api::handlers::usuario_handlers::{create_usuario, delete_usuario, get_all_usuarios, update_usuario};

pub fn admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/crear")
            .route(web::post().to(create_admin))
    );

    cfg.service(
        web::resource("/admin/")
            .route(web::get().to(get_all_admins))
    );

    cfg.service(
        web::resource("/admin/eliminar/{id}")
            .route(web::delete().to(delete_admin))
    );
}

pub fn mascota_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mascotas")
            .route(web::post().to(create_mascota))
            .route(web::get().to(get_all_mascotas))
    );

    cfg.service(
        web::resource("/mascotas/{id}")
            .route(web::put().to(update_mascota))
            .route(web::delete().to(delete_mascota))
    );
}

pub fn usuario_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/usuarios/crear")
            .route(web::post().to(create_usuario))
    );

    cfg.service(
        web::resource("/usuarios/obtener")
            .route(web::get().to(get_all_usuarios))
    );

    cfg.service(
        web::resource("/usuarios/actualizar/{id}")
            .route(web::put().to(update_usuario))
    );

    cfg.service(
        web::resource("/usuarios/eliminar/{id}")
            .route(web::delete().to(delete_usuario))
    );
}
