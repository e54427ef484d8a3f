pub mod admin_handlers;
pub mod mascota_handlers;
pub mod usuario_handlers;
