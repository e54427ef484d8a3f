pub mod admin_repository;
pub mod mascota_repository;
pub mod usuario_repository;
