use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::usuario::model::{Usuario, UsuarioReceive, UsuarioUpdate};
use crate::utils::errors::ApiError;

#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn create_usuario(&self, data: UsuarioReceive) -> Result<Usuario, ApiError>;
    async fn get_all_usuarios(&self) -> Result<Vec<Usuario>, ApiError>;
    async fn update_usuario(&self, id: ObjectId, data: UsuarioUpdate) -> Result<Option<Usuario>, ApiError>;
    async fn delete_usuario(&self, id: ObjectId) -> Result<Option<Usuario>, ApiError>;
}
