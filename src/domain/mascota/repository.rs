use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::mascota::model::{Mascota, MascotaReceive, MascotaUpdate};
use crate::utils::errors::ApiError;

#[async_trait]
pub trait MascotaRepository: Send + Sync {
    async fn create_mascota(&self, data: MascotaReceive) -> Result<Mascota, ApiError>;
    async fn get_all_mascotas(&self) -> Result<Vec<Mascota>, ApiError>;
    async fn update_mascota(&self, id: ObjectId, data: MascotaUpdate) -> Result<Option<Mascota>, ApiError>;
    async fn delete_mascota(&self, id: ObjectId) -> Result<Option<Mascota>, ApiError>;
}
