use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::admin::model::{Admin, AdminReceive};
use crate::utils::errors::ApiError;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, data: AdminReceive) -> Result<Admin, ApiError>;
    async fn get_all_admins(&self) -> Result<Vec<Admin>, ApiError>;
    async fn delete_admin(&self, id: ObjectId) -> Result<Option<Admin>, ApiError>;
}
