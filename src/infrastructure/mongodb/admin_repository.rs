use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::MongoContext;
use crate::domain::admin::repository::AdminRepository;
use crate::domain::admin::model::{Admin, AdminReceive};
use crate::utils::errors::ApiError;

pub struct MongoAdminRepository {
    admins: mongodb::Collection<Admin>
}

impl MongoAdminRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            admins: context.collection("admins")
        }
    }
}

#[async_trait]
impl AdminRepository for MongoAdminRepository {

    async fn create_admin(&self, data: AdminReceive) -> Result<Admin, ApiError> {
        let mut admin = Admin::new(data)?;

        let result = self.admins.insert_one(&admin).await?;
        admin.id = result.inserted_id.as_object_id();
        Ok(admin)
    }

    async fn get_all_admins(&self) -> Result<Vec<Admin>, ApiError> {
        let mut cursor = self.admins.find(doc! {}).await?;
        let mut admins = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(admin) => admins.push(admin),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(admins)
    }

    async fn delete_admin(&self, id: ObjectId) -> Result<Option<Admin>, ApiError> {
        match self.admins.find_one_and_delete(doc! { "_id": id }).await {
            Ok(admin) => Ok(admin),
            Err(e) => Err(ApiError::MongoError(e)),
        }
    }
}
