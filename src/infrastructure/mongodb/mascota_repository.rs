use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{self, doc};
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;

use crate::infrastructure::database::mongo_context::MongoContext;
use crate::domain::mascota::repository::MascotaRepository;
use crate::domain::mascota::model::{Mascota, MascotaReceive, MascotaUpdate};
use crate::utils::errors::ApiError;

pub struct MongoMascotaRepository {
    mascotas: mongodb::Collection<Mascota>
}

impl MongoMascotaRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            mascotas: context.collection("mascotas")
        }
    }
}

#[async_trait]
impl MascotaRepository for MongoMascotaRepository {

    async fn create_mascota(&self, data: MascotaReceive) -> Result<Mascota, ApiError> {
        let mut mascota = Mascota::new(data)?;

        let result = self.mascotas.insert_one(&mascota).await?;
        mascota.id = result.inserted_id.as_object_id();
        Ok(mascota)
    }

    async fn get_all_mascotas(&self) -> Result<Vec<Mascota>, ApiError> {
        let mut cursor = self.mascotas.find(doc! {}).await?;
        let mut mascotas = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(mascota) => mascotas.push(mascota),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(mascotas)
    }

    async fn update_mascota(&self, id: ObjectId, data: MascotaUpdate) -> Result<Option<Mascota>, ApiError> {
        let update_doc = bson::to_document(&data)?;

        // The server rejects an empty $set, so an empty patch is a plain read
        if update_doc.is_empty() {
            return Ok(self.mascotas.find_one(doc! { "_id": id }).await?);
        }

        let updated = self.mascotas
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete_mascota(&self, id: ObjectId) -> Result<Option<Mascota>, ApiError> {
        match self.mascotas.find_one_and_delete(doc! { "_id": id }).await {
            Ok(mascota) => Ok(mascota),
            Err(e) => Err(ApiError::MongoError(e)),
        }
    }
}
