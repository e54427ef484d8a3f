use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{self, doc};
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;

use crate::infrastructure::database::mongo_context::MongoContext;
use crate::domain::usuario::repository::UsuarioRepository;
use crate::domain::usuario::model::{Usuario, UsuarioReceive, UsuarioUpdate};
use crate::utils::errors::ApiError;

pub struct MongoUsuarioRepository {
    usuarios: mongodb::Collection<Usuario>
}

impl MongoUsuarioRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            usuarios: context.collection("usuarios")
        }
    }
}

#[async_trait]
impl UsuarioRepository for MongoUsuarioRepository {

    async fn create_usuario(&self, data: UsuarioReceive) -> Result<Usuario, ApiError> {
        let mut usuario = Usuario::new(data)?;

        let result = self.usuarios.insert_one(&usuario).await?;
        usuario.id = result.inserted_id.as_object_id();
        Ok(usuario)
    }

    async fn get_all_usuarios(&self) -> Result<Vec<Usuario>, ApiError> {
        let mut cursor = self.usuarios.find(doc! {}).await?;
        let mut usuarios = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(usuario) => usuarios.push(usuario),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(usuarios)
    }

    async fn update_usuario(&self, id: ObjectId, data: UsuarioUpdate) -> Result<Option<Usuario>, ApiError> {
        let update_doc = bson::to_document(&data)?;

        if update_doc.is_empty() {
            return Ok(self.usuarios.find_one(doc! { "_id": id }).await?);
        }

        let updated = self.usuarios
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete_usuario(&self, id: ObjectId) -> Result<Option<Usuario>, ApiError> {
        match self.usuarios.find_one_and_delete(doc! { "_id": id }).await {
            Ok(usuario) => Ok(usuario),
            Err(e) => Err(ApiError::MongoError(e)),
        }
    }
}
