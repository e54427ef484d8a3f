use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::domain::require_field;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Mascota {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propietario: Option<String>,
    pub esta_adoptado: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MascotaReceive {
    pub imagen: Option<String>,
    pub nombre: Option<String>,
    pub raza: Option<String>,
    pub edad: Option<i32>,
    pub propietario: Option<String>,
    pub esta_adoptado: Option<bool>,
}

// Merge-patch body for PUT: only the fields present in the request enter
// the `$set` document.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MascotaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propietario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_adoptado: Option<bool>,
}

impl Mascota {
    pub fn new(data: MascotaReceive) -> Result<Self, ApiError> {
        let nombre = require_field(data.nombre, "nombre")?;

        Ok(Mascota {
            id: None,
            imagen: data.imagen,
            nombre,
            raza: data.raza,
            edad: data.edad,
            propietario: data.propietario,
            esta_adoptado: data.esta_adoptado.unwrap_or(false),
        })
    }
}
