use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::domain::require_field;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    // Clients send this flag as a string ("true"), so it is stored
    // exactly as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioReceive {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub is_adult: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Usuario {
    pub fn new(data: UsuarioReceive) -> Result<Self, ApiError> {
        let full_name = require_field(data.full_name, "fullName")?;
        let email = require_field(data.email, "email")?;
        let password = require_field(data.password, "password")?;

        Ok(Usuario {
            id: None,
            full_name,
            email,
            password,
            phone: data.phone,
            is_adult: data.is_adult,
            address: data.address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_receive() -> UsuarioReceive {
        UsuarioReceive {
            full_name: Some("Usuario de Prueba".to_string()),
            email: Some("testuser@example.com".to_string()),
            password: Some("password123".to_string()),
            phone: Some("1234567890".to_string()),
            is_adult: Some("true".to_string()),
            address: Some("Calle Falsa 123".to_string()),
        }
    }

    #[test]
    fn builds_a_usuario_from_a_complete_payload() {
        let usuario = Usuario::new(test_receive()).unwrap();

        assert_eq!(usuario.email, "testuser@example.com");
        assert_eq!(usuario.is_adult.as_deref(), Some("true"));
    }

    #[test]
    fn rejects_a_payload_without_full_name() {
        let mut data = test_receive();
        data.full_name = None;

        assert!(Usuario::new(data).is_err());
    }
}
