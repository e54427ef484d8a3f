use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::domain::require_field;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReceive {
    pub image: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl Admin {
    pub fn new(data: AdminReceive) -> Result<Self, ApiError> {
        let full_name = require_field(data.full_name, "fullName")?;
        let email = require_field(data.email, "email")?;
        let password = require_field(data.password, "password")?;

        Ok(Admin {
            id: None,
            image: data.image,
            full_name,
            email,
            password,
            role: data.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_receive() -> AdminReceive {
        AdminReceive {
            image: Some("http://example.com/image.jpg".to_string()),
            full_name: Some("Admin de Prueba".to_string()),
            email: Some("testadmin@example.com".to_string()),
            password: Some("password123".to_string()),
            role: Some("Admin".to_string()),
        }
    }

    #[test]
    fn builds_an_admin_from_a_complete_payload() {
        let admin = Admin::new(test_receive()).unwrap();

        assert!(admin.id.is_none());
        assert_eq!(admin.full_name, "Admin de Prueba");
        assert_eq!(admin.email, "testadmin@example.com");
        assert_eq!(admin.role.as_deref(), Some("Admin"));
    }

    #[test]
    fn rejects_a_payload_without_email() {
        let mut data = test_receive();
        data.email = None;

        let err = Admin::new(data).unwrap_err();
        assert!(matches!(err, ApiError::InvalidData(_)));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn rejects_an_empty_required_field() {
        let mut data = test_receive();
        data.password = Some(String::new());

        assert!(Admin::new(data).is_err());
    }

    #[test]
    fn serializes_with_the_wire_field_names() {
        let admin = Admin::new(test_receive()).unwrap();
        let value = serde_json::to_value(&admin).unwrap();

        assert_eq!(value["fullName"], "Admin de Prueba");
        assert!(value.get("_id").is_none()); // skipped while unset
    }
}
