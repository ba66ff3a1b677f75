//! Customer record shapes.

use serde::{Deserialize, Serialize};

/// A stored customer. `id` is assigned by the backend on insert.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create payload. Fields stay optional so missing values reach the backend,
/// which rejects them; an `id` in the body is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        NewCustomer {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_id_is_ignored() {
        let c: NewCustomer =
            serde_json::from_str(r#"{"id":42,"name":"John","email":"john@gmail.com"}"#).unwrap();
        assert_eq!(c.name.as_deref(), Some("John"));
        assert_eq!(c.email.as_deref(), Some("john@gmail.com"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let c: NewCustomer = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(c.name.is_none());
        assert!(c.email.is_none());
    }

    #[test]
    fn customer_wire_shape() {
        let c = Customer {
            id: 7,
            name: "John".into(),
            email: "john@gmail.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"id": 7, "name": "John", "email": "john@gmail.com"})
        );
    }
}
