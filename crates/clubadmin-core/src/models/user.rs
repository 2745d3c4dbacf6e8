use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::deserialize_flag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Player,
    Club,
    Admin,
    Unknown,
}

impl UserRole {
    pub fn from_id(role_id: i64) -> Self {
        match role_id {
            1 => UserRole::Player,
            2 => UserRole::Club,
            3 => UserRole::Admin,
            _ => UserRole::Unknown,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Player => write!(f, "Player"),
            UserRole::Club => write!(f, "Club"),
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(rename = "isVerified", default, deserialize_with = "deserialize_flag")]
    pub is_verified: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub role_id: i64,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from_id(self.role_id)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(UserRole::from_id(1), UserRole::Player);
        assert_eq!(UserRole::from_id(2), UserRole::Club);
        assert_eq!(UserRole::from_id(3), UserRole::Admin);
        assert_eq!(UserRole::from_id(9), UserRole::Unknown);
        assert_eq!(UserRole::Club.to_string(), "Club");
    }

    #[test]
    fn test_parse_user() {
        let json = r#"{"id":7,"username":"sam","email":"sam@example.com","phone_number":"5551234567","isVerified":true,"createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-02T10:00:00.000Z","deletedAt":null,"role_id":1}"#;
        let user: User = serde_json::from_str(json).expect("user should parse");
        assert_eq!(user.role(), UserRole::Player);
        assert!(user.is_verified);
        assert!(!user.is_deleted());
        assert!(user.created_at.is_some());
    }
}
