use serde::{Deserialize, Serialize};

use super::de::deserialize_flag;

/// Role assigned to accounts created through the "Add Club" form
pub const CLUB_MANAGER_ROLE_ID: &str = "2";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Club {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub pic: Option<String>,
    #[serde(rename = "isBlocked", default, deserialize_with = "deserialize_flag")]
    pub is_blocked: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Club {
    pub fn status_label(&self) -> &'static str {
        if self.is_blocked {
            "Blocked"
        } else {
            "Active"
        }
    }
}

/// Registration payload for a club manager account
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct NewClubAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub role_id: String,
}

impl NewClubAccount {
    pub fn new(username: &str, email: &str, password: &str, phone_number: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone_number: phone_number.to_string(),
            role_id: CLUB_MANAGER_ROLE_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_club() {
        let json = r#"{"id":4,"name":"Harbour Rowing","description":"Sculls","location":"Pier 3","pic":null,"isBlocked":1,"user_id":12,"createdAt":"2024-03-01T09:00:00.000Z"}"#;
        let club: Club = serde_json::from_str(json).expect("club should parse");
        assert_eq!(club.id, 4);
        assert_eq!(club.location.as_deref(), Some("Pier 3"));
        assert!(club.is_blocked);
        assert_eq!(club.status_label(), "Blocked");
        assert_eq!(club.user_id, Some(12));
    }

    #[test]
    fn test_new_club_account_uses_manager_role() {
        let account = NewClubAccount::new("harbour", "h@example.com", "pw", "555");
        let value = serde_json::to_value(&account).expect("serialize");
        assert_eq!(value["role_id"], "2");
        assert_eq!(value["phone_number"], "555");
    }
}
