use crate::error::{ErrorKind, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const MENTOR_GROUP: &str = "Mentor";

// Typed views over backend payloads. Unknown fields are ignored and missing
// ones fall back to defaults, since the backend shape is consumed as-is.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct User {
    pub id: Option<u64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub groups: Vec<String>,
}

impl User {
    pub fn is_mentor(&self) -> bool {
        self.groups.iter().any(|group| group == MENTOR_GROUP)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Course {
    pub id: Option<u64>,
    pub course_title: String,
    pub category: String,
    pub school_name: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    pub available_until: String,
    pub author: String,
    pub post_date: String,
    pub user_username: Option<String>,
    pub student_count: u64,
    pub is_enrolled: bool,
    pub students: Option<Vec<User>>,
}

/// Response of login and signup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub user: Value,
    pub token: String,
}

impl AuthResponse {
    pub fn typed_user(&self) -> Result<User> {
        Ok(serde_json::from_value(self.user.clone())?)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Accepts both a bare list and a paginated `{"results": [...]}` page.
pub fn courses_from_value(value: Option<Value>) -> Result<Vec<Course>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(serde_json::from_value(Value::Array(items))?),
        Some(Value::Object(mut page)) => match page.remove("results") {
            Some(results) => Ok(serde_json::from_value(results)?),
            None => Err(ErrorKind::ParseError("Expected a list of courses".to_string()).into()),
        },
        Some(other) => Err(ErrorKind::ParseError(format!("Unexpected course payload: {other}")).into()),
    }
}

// DRF renders decimals as strings by default, but accept plain numbers too.
fn string_or_number<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!("invalid price: {other}"))),
    }
}
