use chrono::{DateTime, Utc};
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RProfileUpdate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Already validated and hashed; ready to insert.
#[derive(Debug)]
pub struct DBUserCreate {
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// The user document as clients see it. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserProfile {
    fn from(m: entity::user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            display_name: m.display_name,
            role: m.role,
            created_at: m.created_at,
        }
    }
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionRes {
    pub user: UserProfile,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageRes {
    pub message: String,
}
