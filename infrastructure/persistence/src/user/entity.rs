use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{PasswordHash, User};

pub const USER_COLUMNS: &str =
    "id, name, email, password_hash, profile_picture_url, created_at, updated_at";

#[derive(FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            password_hash: PasswordHash::new(self.password_hash),
            profile_picture_url: self.profile_picture_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
