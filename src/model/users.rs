use super::UniqueId;

pub type UserId = UniqueId;

/// A registered user. Only the bcrypt hash of the password is ever stored.
#[derive(Debug, Clone)]
pub struct UserDescription {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
