use serde::Serialize;

use crate::entities::admins;

/// Admin account as seen outside the store; the password hash never leaves it.
#[derive(Debug, Clone, Serialize)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub created_at: String,
}

impl From<admins::Model> for Admin {
    fn from(model: admins::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
