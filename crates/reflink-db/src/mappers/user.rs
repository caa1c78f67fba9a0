//! User entity <-> model mapper

use reflink_core::entities::User;
use reflink_core::value_objects::{UserId, UserRole};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.user_id),
            username: model.username,
            first_name: model.first_name,
            role: UserRole::from_db(&model.role),
            created_at: model.created_at,
        }
    }
}
