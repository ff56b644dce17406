//! User entity <-> model mapper

use lab_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity, dropping the password hash
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        model.into_parts().0
    }
}

impl UserModel {
    /// Split the row into the entity and its password hash
    pub fn into_parts(self) -> (User, String) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            is_active: self.is_active,
            last_login: self.last_login,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        (user, self.password_hash)
    }
}
