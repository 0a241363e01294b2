use sqlx::FromRow;

/// One row of the `users` table. `password` holds the bcrypt hash, never the raw password.
#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DbUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbUser")
            .field("username", &self.username)
            .field("password", &"<hash>")
            .finish()
    }
}
