use bcrypt::BcryptError;
use thiserror::Error as ThisError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 8;

/// Longest password bcrypt can hash without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, ThisError)]
pub enum HashingError {
    #[error("password is longer than {MAX_PASSWORD_BYTES} bytes")]
    PasswordTooLong,

    #[error("hash backend failure: {0}")]
    Backend(String),
}

impl From<BcryptError> for HashingError {
    fn from(e: BcryptError) -> Self {
        match e {
            BcryptError::Truncation(_) => HashingError::PasswordTooLong,
            other => HashingError::Backend(other.to_string()),
        }
    }
}

/// One-way adaptive password hash.
///
/// Implementations must embed salt and cost in the returned string so that
/// `verify` needs nothing but the stored hash.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashingError>;

    /// `Ok(false)` on mismatch; `Err` when the stored hash cannot be parsed
    /// or the password cannot be hashed at all.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError>;
}

/// bcrypt with a fixed cost. Passwords over 72 bytes are refused, never truncated.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, HashingError> {
        Ok(bcrypt::non_truncating_hash(password, self.cost)?)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError> {
        Ok(bcrypt::non_truncating_verify(password, hash)?)
    }
}
