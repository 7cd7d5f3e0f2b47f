//! Password gate in front of the review workflow
//!
//! Boundary concern only: the workflows themselves assume callers are
//! already authorized.

const PASSWORD_ENV: &str = "LEAVE_ADMIN_PASSWORD";

pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    /// Reads the secret from `LEAVE_ADMIN_PASSWORD`. Returns `None` when the
    /// variable is unset, so the caller decides whether review access stays
    /// closed or a deployment-specific default applies.
    pub fn from_env() -> Option<Self> {
        std::env::var(PASSWORD_ENV).ok().map(|s| Self::new(&s))
    }

    pub fn verify(&self, attempt: &str) -> bool {
        attempt == self.secret
    }
}
