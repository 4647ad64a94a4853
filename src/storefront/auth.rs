use chrono::Utc;
use tracing::{info, instrument, warn};
use crate::clients::UserClient;
use crate::domain::{Role, User, UserAuth, UserCreate, UserPatch};
use crate::user_actor::UserError;
use super::error::AuthError;

/// Id of the seeded bootstrap admin account.
pub const ADMIN_USER_ID: &str = "admin1";

/// Login, registration and profile edits against the `users` and `userAuth`
/// collections.
#[derive(Clone)]
pub struct AuthService {
    users: UserClient,
    min_password_len: usize,
    allow_guest_login: bool,
}

/// Loose shape check: something before the `@`, a dotted domain after it.
pub fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

impl AuthService {
    pub fn new(users: UserClient, min_password_len: usize, allow_guest_login: bool) -> Self {
        Self { users, min_password_len, allow_guest_login }
    }

    /// Checks the password against the stored credentials of the account
    /// registered under `email`. The role comes from the user record.
    ///
    /// With guest login enabled, an email with no account and a long enough
    /// password yields a non-persisted `user`-role identity. The guest id is
    /// derived from the email, so the same guest always gets the same cart.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        let Some(user) = self.users.find_by_email(email).await? else {
            return self.guest_login(email, password);
        };

        let auth = self
            .users
            .get_credentials(user.id.clone())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        if auth.password != password {
            warn!(user_id = %user.id, "Wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if let Err(e) = self.users.touch_login(user.id.clone()).await {
            warn!(error = %e, "Failed to record last login");
        }
        info!(user_id = %user.id, role = ?user.role, "Logged in");
        Ok(user)
    }

    /// Re-reads a user restored from device storage. Role and profile come
    /// from the `users` record. An id with no record is a guest and gets the
    /// `user` role whatever the stored copy claims.
    #[instrument(skip(self, stored), fields(user_id = %stored.id))]
    pub async fn restore(&self, stored: User) -> User {
        match self.users.get_user(stored.id.clone()).await {
            Ok(Some(user)) => user,
            Ok(None) => User { role: Role::User, ..stored },
            Err(e) => {
                warn!(error = %e, "Could not verify stored user, restoring without privileges");
                User { role: Role::User, ..stored }
            }
        }
    }

    fn guest_login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !self.allow_guest_login
            || !looks_like_email(email)
            || password.chars().count() < self.min_password_len
        {
            return Err(AuthError::InvalidCredentials);
        }

        let first_name = email.split('@').next().unwrap_or_default().to_string();
        let user = User {
            id: format!("guest-{}", email.to_lowercase()),
            first_name,
            last_name: String::new(),
            email: email.to_string(),
            role: Role::User,
        };
        info!(user_id = %user.id, "Guest login");
        Ok(user)
    }

    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = email.trim();
        if first_name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        if !looks_like_email(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        if password.chars().count() < self.min_password_len {
            return Err(AuthError::PasswordTooShort(self.min_password_len));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailInUse(email.to_string()));
        }

        let create = UserCreate {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_string(),
            role: Role::User,
        };
        let id = self.users.create_user(create.clone()).await?;
        let credentials = UserAuth {
            user_id: id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            last_login: Utc::now(),
        };
        if let Err(e) = self.users.put_credentials(credentials).await {
            // Never leave a user record without credentials.
            if let Err(cleanup) = self.users.delete_user(id.clone()).await {
                warn!(user_id = %id, error = %cleanup, "Failed to remove user after credential write failed");
            }
            return Err(e.into());
        }

        info!(user_id = %id, "Registered");
        Ok(User {
            id,
            first_name: create.first_name,
            last_name: create.last_name,
            email: create.email,
            role: create.role,
        })
    }

    /// Applies a profile edit for `user`, keeping emails unique.
    #[instrument(skip(self, user, patch), fields(user_id = %user.id))]
    pub async fn update_profile(&self, user: &User, patch: UserPatch) -> Result<User, AuthError> {
        let new_email = patch
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.eq_ignore_ascii_case(&user.email))
            .map(str::to_string);

        if let Some(email) = &new_email {
            if !looks_like_email(email) {
                return Err(AuthError::InvalidEmail(email.clone()));
            }
            if self.users.find_by_email(email).await?.is_some() {
                return Err(AuthError::EmailInUse(email.clone()));
            }
        }

        let patch = UserPatch { email: new_email.clone(), ..patch };
        let updated = self.users.update_user(user.id.clone(), patch).await?;
        if let Some(email) = new_email {
            self.users.change_login_email(user.id.clone(), email).await?;
        }
        Ok(updated)
    }

    /// Writes the bootstrap admin account: a `users` record carrying the
    /// admin role, plus its credentials.
    #[instrument(skip(self, password))]
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<User, UserError> {
        let admin = User {
            id: ADMIN_USER_ID.to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: email.trim().to_string(),
            role: Role::Admin,
        };
        self.users.put_user(admin.clone()).await?;
        self.users
            .put_credentials(UserAuth {
                user_id: admin.id.clone(),
                email: admin.email.clone(),
                password: password.to_string(),
                last_login: Utc::now(),
            })
            .await?;
        info!(email = %admin.email, "Bootstrap admin account ready");
        Ok(admin)
    }
}
