//! Account service implementation.

use std::sync::Arc;

use uuid::Uuid;

use id_shared::utils::validation::{is_valid_email, password_policy_violations};

use crate::domain::entities::user::{User, UserSummary};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::mail::MailerService;
use crate::services::token::SessionService;

use super::config::AccountConfig;

/// Coordinates the account flows over users, sessions, and mail
pub struct AccountService<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: MailerService + 'static,
{
    users: Arc<U>,
    sessions: SessionService<S>,
    mailer: Arc<M>,
    config: AccountConfig,
}

impl<U, S, M> AccountService<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: MailerService + 'static,
{
    /// Create an account service over its collaborators
    pub fn new(
        users: Arc<U>,
        sessions: SessionService<S>,
        mailer: Arc<M>,
        config: AccountConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            mailer,
            config,
        }
    }

    /// The underlying session service
    pub fn sessions(&self) -> &SessionService<S> {
        &self.sessions
    }

    /// Register a new account and open its first session
    ///
    /// The activation email is sent in the background; a mail failure is
    /// logged but never blocks or fails the registration response.
    pub async fn register(
        &self,
        name: &str,
        surname: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        validate_credentials(email, password)?;

        if self.users.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyRegistered {
                email: email.to_string(),
            }
            .into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost)?;
        let activation_link = Uuid::new_v4().to_string();

        let user = self
            .users
            .create(User::new(
                name.to_string(),
                surname.to_string(),
                email.to_string(),
                password_hash,
                activation_link.clone(),
            ))
            .await?;

        self.send_mail_in_background(
            user.email.clone(),
            self.config.activation_url(&activation_link),
            MailKind::Activation,
        );

        let pair = self.sessions.issue(&(&user).into()).await?;
        Ok(AuthResponse::from_token_pair(pair, UserSummary::from(&user)))
    }

    /// Activate an account via its one-time link token
    ///
    /// The link is consumed on success; a second visit fails.
    pub async fn activate(&self, link: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_activation_link(link)
            .await?
            .ok_or(AuthError::InvalidActivationLink)?;

        user.activate();
        self.users.update(user).await?;
        Ok(())
    }

    /// Authenticate with email and password, minting a new session
    ///
    /// Issuing replaces any session the user already held, so logging in
    /// on a second device logs out the first.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(password, &user.password_hash)?;

        let pair = self.sessions.issue(&(&user).into()).await?;
        Ok(AuthResponse::from_token_pair(pair, UserSummary::from(&user)))
    }

    /// Exchange a valid refresh token for a fresh pair
    ///
    /// The canonical user record is re-fetched so the new tokens reflect
    /// the current activation state, not the state at mint time.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let payload = self.sessions.validate_refresh(refresh_token).await?;

        let user = self
            .users
            .find_by_id(payload.user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let pair = self.sessions.issue(&(&user).into()).await?;
        Ok(AuthResponse::from_token_pair(pair, UserSummary::from(&user)))
    }

    /// End the session holding this refresh token
    ///
    /// Always succeeds; the return value reports whether a stored
    /// session was actually removed.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        self.sessions.revoke(refresh_token).await
    }

    /// Change a user's password and invalidate their current session
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(current_password, &user.password_hash)?;

        let violations = password_policy_violations(new_password);
        if !violations.is_empty() {
            return Err(DomainError::Validation {
                message: violations.join("; "),
            });
        }

        user.set_password_hash(hash_password(new_password, self.config.bcrypt_cost)?);
        let user = self.users.update(user).await?;

        // The old refresh token must not outlive the old password
        self.sessions.revoke_user(user.id).await
    }

    /// Start a password reset by emailing a reset link
    ///
    /// Succeeds silently for unknown emails so the endpoint does not
    /// reveal which addresses are registered.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<()> {
        let Some(mut user) = self.users.find_by_email(email).await? else {
            return Ok(());
        };

        let reset_token = Uuid::new_v4().to_string();
        user.set_reset_token(reset_token.clone());
        let user = self.users.update(user).await?;

        self.send_mail_in_background(
            user.email,
            self.config.reset_url(&reset_token),
            MailKind::PasswordReset,
        );
        Ok(())
    }

    /// List all registered users as credential-free summaries
    pub async fn list_users(&self) -> DomainResult<Vec<UserSummary>> {
        let users = self.users.find_all().await?;
        Ok(users.iter().map(UserSummary::from).collect())
    }

    fn send_mail_in_background(&self, to: String, url: String, kind: MailKind) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            let result = match kind {
                MailKind::Activation => mailer.send_activation_link(&to, &url).await,
                MailKind::PasswordReset => mailer.send_password_reset_link(&to, &url).await,
            };
            if let Err(e) = result {
                tracing::warn!(recipient = %to, error = %e, "failed to send account email");
            }
        });
    }
}

enum MailKind {
    Activation,
    PasswordReset,
}

fn validate_credentials(email: &str, password: &str) -> DomainResult<()> {
    if !is_valid_email(email) {
        return Err(DomainError::Validation {
            message: "invalid email address".to_string(),
        });
    }

    let violations = password_policy_violations(password);
    if !violations.is_empty() {
        return Err(DomainError::Validation {
            message: violations.join("; "),
        });
    }
    Ok(())
}

fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {e}"),
    })
}

fn verify_password(password: &str, hash: &str) -> DomainResult<()> {
    let matches = bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {e}"),
    })?;

    if matches {
        Ok(())
    } else {
        Err(AuthError::WrongPassword.into())
    }
}
