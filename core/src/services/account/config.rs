//! Account service configuration.

/// Configuration for account flows
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Public base URL of this API, used to build activation links
    pub api_url: String,

    /// Base URL of the web client, used to build password reset links
    pub client_url: String,

    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            client_url: "http://localhost:3000".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AccountConfig {
    /// Activation URL for a given one-time link token
    pub fn activation_url(&self, link: &str) -> String {
        format!("{}/api/activate/{}", self.api_url, link)
    }

    /// Password reset URL for a given reset token
    pub fn reset_url(&self, token: &str) -> String {
        format!("{}/reset-password/{}", self.client_url, token)
    }
}
