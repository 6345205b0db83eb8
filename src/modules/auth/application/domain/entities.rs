use serde::{Deserialize, Serialize};

/// The signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    /// True for the static identity behind the demo bypass.
    pub demo: bool,
}

impl Identity {
    pub fn demo() -> Self {
        Self {
            user_id: "demo".to_string(),
            email: Some("demo@example.com".to_string()),
            demo: true,
        }
    }
}

/// Result of a successful provider sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub identity: Identity,
}

/// The fixed credential pair that opens the admin UI without a live backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPolicy {
    pub enabled: bool,
    pub username: String,
    pub password: String,
}

impl DemoPolicy {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.enabled && username.trim() == self.username && password == self.password
    }
}

impl Default for DemoPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            username: "demo".to_string(),
            password: "demo".to_string(),
        }
    }
}

/// Claims read from a hosted-auth access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub aud: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_matches_only_when_enabled() {
        let mut policy = DemoPolicy::default();
        assert!(policy.matches("demo", "demo"));
        assert!(policy.matches(" demo ", "demo"));
        assert!(!policy.matches("demo", "Demo"));

        policy.enabled = false;
        assert!(!policy.matches("demo", "demo"));
    }
}
