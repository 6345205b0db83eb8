use std::fmt;

/// Credentials a store call is made with.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Caller {
    /// The project's public API key only.
    #[default]
    Anonymous,
    /// A signed-in user's access token, sent as the bearer so the store's
    /// access rules see the user.
    User(String),
}

impl Caller {
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Caller::Anonymous => None,
            Caller::User(token) => Some(token),
        }
    }
}

impl fmt::Debug for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caller::Anonymous => f.write_str("Anonymous"),
            Caller::User(_) => f.write_str("User(<redacted>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_token() {
        let caller = Caller::User("secret-token".into());
        assert_eq!(format!("{caller:?}"), "User(<redacted>)");
        assert_eq!(caller.access_token(), Some("secret-token"));
        assert_eq!(Caller::default().access_token(), None);
    }
}
