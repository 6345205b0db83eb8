//! Browser storage carried in cookies.
//!
//! Durable values become persistent cookies, session values become cookies
//! without an expiry. Values are base64url-encoded so JSON and paths survive
//! the cookie grammar.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use tracing::warn;

use crate::modules::client_state::application::ports::outgoing::client_storage::{
    ClientStorage, StorageScope,
};

const DURABLE_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, Default)]
pub struct CookiePolicy {
    pub secure: bool,
}

#[derive(Debug, Clone)]
struct PendingCookie {
    scope: StorageScope,
    value: Option<String>,
}

/// Request-scoped storage: seeded from the request cookies, changes are
/// written back onto the response with `apply`.
#[derive(Debug)]
pub struct CookieStorage {
    policy: CookiePolicy,
    values: Mutex<HashMap<String, String>>,
    pending: Mutex<Vec<(String, PendingCookie)>>,
}

impl CookieStorage {
    pub fn new(policy: CookiePolicy) -> Self {
        Self {
            policy,
            values: Mutex::new(HashMap::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn from_request(req: &HttpRequest, policy: CookiePolicy) -> Self {
        let storage = Self::new(policy);

        match req.cookies() {
            Ok(cookies) => {
                let mut values = lock(&storage.values);
                for cookie in cookies.iter() {
                    if let Some(decoded) = decode(cookie.value()) {
                        values.insert(cookie.name().to_string(), decoded);
                    }
                }
            }
            Err(e) => warn!(error = %e, "Ignoring unparseable cookie header"),
        }

        storage
    }

    /// Writes every change made through this storage onto `response`.
    pub fn apply(&self, response: &mut HttpResponse) {
        let pending = std::mem::take(&mut *lock(&self.pending));

        // Only the last change to a key matters.
        let mut latest: Vec<(String, PendingCookie)> = Vec::new();
        for (key, change) in pending {
            latest.retain(|(k, _)| k != &key);
            latest.push((key, change));
        }

        for (key, change) in latest {
            let result = match change.value {
                Some(value) => response.add_cookie(&self.build(&key, encode(&value), change.scope)),
                None => response.add_removal_cookie(&self.build(&key, String::new(), change.scope)),
            };
            if let Err(e) = result {
                warn!(cookie = %key, error = %e, "Failed to write cookie");
            }
        }
    }

    fn build(&self, name: &str, value: String, scope: StorageScope) -> Cookie<'static> {
        let mut cookie = Cookie::build(name.to_string(), value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.policy.secure)
            .finish();

        if scope == StorageScope::Durable {
            cookie.set_max_age(CookieDuration::days(DURABLE_MAX_AGE_DAYS));
        }
        cookie
    }

    fn record(&self, key: &str, change: PendingCookie) {
        lock(&self.pending).push((key.to_string(), change));
    }
}

impl ClientStorage for CookieStorage {
    /// Cookie names are global, so the scope only matters when writing.
    fn get(&self, _scope: StorageScope, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) {
        lock(&self.values).insert(key.to_string(), value.to_string());
        self.record(
            key,
            PendingCookie {
                scope,
                value: Some(value.to_string()),
            },
        );
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        lock(&self.values).remove(key);
        self.record(key, PendingCookie { scope, value: None });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn encode(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

fn decode(raw: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}
