use chrono::Utc;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use tracing::warn;
use uuid::{Builder, Uuid};

/// Generates anonymous visitor session ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIdGenerator;

impl SessionIdGenerator {
    /// A v4 UUID from the operating system RNG, or a timestamp-plus-suffix
    /// id when that source is unavailable.
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; 16];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => uuid_from(bytes).to_string(),
            Err(e) => {
                warn!(error = %e, "OS randomness unavailable, using fallback session id");
                fallback_id(Utc::now().timestamp_millis(), rand::thread_rng().gen())
            }
        }
    }
}

fn uuid_from(bytes: [u8; 16]) -> Uuid {
    Builder::from_random_bytes(bytes).into_uuid()
}

pub(crate) fn fallback_id(unix_ms: i64, suffix: u64) -> String {
    format!("{}-{}", unix_ms, to_base36(suffix))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
