//! Wall-clock helpers shared by the refresh controllers.

use time::OffsetDateTime;

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Cache-busting token for the reparse endpoint: Unix time in milliseconds.
pub fn nonce_millis() -> i64 {
    (now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_is_unix_millis() {
        let before = OffsetDateTime::now_utc().unix_timestamp() * 1000;
        let nonce = nonce_millis();
        let after = OffsetDateTime::now_utc().unix_timestamp() * 1000 + 1000;
        assert!(nonce >= before && nonce <= after);
    }
}
