use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time in RFC 3339 with millisecond precision.
pub fn now_rfc3339() -> String {
    let time: DateTime<Utc> = Utc::now();
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_rfc3339() {
        let now = now_rfc3339();
        assert!(now.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
