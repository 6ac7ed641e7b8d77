use chrono::{DateTime, Utc};

/// Issues time-based ids: the millisecond timestamp as a decimal string.
///
/// Ids are strictly increasing per generator. When the clock has not moved
/// past the last id (two calls in the same millisecond, or a frozen clock),
/// the next id is `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that will never reissue any numeric id in `existing`.
    ///
    /// Non-numeric ids (such as trade ids `"<portfolio>-<n>"`) are ignored.
    pub fn resuming_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            .max(0);
        Self { last }
    }

    /// Next id for the given instant.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = if millis > self.last {
            millis
        } else {
            self.last.saturating_add(1)
        };
        self.last = id;
        id.to_string()
    }

    /// Last issued id value, 0 before the first call.
    #[must_use]
    pub fn last(&self) -> i64 {
        self.last
    }
}
