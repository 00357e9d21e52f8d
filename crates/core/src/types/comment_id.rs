use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
    pub const fn new(value: i64) -> Self {
        CommentId(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Picks the creation timestamp as the id unless an id at or past it was
    /// already handed out, in which case the next integer is used.
    pub fn next(timestamp_millis: i64, last: Option<CommentId>) -> CommentId {
        match last {
            Some(CommentId(last)) if last >= timestamp_millis => CommentId(last.saturating_add(1)),
            _ => CommentId(timestamp_millis),
        }
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(CommentId)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_uses_timestamp_when_ahead() {
        assert_eq!(CommentId::next(1_000, None), CommentId(1_000));
        assert_eq!(CommentId::next(1_000, Some(CommentId(999))), CommentId(1_000));
    }

    #[test]
    fn next_bumps_past_last_issued() {
        assert_eq!(CommentId::next(1_000, Some(CommentId(1_000))), CommentId(1_001));
        assert_eq!(CommentId::next(500, Some(CommentId(1_000))), CommentId(1_001));
    }

    #[test]
    fn parses_with_optional_hash() {
        assert_eq!("#42".parse::<CommentId>().unwrap(), CommentId(42));
        assert_eq!(" 7 ".parse::<CommentId>().unwrap(), CommentId(7));
        assert!("abc".parse::<CommentId>().is_err());
    }
}
