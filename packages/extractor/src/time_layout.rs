//! View over a `time-layout` element.
//!
//! A layout is a list of `start-valid-time` elements optionally interleaved
//! with `end-valid-time` elements. Starts and ends are paired by position:
//! the i-th end closes the i-th start. Layout keys follow the
//! `k-<period>-<times>-<seq>` convention, e.g. `k-p24h-n7-1` is the first
//! layout with seven 24-hour periods.

use std::cell::OnceCell;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use roxmltree::Node;

use crate::config::{
    END_VALID_TIME_TAG, LAYOUT_KEY_SEPARATOR, LAYOUT_KEY_TAG, START_VALID_TIME_TAG,
    TIME_COORDINATE_ATTR,
};
use crate::error::TimestampError;
use crate::types::{ParsedLayoutKey, ValidTimeInterval};
use crate::xml::{child_text, children_named};

/// Fallback format for offsets written without a colon (`-0500`).
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A set of valid-time intervals shared by the parameters that reference it.
pub struct TimeLayout<'a, 'input> {
    node: Node<'a, 'input>,
    key: OnceCell<Option<String>>,
    parsed_key: OnceCell<ParsedLayoutKey>,
    valid_times: OnceCell<Result<Vec<ValidTimeInterval>, TimestampError>>,
}

impl<'a, 'input> TimeLayout<'a, 'input> {
    /// Wrap a `time-layout` element.
    #[must_use]
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self {
            node,
            key: OnceCell::new(),
            parsed_key: OnceCell::new(),
            valid_times: OnceCell::new(),
        }
    }

    /// The underlying element.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// Text of the `layout-key` child, if present.
    pub fn layout_key(&self) -> Option<&str> {
        self.key
            .get_or_init(|| child_text(self.node, LAYOUT_KEY_TAG))
            .as_deref()
    }

    /// Period, repetition count and sequence number encoded in the key.
    ///
    /// Empty when the layout has no key.
    pub fn parsed_key(&self) -> &ParsedLayoutKey {
        self.parsed_key
            .get_or_init(|| self.layout_key().map(parse_layout_key).unwrap_or_default())
    }

    /// The raw `time-coordinate` attribute.
    #[must_use]
    pub fn time_coordinate(&self) -> Option<&'a str> {
        self.node.attribute(TIME_COORDINATE_ATTR)
    }

    /// Valid-time intervals in document order.
    ///
    /// There is exactly one interval per `start-valid-time`. An unparsable
    /// start or end fails the whole layout; the failure is cached and
    /// returned again on later calls.
    pub fn valid_times(&self) -> Result<&[ValidTimeInterval], TimestampError> {
        self.valid_times
            .get_or_init(|| self.build_valid_times())
            .as_deref()
            .map_err(Clone::clone)
    }

    fn build_valid_times(&self) -> Result<Vec<ValidTimeInterval>, TimestampError> {
        let ends: Vec<Node<'a, 'input>> = children_named(self.node, END_VALID_TIME_TAG).collect();

        let intervals = children_named(self.node, START_VALID_TIME_TAG)
            .enumerate()
            .map(|(index, start_node)| {
                let start_raw = start_node.text().unwrap_or_default().trim();
                let start = self.parse_at(START_VALID_TIME_TAG, index, start_raw)?;
                let interval = ValidTimeInterval::starting(start, start_raw);

                match ends.get(index) {
                    Some(end_node) => {
                        let end_raw = end_node.text().unwrap_or_default().trim();
                        let end = self.parse_at(END_VALID_TIME_TAG, index, end_raw)?;
                        Ok(interval.with_end(end, end_raw))
                    }
                    None => Ok(interval),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(
            layout_key = self.layout_key().unwrap_or_default(),
            intervals = intervals.len(),
            closed = ends.len().min(intervals.len()),
            "Built valid times"
        );

        Ok(intervals)
    }

    fn parse_at(
        &self,
        element: &'static str,
        index: usize,
        raw: &str,
    ) -> Result<DateTime<FixedOffset>, TimestampError> {
        parse_timestamp(raw).map_err(|source| TimestampError {
            layout_key: self.layout_key().map(String::from),
            element,
            index,
            value: raw.to_string(),
            source,
        })
    }
}

impl fmt::Debug for TimeLayout<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeLayout")
            .field("key", &self.layout_key())
            .field("time_coordinate", &self.time_coordinate())
            .finish_non_exhaustive()
    }
}

/// Split a layout key on `-` and read positions 1, 2 and 3.
///
/// The sequence number takes the leading integer of its token, so `"3"` and
/// `"3b"` both give 3 while `"x3"` gives none.
///
/// # Examples
/// ```
/// use dwml_extractor::time_layout::parse_layout_key;
///
/// let parsed = parse_layout_key("k-p24h-n7-3");
/// assert_eq!(parsed.period.as_deref(), Some("p24h"));
/// assert_eq!(parsed.times.as_deref(), Some("n7"));
/// assert_eq!(parsed.seq, Some(3));
/// ```
#[must_use]
pub fn parse_layout_key(key: &str) -> ParsedLayoutKey {
    let mut tokens = key.split(LAYOUT_KEY_SEPARATOR).skip(1);

    ParsedLayoutKey {
        period: tokens.next().map(String::from),
        times: tokens.next().map(String::from),
        seq: tokens.next().and_then(leading_integer),
    }
}

/// Leading optionally-signed integer of a token, ignoring leading whitespace.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let sign_len = usize::from(token.starts_with(['-', '+']));
    let digits_len = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }
    token[..sign_len + digits_len].parse().ok()
}

/// Parse a timestamp that carries its own UTC offset, keeping that offset.
///
/// Accepts RFC 3339 (`2024-01-15T06:00:00-05:00`) and the compact offset form
/// (`2024-01-15T06:00:00-0500`). Timestamps without an offset are rejected.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).or_else(|rfc_err| {
        DateTime::parse_from_str(raw, COMPACT_OFFSET_FORMAT).map_err(|_| rfc_err)
    })
}
