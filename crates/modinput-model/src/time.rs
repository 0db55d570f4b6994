//! Record time normalization.
//!
//! The host expects every `<time>` as seconds since the epoch with exactly
//! three fractional digits (`1372187084.424`). Callers hand us times of
//! unknown origin: clock instants, integer seconds, integer milliseconds,
//! floats, or text holding any of those. [`normalize_time`] maps each of them
//! onto the canonical text.
//!
//! # Rules
//!
//! - Instants are rendered from their millisecond value.
//! - Digit-only values (no fractional part) are ambiguous between seconds and
//!   milliseconds. The first 10 digits are whole seconds, the next (up to) 3
//!   are milliseconds, right-padded with zeros. Anything past 13 digits is
//!   dropped.
//! - Values with a fractional part are already seconds and are rounded to
//!   three decimals. Once the integer part reaches 10 digits the text is cut
//!   to 14 characters, so very large values lose fractional digits
//!   (`13721874084.4242` becomes `13721874084.420`).
//! - A float or decimal text whose fraction is zero follows the digit-only
//!   rule, so `1372187084000.0` and `1372187084000` agree.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::{ModelError, Result};

/// Digits that make up the whole-seconds part of an epoch value.
const SECONDS_DIGITS: usize = 10;

/// Digits kept from an epoch value: seconds plus milliseconds.
const EPOCH_MILLIS_DIGITS: usize = 13;

/// Characters of formatted fractional text kept once the integer part is
/// large enough to be an epoch value.
const FRACTIONAL_TEXT_WIDTH: usize = 14;

/// A time value as supplied by the caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    /// A wall-clock instant.
    Instant(DateTime<Utc>),
    /// Integer seconds or milliseconds since the epoch.
    Integer(u64),
    /// Seconds since the epoch, possibly with a fractional part.
    Float(f64),
    /// Text holding either of the numeric forms.
    Text(String),
}

impl TimeValue {
    /// The current wall-clock time.
    pub fn now() -> Self {
        TimeValue::Instant(Utc::now())
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(value: DateTime<Utc>) -> Self {
        TimeValue::Instant(value)
    }
}

impl From<SystemTime> for TimeValue {
    fn from(value: SystemTime) -> Self {
        TimeValue::Instant(value.into())
    }
}

impl From<u64> for TimeValue {
    fn from(value: u64) -> Self {
        TimeValue::Integer(value)
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        TimeValue::Float(value)
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        TimeValue::Text(value)
    }
}

/// Normalize a time value into `<seconds>.<millis>` text.
///
/// # Errors
///
/// Returns [`ModelError::InvalidTime`] for text that is not a number and for
/// non-finite floats.
pub fn normalize_time(value: &TimeValue) -> Result<String> {
    match value {
        TimeValue::Instant(instant) => Ok(normalize_millis(instant.timestamp_millis())),
        TimeValue::Integer(value) => Ok(normalize_digits(&value.to_string())),
        TimeValue::Float(value) => normalize_float(*value),
        TimeValue::Text(text) => normalize_text(text),
    }
}

fn normalize_millis(millis: i64) -> String {
    let seconds = millis.div_euclid(1000);
    let fraction = millis.rem_euclid(1000);
    format!("{seconds}.{fraction:03}")
}

fn normalize_float(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(ModelError::InvalidTime {
            value: value.to_string(),
        });
    }
    if value >= 0.0 && value.fract() == 0.0 {
        return Ok(normalize_digits(&format!("{value:.0}")));
    }
    Ok(normalize_fractional(value))
}

fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let invalid = || ModelError::InvalidTime {
        value: text.to_string(),
    };
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(normalize_digits(trimmed));
    }
    if !trimmed.contains('.') {
        return Err(invalid());
    }
    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    normalize_float(value)
}

/// Split a run of ASCII digits into seconds and milliseconds.
fn normalize_digits(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0.000".to_string();
    }
    if digits.len() <= SECONDS_DIGITS {
        return format!("{digits}.000");
    }
    let kept = &digits[..digits.len().min(EPOCH_MILLIS_DIGITS)];
    let (seconds, millis) = kept.split_at(SECONDS_DIGITS);
    format!("{seconds}.{millis:0<3}")
}

fn normalize_fractional(value: f64) -> String {
    let fixed = format!("{value:.3}");
    match fixed.find('.') {
        Some(dot) if dot >= SECONDS_DIGITS => {
            let kept = &fixed[..fixed.len().min(FRACTIONAL_TEXT_WIDTH)];
            let (whole, fraction) = kept.split_once('.').unwrap_or((kept, ""));
            format!("{whole}.{fraction:0<3}")
        }
        _ => fixed,
    }
}

/// A normalized record time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Normalize `value` into a timestamp.
    ///
    /// # Errors
    ///
    /// See [`normalize_time`].
    pub fn parse(value: impl Into<TimeValue>) -> Result<Self> {
        normalize_time(&value.into()).map(Timestamp)
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Timestamp(normalize_millis(Utc::now().timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(normalize_millis(value.timestamp_millis()))
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Timestamp(normalize_digits(&value.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
