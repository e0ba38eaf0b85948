//! # Input Sanitization & Validation
//!
//! This module defines the validation rules used by the interactive prompts in
//! [`crate::utils::Terminal`]. A rule either accepts a raw line of input
//! (optionally producing a typed value from it) or rejects it with a
//! [`FilterErrorNot`] whose `Display` text is the diagnostic shown to the user.
//!
//! ## Features
//! - Non-empty text with [`Sanitize::NonEmpty`]
//! - Typed parsing (`i32`, `f64`) via [`DesiredType`]
//! - Inclusive range validation with [`Sanitize::IsBetween`] and [`Sanitize::IsBetweenFloat`]
//! - Case-insensitive yes/no answers with [`Sanitize::YesNo`]
//! - Whole-line regular expression matching with [`Sanitize::MatchPattern`]
//!
//! Integer, float and yes/no rules ignore surrounding whitespace. Non-empty and
//! pattern rules see the line exactly as typed (minus its terminator).
//!
//! ## Examples
//!
//! ### Compose filters
//! ```rust,no_run
//! use safeinput::utils::{DesiredType, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let answer = terminal
//!     .ask(
//!         "Enter a port",
//!         &[Sanitize::IsType(DesiredType::Integer), Sanitize::IsBetween(1, 65535)],
//!     )
//!     .unwrap();
//! println!("Accepted: {}", answer);
//! ```
//!
//! ### Typed parsing without a terminal
//! ```rust
//! use safeinput::utils::sanitize::{parse_integer, parse_yes_no};
//!
//! assert_eq!(parse_integer(" 42 ").unwrap(), 42);
//! assert!(parse_yes_no("Yes").unwrap());
//! assert!(parse_integer("99999999999").is_err());
//! ```
use regex::Regex;
use std::fmt::{Debug, Display};
use thiserror::Error;

/// Represents a validation filter that can be applied to user input.
///
/// - `NonEmpty`: the raw line must contain at least one character.
/// - `IsType`: the input must parse into the given [`DesiredType`].
/// - `IsBetween`: the input must be an `i32` inside the inclusive range `[min, max]`.
/// - `IsBetweenFloat`: the input must be a finite `f64` inside the inclusive range `[min, max]`.
/// - `YesNo`: the input must be one of `Y`, `YES`, `N`, `NO` (any case).
/// - `MatchPattern`: the whole line must match the regular expression.
#[derive(Debug, Clone)]
pub enum Sanitize {
    NonEmpty,
    IsType(DesiredType),
    IsBetween(i32, i32),
    IsBetweenFloat(f64, f64),
    YesNo,
    MatchPattern(Regex),
}

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`FilterErrorNot`] on failure.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot>;
}

/// Represents an error that occurs when input validation fails.
///
/// The `Display` output of every variant is the exact diagnostic printed by
/// the prompt loop before it asks again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterErrorNot {
    #[error("Input cannot be empty. Please try again.")]
    Empty,
    #[error("{0} is not a valid integer.")]
    Integer(String),
    #[error("{0} is outside the supported range of [{min} … {max}].", min = i32::MIN, max = i32::MAX)]
    IntegerRange(String),
    #[error("{0} is not a valid double.")]
    Float(String),
    #[error("{0} is outside the supported range of a double.")]
    FloatRange(String),
    #[error("{value} is below the minimum allowed value of {min}. Please try again.")]
    BelowMin { value: String, min: String },
    #[error("{value} is above the maximum allowed value of {max}. Please try again.")]
    AboveMax { value: String, max: String },
    #[error("Input cannot be empty. Please answer Y/N.")]
    EmptyAnswer,
    #[error("{0} is not a valid response.  Please answer Y/N.")]
    Answer(String),
    #[error("Sorry. \"{input}\" does not match the correct pattern. The pattern we need to match is \"{pattern}\"")]
    Pattern { input: String, pattern: String },
}

/// The accepted answers for [`Sanitize::YesNo`], compared after upper-casing.
const YES_NO_ANSWERS: [(&str, bool); 4] = [("Y", true), ("YES", true), ("N", false), ("NO", false)];

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Stops and returns the first error encountered.
    /// - Returns the answer unchanged if all filters pass.
    pub(crate) fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterErrorNot> {
        for filter in filters {
            filter.validate(answer)?;
        }
        Ok(answer.to_string())
    }

    /// Returns the `(min, max)` pair of a range filter that can never pass,
    /// i.e. `min > max` (or a NaN bound for doubles).
    pub(crate) fn inverted_bounds(&self) -> Option<(String, String)> {
        match self {
            Sanitize::IsBetween(min, max) if min > max => {
                Some((format!("{:?}", min), format!("{:?}", max)))
            }
            Sanitize::IsBetweenFloat(min, max) if !(min <= max) => {
                Some((format!("{:?}", min), format!("{:?}", max)))
            }
            _ => None,
        }
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::NonEmpty => parse_non_empty(input).map(|_| ()),
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::IsBetween(min, max) => {
                let value = parse_integer(input)?;
                check_between(value, *min, *max)
            }
            Sanitize::IsBetweenFloat(min, max) => {
                let value = parse_float(input)?;
                check_between(value, *min, *max)
            }
            Sanitize::YesNo => parse_yes_no(input).map(|_| ()),
            Sanitize::MatchPattern(pattern) => parse_pattern(input, pattern).map(|_| ()),
        }
    }
}

/// Represents the desired type to which the input should be parsed.
///
/// Used together with [`Sanitize::IsType`] to validate primitive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    /// A base-10 `i32`.
    Integer,
    /// A finite `f64`.
    Float,
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            DesiredType::Integer => parse_integer(input).map(|_| ()),
            DesiredType::Float => parse_float(input).map(|_| ()),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "double"),
        }
    }
}

/// Accepts any line with at least one character, whitespace included.
pub fn parse_non_empty(input: &str) -> Result<String, FilterErrorNot> {
    if input.is_empty() {
        Err(FilterErrorNot::Empty)
    } else {
        Ok(input.to_string())
    }
}

/// Parses a trimmed base-10 `i32`.
///
/// A run of digits (with an optional leading `-`) that does not fit is
/// reported as out of range rather than as malformed.
pub fn parse_integer(input: &str) -> Result<i32, FilterErrorNot> {
    let clean = input.trim();
    clean.parse::<i32>().map_err(|_| {
        if is_digit_run(clean) {
            FilterErrorNot::IntegerRange(clean.to_string())
        } else {
            FilterErrorNot::Integer(clean.to_string())
        }
    })
}

fn is_digit_run(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a trimmed, finite `f64`.
pub fn parse_float(input: &str) -> Result<f64, FilterErrorNot> {
    let clean = input.trim();
    match clean.parse::<f64>() {
        Ok(value) if value.is_infinite() => Err(FilterErrorNot::FloatRange(clean.to_string())),
        Ok(value) if value.is_nan() => Err(FilterErrorNot::Float(clean.to_string())),
        Ok(value) => Ok(value),
        Err(_) => Err(FilterErrorNot::Float(clean.to_string())),
    }
}

/// Checks `min <= value <= max`, reporting which side was violated.
///
/// Numbers are rendered with `{:?}` so doubles keep their decimal point
/// (`0.0`, not `0`).
pub fn check_between<T>(value: T, min: T, max: T) -> Result<(), FilterErrorNot>
where
    T: PartialOrd + Debug,
{
    if value < min {
        Err(FilterErrorNot::BelowMin {
            value: format!("{:?}", value),
            min: format!("{:?}", min),
        })
    } else if value > max {
        Err(FilterErrorNot::AboveMax {
            value: format!("{:?}", value),
            max: format!("{:?}", max),
        })
    } else {
        Ok(())
    }
}

/// Maps `Y`/`YES` to `true` and `N`/`NO` to `false`, ignoring case and
/// surrounding whitespace.
pub fn parse_yes_no(input: &str) -> Result<bool, FilterErrorNot> {
    let clean = input.trim();
    if clean.is_empty() {
        return Err(FilterErrorNot::EmptyAnswer);
    }

    let upper = clean.to_uppercase();
    YES_NO_ANSWERS
        .iter()
        .find(|(token, _)| *token == upper)
        .map(|(_, answer)| *answer)
        .ok_or_else(|| FilterErrorNot::Answer(clean.to_string()))
}

/// Accepts the line only when the pattern matches all of it.
pub fn parse_pattern(input: &str, pattern: &Regex) -> Result<String, FilterErrorNot> {
    let whole = match anchored(pattern) {
        Some(re) => re.is_match(input),
        None => pattern
            .find(input)
            .is_some_and(|m| m.start() == 0 && m.end() == input.len()),
    };

    if whole {
        Ok(input.to_string())
    } else {
        Err(FilterErrorNot::Pattern {
            input: input.to_string(),
            pattern: pattern.as_str().to_string(),
        })
    }
}

/// Wraps the pattern as `^(?:...)$` so alternations like `a|ab` still get a
/// chance to match the whole line when the leftmost match is shorter.
fn anchored(pattern: &Regex) -> Option<Regex> {
    Regex::new(&format!("^(?:{})$", pattern.as_str())).ok()
}
