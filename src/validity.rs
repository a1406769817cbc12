//! Offline mirror of HTML constraint validation.
//!
//! The components never validate; the browser enforces every constraint
//! attribute they forward. This module reproduces that outcome for a single
//! string value so form logic can be checked without a DOM.
//!
//! Differences from a live element:
//! - `checked` state is not part of the input, so `required` is not
//!   evaluated for checkbox and radio kinds.
//! - `minlength`/`maxlength` are evaluated as if the user typed the value
//!   (browsers skip them for script-assigned values).
//! - `url` is a syntax check, not the URL parser: `file:///path` (empty
//!   host after `//`) is rejected even though browsers accept it.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

use crate::descriptor::Constraints;
use crate::error::FormError;
use crate::kind::InputKind;

/// The first failing `ValidityState` flag, or `Valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
    TooLong,
    TooShort,
    BadInput,
    RangeUnderflow,
    RangeOverflow,
    StepMismatch,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Validity::Valid => "valid",
            Validity::ValueMissing => "please fill out this field",
            Validity::TypeMismatch => "value does not match the field type",
            Validity::PatternMismatch => "please match the requested format",
            Validity::TooLong => "value is too long",
            Validity::TooShort => "value is too short",
            Validity::BadInput => "please enter a number",
            Validity::RangeUnderflow => "value is below the minimum",
            Validity::RangeOverflow => "value is above the maximum",
            Validity::StepMismatch => "value is not a valid step",
        };
        f.write_str(text)
    }
}

const EMAIL: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
/// Scheme, then either `//` and a non-empty host or an opaque path.
const ABSOLUTE_URL: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*:(?://[^/?#\s]\S*|/?[^/\s]\S*)$";

const STEP_EPSILON: f64 = 1e-9;

impl Constraints {
    /// Evaluate `value` against these constraints for a field of `kind`.
    ///
    /// Errors only when `pattern` is not a valid regular expression.
    pub fn validity(&self, kind: InputKind, value: &str) -> Result<Validity, FormError> {
        if matches!(kind, InputKind::Hidden | InputKind::Submit | InputKind::Reset) {
            return Ok(Validity::Valid);
        }

        if self.required
            && value.is_empty()
            && !matches!(
                kind,
                InputKind::Checkbox | InputKind::Radio | InputKind::Range | InputKind::Color
            )
        {
            return Ok(Validity::ValueMissing);
        }
        if value.is_empty() {
            return Ok(Validity::Valid);
        }

        if !self.matches_type(kind, value)? {
            return Ok(Validity::TypeMismatch);
        }

        if kind.is_text_like() {
            if let Some(pattern) = &self.pattern {
                let anchored = Regex::new(&format!("^(?:{pattern})$"))?;
                let matched = if kind == InputKind::Email && self.multiple {
                    value.split(',').all(|part| anchored.is_match(part.trim()))
                } else {
                    anchored.is_match(value)
                };
                if !matched {
                    return Ok(Validity::PatternMismatch);
                }
            }
            let len = value.encode_utf16().count();
            if self.max_length.is_some_and(|max| len > max as usize) {
                return Ok(Validity::TooLong);
            }
            if self.min_length.is_some_and(|min| len < min as usize) {
                return Ok(Validity::TooShort);
            }
        }

        match kind {
            InputKind::Number | InputKind::Range => Ok(self.numeric_validity(value)),
            k if k.is_ranged() => Ok(self.lexical_validity(value)),
            _ => Ok(Validity::Valid),
        }
    }

    fn matches_type(&self, kind: InputKind, value: &str) -> Result<bool, FormError> {
        let matches = match kind {
            InputKind::Email => {
                let email = Regex::new(EMAIL)?;
                if self.multiple {
                    value.split(',').all(|part| email.is_match(part.trim()))
                } else {
                    email.is_match(value)
                }
            }
            InputKind::Url => Regex::new(ABSOLUTE_URL)?.is_match(value),
            _ => true,
        };
        Ok(matches)
    }

    fn numeric_validity(&self, value: &str) -> Validity {
        let Some(number) = parse_number(value) else {
            return Validity::BadInput;
        };
        let min = self.min.as_deref().and_then(parse_number);
        let max = self.max.as_deref().and_then(parse_number);

        if min.is_some_and(|min| number < min) {
            return Validity::RangeUnderflow;
        }
        if max.is_some_and(|max| number > max) {
            return Validity::RangeOverflow;
        }

        let step = match self.step.as_deref() {
            Some(s) if s.trim().eq_ignore_ascii_case("any") => None,
            Some(s) => parse_number(s).filter(|step| *step > 0.0).or(Some(1.0)),
            None => Some(1.0),
        };
        if let Some(step) = step {
            let steps = (number - min.unwrap_or(0.0)) / step;
            if (steps - steps.round()).abs() > STEP_EPSILON {
                return Validity::StepMismatch;
            }
        }
        Validity::Valid
    }

    /// Date and time values are fixed-width ISO strings, so ordering them
    /// as text orders them in time.
    fn lexical_validity(&self, value: &str) -> Validity {
        if let Some(min) = self.min.as_deref() {
            if value.cmp(min) == Ordering::Less {
                return Validity::RangeUnderflow;
            }
        }
        if let Some(max) = self.max.as_deref() {
            if value.cmp(max) == Ordering::Greater {
                return Validity::RangeOverflow;
            }
        }
        Validity::Valid
    }
}

/// HTML "valid floating-point number": no leading `+`, no `inf`/`NaN`.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.starts_with('+') {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}
