//! Shareable text form of a [`ParameterSet`], meant for a URL fragment:
//!
//! ```text
//! friction=0.5&exponent=0&counts=200,1000,200,0&matrix=-20,0,-68,0,...
//! ```
//!
//! Decoding never fails. Unknown keys are ignored, a missing key leaves
//! the parameter as it was, short lists update only their leading
//! entries, and unparseable numbers read as zero.

use plife_core::{GROUP_COUNT, GroupColor, ParamKey, ParameterSet};

const FRICTION: &str = "friction";
const EXPONENT: &str = "exponent";
const COUNTS: &str = "counts";
const MATRIX: &str = "matrix";

/// Encode every parameter, matrix row-major
pub fn encode(params: &ParameterSet) -> String {
    let counts = join(params.counts().iter());
    let matrix = join(params.matrix().iter().flatten());
    format!(
        "{FRICTION}={}&{EXPONENT}={}&{COUNTS}={counts}&{MATRIX}={matrix}",
        params.friction(),
        params.exponent(),
    )
}

fn join<T: std::fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

/// The fields present in a decoded state string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub friction: Option<f64>,
    pub exponent: Option<f64>,
    pub counts: Option<Vec<f64>>,
    /// Row-major, possibly shorter than the full matrix
    pub matrix: Option<Vec<f64>>,
}

impl StateUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the present fields into `params`, clamping as usual.
    /// List entries past the number of groups/cells are ignored.
    pub fn apply(&self, params: &mut ParameterSet) {
        if let Some(friction) = self.friction {
            params.set(ParamKey::Friction, friction);
        }
        if let Some(exponent) = self.exponent {
            params.set(ParamKey::Exponent, exponent);
        }
        if let Some(counts) = &self.counts {
            for (color, &count) in GroupColor::ALL.iter().zip(counts) {
                params.set(ParamKey::Count(*color), count);
            }
        }
        if let Some(cells) = &self.matrix {
            for (k, &strength) in cells.iter().enumerate().take(GROUP_COUNT * GROUP_COUNT) {
                let key = ParamKey::Matrix {
                    receiver: GroupColor::ALL[k / GROUP_COUNT],
                    sender: GroupColor::ALL[k % GROUP_COUNT],
                };
                params.set(key, strength);
            }
        }
    }
}

/// Parse a state string. A leading `#` is skipped; later occurrences of
/// a key win over earlier ones.
pub fn decode(text: &str) -> StateUpdate {
    let text = text.trim();
    let text = text.strip_prefix('#').unwrap_or(text);

    let mut update = StateUpdate::default();
    for pair in text.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key.trim() {
            FRICTION => update.friction = Some(parse_number(value)),
            EXPONENT => update.exponent = Some(parse_number(value)),
            COUNTS => update.counts = Some(parse_list(value)),
            MATRIX => update.matrix = Some(parse_list(value)),
            _ => {}
        }
    }
    update
}

/// Decode `text` and apply it to `params` in one step
pub fn decode_into(text: &str, params: &mut ParameterSet) {
    decode(text).apply(params);
}

fn parse_list(value: &str) -> Vec<f64> {
    let value = value.replace("%2C", ",").replace("%2c", ",");
    value.split(',').map(parse_number).collect()
}

/// Lenient float parse: the longest numeric prefix, or zero
fn parse_number(token: &str) -> f64 {
    let token = token.trim();
    if let Ok(value) = token.parse::<f64>() {
        return value;
    }
    numeric_prefix(token).parse().unwrap_or(0.0)
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, stopping at the first byte
/// that cannot continue the number
fn numeric_prefix(token: &str) -> &str {
    let bytes = token.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits = |from: usize| {
        bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let int_digits = digits(end);
    end += int_digits;
    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac = digits(end + 1);
        if frac > 0 || int_digits > 0 {
            end += 1 + frac;
            mantissa_digits += frac;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    &token[..end]
}
