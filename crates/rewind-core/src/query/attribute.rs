use std::str::FromStr;

use strum::{EnumString, IntoStaticStr};

use crate::score::ScoreRecord;

/// Characters that make up comparison operators.
const OPERATOR_CHARS: [char; 3] = ['>', '<', '='];

/// Numeric score attributes addressable from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum Attribute {
    #[strum(serialize = "pp")]
    Pp,
    #[strum(serialize = "maxpp")]
    MaxPp,
    #[strum(serialize = "combo")]
    Combo,
    #[strum(serialize = "acc")]
    Accuracy,
    #[strum(serialize = "sr")]
    StarRating,
    #[strum(serialize = "bpm")]
    Bpm,
    #[strum(serialize = "cs")]
    CircleSize,
    #[strum(serialize = "hp")]
    HpDrain,
    #[strum(serialize = "ar")]
    ApproachRate,
    #[strum(serialize = "od")]
    OverallDifficulty,
}

impl Attribute {
    /// Value of this attribute on `score`; beatmap attributes need a beatmap.
    pub fn value(&self, score: &ScoreRecord) -> Option<f64> {
        let beatmap = score.beatmap.as_ref();
        match self {
            Self::Pp => Some(score.current_pp),
            Self::MaxPp => Some(score.max_pp),
            Self::Combo => Some(f64::from(score.max_combo)),
            Self::Accuracy => Some(score.accuracy()),
            Self::StarRating => Some(score.star_rating),
            Self::Bpm => Some(score.bpm),
            Self::CircleSize => beatmap.map(|b| b.circle_size),
            Self::HpDrain => beatmap.map(|b| b.hp_drain),
            Self::ApproachRate => beatmap.map(|b| b.approach_rate),
            Self::OverallDifficulty => beatmap.map(|b| b.overall_difficulty),
        }
    }

    pub fn key(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Comparison {
    #[strum(serialize = ">=")]
    GreaterOrEqual,
    #[strum(serialize = "<=")]
    LessOrEqual,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = "=")]
    Equal,
}

impl Comparison {
    /// Compare `actual` against `expected` with plain float semantics.
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, actual: f64, expected: f64) -> bool {
        match self {
            Self::GreaterOrEqual => actual >= expected,
            Self::LessOrEqual => actual <= expected,
            Self::Greater => actual > expected,
            Self::Less => actual < expected,
            Self::Equal => actual == expected,
        }
    }
}

/// Whether a term contains a comparison operator.
pub fn is_attribute_term(term: &str) -> bool {
    term.contains(OPERATOR_CHARS)
}

/// A parsed `<name><op><number>` term.
///
/// Any missing or unrecognised part leaves the filter unsatisfiable rather
/// than failing the query.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeFilter {
    pub attribute: Option<Attribute>,
    pub comparison: Option<Comparison>,
    pub value: Option<f64>,
}

impl AttributeFilter {
    pub fn parse(term: &str) -> Self {
        let operator = first_operator_run(term);
        let number = first_number(term);

        let mut name = term.to_string();
        if let Some(op) = operator {
            name = name.replacen(op, "", 1);
        }
        if let Some(num) = number {
            name = name.replacen(num, "", 1);
        }

        Self {
            attribute: Attribute::from_str(&name).ok(),
            comparison: operator.and_then(|op| Comparison::from_str(op).ok()),
            value: number.and_then(|num| num.parse().ok()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.attribute.is_some() && self.comparison.is_some() && self.value.is_some()
    }

    pub fn matches(&self, score: &ScoreRecord) -> bool {
        let (Some(attribute), Some(comparison), Some(expected)) =
            (self.attribute, self.comparison, self.value)
        else {
            return false;
        };

        attribute
            .value(score)
            .is_some_and(|actual| comparison.evaluate(actual, expected))
    }
}

/// First maximal run of operator characters, e.g. `>=` in `acc>=95`.
fn first_operator_run(term: &str) -> Option<&str> {
    let start = term.find(OPERATOR_CHARS)?;
    let rest = &term[start..];
    let len = rest
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// First decimal literal (`digits` or `digits.digits`).
fn first_number(term: &str) -> Option<&str> {
    let start = term.find(|c: char| c.is_ascii_digit())?;
    let rest = &term[start..];
    let int_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let after = &rest[int_len..];
    if let Some(fraction) = after.strip_prefix('.') {
        let frac_len = fraction
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(fraction.len());
        if frac_len > 0 {
            return Some(&rest[..int_len + 1 + frac_len]);
        }
    }
    Some(&rest[..int_len])
}
