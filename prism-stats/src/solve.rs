//! Solve attempts as handed to the statistics engine.

use std::str::FromStr;

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr, VariantNames};
use web_time::SystemTime;

use crate::{EffectiveTime, Error, Millis, PLUS_TWO_MILLIS, Result};

/// Opaque, unique identifier of a solve
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct SolveId(String);

impl From<&str> for SolveId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Puzzle discipline tag, e.g. `3x3`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Discipline(String);

impl From<&str> for Discipline {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Penalty annotation on a solve
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    IntoStaticStr,
    VariantNames,
    EnumIter,
)]
pub enum Penalty {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "+2")]
    PlusTwo,
    #[strum(serialize = "DNF")]
    Dnf,
}

impl Penalty {
    /// Resolve a raw time under this penalty
    pub const fn resolve(self, raw_time: Millis) -> EffectiveTime {
        match self {
            Self::None => EffectiveTime::Time(raw_time),
            Self::PlusTwo => EffectiveTime::Time(raw_time.saturating_add(PLUS_TWO_MILLIS)),
            Self::Dnf => EffectiveTime::Dnf,
        }
    }

    /// The tag this penalty is stored and displayed as
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

impl FromStr for Penalty {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "none" => Ok(Self::None),
            "+2" => Ok(Self::PlusTwo),
            "DNF" | "dnf" => Ok(Self::Dnf),
            _ => Err(Error::InvalidPenalty {
                input: input.to_owned(),
            }),
        }
    }
}

impl TryFrom<&str> for Penalty {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        input.parse()
    }
}

impl Serialize for Penalty {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.tag().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Penalty {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// A single timed solve
///
/// `raw_time` is the measured duration; penalties are applied on demand
/// through [`SolveAttempt::effective_time`] so the raw value stays available
/// after a penalty is changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveAttempt {
    pub id: SolveId,
    #[serde(rename = "puzzleType")]
    pub discipline: Discipline,
    #[serde(rename = "timeMillis")]
    pub raw_time: Millis,
    #[serde(default)]
    pub penalty: Penalty,
    pub recorded_at: SystemTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scramble: Option<String>,
}

impl SolveAttempt {
    pub const fn effective_time(&self) -> EffectiveTime {
        self.penalty.resolve(self.raw_time)
    }

    pub const fn is_dnf(&self) -> bool {
        matches!(self.penalty, Penalty::Dnf)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_penalty_resolution() {
        assert_eq!(Penalty::None.resolve(12_345), EffectiveTime::Time(12_345));
        assert_eq!(Penalty::PlusTwo.resolve(12_345), EffectiveTime::Time(14_345));
        assert_eq!(Penalty::Dnf.resolve(12_345), EffectiveTime::Dnf);

        // Zero is a valid raw time
        assert_eq!(Penalty::PlusTwo.resolve(0), EffectiveTime::Time(2_000));
    }

    #[test]
    fn test_penalty_tags() {
        for penalty in Penalty::iter() {
            assert_eq!(penalty.tag().parse::<Penalty>(), Ok(penalty));
            assert_eq!(penalty.to_string(), penalty.tag());
            assert_eq!(<&'static str>::from(penalty), penalty.tag());
        }

        assert_eq!("dnf".parse::<Penalty>(), Ok(Penalty::Dnf));
        assert_eq!(
            "+3".parse::<Penalty>(),
            Err(Error::InvalidPenalty {
                input: "+3".to_owned()
            })
        );
        assert_eq!(Penalty::VARIANTS, ["none", "+2", "DNF"]);
    }

    #[test]
    fn test_attempt_json() {
        let json = r#"{
            "id": "a1",
            "puzzleType": "3x3",
            "timeMillis": 9000,
            "penalty": "+2",
            "recordedAt": { "secs_since_epoch": 10, "nanos_since_epoch": 0 }
        }"#;

        let attempt: SolveAttempt = serde_json::from_str(json).unwrap();
        assert_eq!(*attempt.id, "a1");
        assert_eq!(attempt.discipline, Discipline::from("3x3"));
        assert_eq!(attempt.effective_time(), EffectiveTime::Time(11_000));
        assert!(!attempt.is_dnf());
        assert_eq!(attempt.scramble, None);
    }

    #[test]
    fn test_attempt_json_rejects_malformed_input() {
        let negative = r#"{
            "id": "a1",
            "puzzleType": "3x3",
            "timeMillis": -5,
            "recordedAt": { "secs_since_epoch": 10, "nanos_since_epoch": 0 }
        }"#;
        assert!(serde_json::from_str::<SolveAttempt>(negative).is_err());

        let bad_penalty = r#"{
            "id": "a1",
            "puzzleType": "3x3",
            "timeMillis": 5,
            "penalty": "+4",
            "recordedAt": { "secs_since_epoch": 10, "nanos_since_epoch": 0 }
        }"#;
        let error = serde_json::from_str::<SolveAttempt>(bad_penalty).unwrap_err();
        assert!(error.to_string().contains("`+4` is not a valid penalty"));
    }
}
