use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Millis;

/// A time after penalties have been applied
///
/// Every finite time orders below [`EffectiveTime::Dnf`], so sorting a set of
/// effective times puts the DNFs at the tail. Window averages reuse this type:
/// an average either resolves to a time or is DNF-saturated.
///
/// Serialized adjacently tagged, e.g. `{"kind":"time","millis":10500}` or
/// `{"kind":"dnf"}`, so a DNF can never be mistaken for a number or for `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "millis", rename_all = "snake_case")]
pub enum EffectiveTime {
    Time(Millis),
    Dnf,
}

impl EffectiveTime {
    /// The finite time, if any
    pub const fn millis(self) -> Option<Millis> {
        match self {
            Self::Time(millis) => Some(millis),
            Self::Dnf => None,
        }
    }

    pub const fn is_dnf(self) -> bool {
        matches!(self, Self::Dnf)
    }
}

impl From<Millis> for EffectiveTime {
    fn from(millis: Millis) -> Self {
        Self::Time(millis)
    }
}

impl Display for EffectiveTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(millis) => write!(f, "{millis}ms"),
            Self::Dnf => write!(f, "DNF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dnf_orders_last() {
        let mut times = vec![
            EffectiveTime::Dnf,
            EffectiveTime::Time(u64::MAX),
            EffectiveTime::Time(0),
            EffectiveTime::Dnf,
            EffectiveTime::Time(9_000),
        ];
        times.sort();

        assert_eq!(
            times,
            [
                EffectiveTime::Time(0),
                EffectiveTime::Time(9_000),
                EffectiveTime::Time(u64::MAX),
                EffectiveTime::Dnf,
                EffectiveTime::Dnf,
            ]
        );
    }

    #[test]
    fn test_json_representation() {
        assert_eq!(
            serde_json::to_string(&EffectiveTime::Time(10_500)).unwrap(),
            r#"{"kind":"time","millis":10500}"#
        );
        assert_eq!(
            serde_json::to_string(&EffectiveTime::Dnf).unwrap(),
            r#"{"kind":"dnf"}"#
        );

        let parsed: EffectiveTime = serde_json::from_str(r#"{"kind":"dnf"}"#).unwrap();
        assert!(parsed.is_dnf());
        assert_eq!(parsed.millis(), None);
    }
}
