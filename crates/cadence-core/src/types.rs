//! Closed vocabularies shared by the catalog, the engine and the report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weekday tag used in a definition's day-mask.
///
/// Declaration order is Monday first, matching ISO-8601 week order. Stored tags
/// are read case-insensitively and written in their three-letter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DayTag {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayTag {
    /// Returns the three-letter tag as stored in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    /// Parses a tag from its three-letter form (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "mon" => Self::Mon,
            "tue" => Self::Tue,
            "wed" => Self::Wed,
            "thu" => Self::Thu,
            "fri" => Self::Fri,
            "sat" => Self::Sat,
            "sun" => Self::Sun,
            _ => return None,
        })
    }

    /// Returns all tags in week order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Mon,
            Self::Tue,
            Self::Wed,
            Self::Thu,
            Self::Fri,
            Self::Sat,
            Self::Sun,
        ]
    }
}

impl TryFrom<String> for DayTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.trim()).ok_or_else(|| format!("unknown day tag `{value}`"))
    }
}

impl From<chrono::Weekday> for DayTag {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

impl fmt::Display for DayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intake time-slot.
///
/// The six known slots form a closed, ordered set. Labels that match none of
/// them are kept in [`TimeSlot::Other`] and sort after every known slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Forenoon,
    Noon,
    Afternoon,
    Evening,
    Night,
    Other(String),
}

/// Rank assigned to slots outside the known set.
pub const UNKNOWN_SLOT_RANK: u16 = 999;

impl TimeSlot {
    /// Parses a slot label. English labels are matched case-insensitively and
    /// the source-locale labels (`Morgen`, `Vormittag`, ...) are accepted too.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "morning" | "morgen" => Self::Morning,
            "forenoon" | "vormittag" => Self::Forenoon,
            "noon" | "mittag" => Self::Noon,
            "afternoon" | "nachmittag" => Self::Afternoon,
            "evening" | "abend" => Self::Evening,
            "night" | "nacht" => Self::Night,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Canonical storage label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Morning => "morning",
            Self::Forenoon => "forenoon",
            Self::Noon => "noon",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
            Self::Other(label) => label,
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Morning => "Morning",
            Self::Forenoon => "Forenoon",
            Self::Noon => "Noon",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
            Self::Other(label) => label,
        }
    }

    /// Sort rank: 1 (Morning) through 6 (Night), [`UNKNOWN_SLOT_RANK`] otherwise.
    #[must_use]
    pub const fn rank(&self) -> u16 {
        match self {
            Self::Morning => 1,
            Self::Forenoon => 2,
            Self::Noon => 3,
            Self::Afternoon => 4,
            Self::Evening => 5,
            Self::Night => 6,
            Self::Other(_) => UNKNOWN_SLOT_RANK,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A time-slot label as written in the catalog, together with the slot it
/// names.
///
/// The label is written back exactly as it was read, so `Morgen` stays
/// `Morgen` when the catalog is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TimeLabel {
    slot: TimeSlot,
    raw: String,
}

impl TimeLabel {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            slot: TimeSlot::parse(&raw),
            raw,
        }
    }

    #[must_use]
    pub const fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    /// The label as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<TimeSlot> for TimeLabel {
    fn from(slot: TimeSlot) -> Self {
        Self {
            raw: slot.as_str().to_string(),
            slot,
        }
    }
}

impl From<String> for TimeLabel {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.raw
    }
}

impl PartialEq<TimeSlot> for TimeLabel {
    fn eq(&self, other: &TimeSlot) -> bool {
        self.slot == *other
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slot.label())
    }
}
