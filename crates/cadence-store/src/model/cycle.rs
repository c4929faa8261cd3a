use serde::{Deserialize, Serialize};

/// Intake cycle of a definition.
///
/// Cyclic fields are kept close to how they are stored: values that fail to
/// parse are a per-definition problem reported at resolution time, not a
/// reason to reject the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cycle {
    /// Always in phase.
    Continuous,
    /// Alternating blocks of `on_weeks` intake weeks and `off_weeks` pause
    /// weeks, counted from the ISO week of `start_date`.
    Cyclic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_weeks: Option<WeekCount>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        off_weeks: Option<WeekCount>,
        #[serde(default)]
        repeat: bool,
    },
}

impl Cycle {
    /// Builds a well-formed cyclic cycle.
    #[must_use]
    pub fn cyclic(start_date: &str, on_weeks: u32, off_weeks: u32, repeat: bool) -> Self {
        Self::Cyclic {
            start_date: Some(start_date.to_string()),
            on_weeks: Some(WeekCount::from(on_weeks)),
            off_weeks: Some(WeekCount::from(off_weeks)),
            repeat,
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Cyclic { .. } => "cyclic",
        }
    }
}

/// A week count as found in the catalog: usually a JSON number, sometimes a
/// string typed by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekCount {
    Number(serde_json::Number),
    Text(String),
}

impl WeekCount {
    /// ## Summary
    /// Returns the count as a non-negative whole number.
    ///
    /// Returns `None` for negative, fractional or non-numeric values.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Number(number) => {
                if let Some(whole) = number.as_u64() {
                    return u32::try_from(whole).ok();
                }
                let float = number.as_f64()?;
                if float.fract() != 0.0 || float < 0.0 || float > f64::from(u32::MAX) {
                    return None;
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "Checked above to be a whole number within u32 range"
                )]
                let whole = float as u32;
                Some(whole)
            }
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<u32> for WeekCount {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}
