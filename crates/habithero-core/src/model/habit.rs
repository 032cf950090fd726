use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::ValidationError;

/// The habit the user is trying to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitType {
    Smoking,
    Alcohol,
    Coffee,
    EnergyDrinks,
    FastFood,
    Other,
}

impl HabitType {
    pub const ALL: [HabitType; 6] = [
        HabitType::Smoking,
        HabitType::Alcohol,
        HabitType::Coffee,
        HabitType::EnergyDrinks,
        HabitType::FastFood,
        HabitType::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HabitType::Smoking => "Smoking",
            HabitType::Alcohol => "Alcohol",
            HabitType::Coffee => "Coffee",
            HabitType::EnergyDrinks => "Energy drinks",
            HabitType::FastFood => "Fast food",
            HabitType::Other => "Other",
        }
    }
}

impl FromStr for HabitType {
    type Err = ValidationError;

    /// Accepts `SMOKING`, `smoking`, `energy-drinks`, `energy_drinks`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "SMOKING" => Ok(HabitType::Smoking),
            "ALCOHOL" => Ok(HabitType::Alcohol),
            "COFFEE" => Ok(HabitType::Coffee),
            "ENERGY_DRINKS" => Ok(HabitType::EnergyDrinks),
            "FAST_FOOD" => Ok(HabitType::FastFood),
            "OTHER" => Ok(HabitType::Other),
            _ => Err(ValidationError::invalid("type", format!("unknown habit type '{s}'"))),
        }
    }
}

impl fmt::Display for HabitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How often the habit used to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    MultipleDaily,
    MultipleWeekly,
    /// Any value this version does not recognize. Accrues nothing.
    #[serde(other)]
    Unknown,
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MULTIPLE_DAILY" => Ok(Frequency::MultipleDaily),
            "MULTIPLE_WEEKLY" => Ok(Frequency::MultipleWeekly),
            _ => Err(ValidationError::invalid(
                "frequency",
                format!("unknown frequency '{s}'"),
            )),
        }
    }
}

fn normalize_token(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    /// Free-text label, required when `habit_type` is `Other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    pub cost_per_occurrence: f64,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_per_week: Option<u32>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a habit with a fresh id and no repetition counts.
    pub fn new(
        habit_type: HabitType,
        cost_per_occurrence: f64,
        frequency: Frequency,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            habit_type,
            custom_name: None,
            cost_per_occurrence,
            frequency,
            times_per_day: None,
            times_per_week: None,
            created_at: clock.timestamp(),
        }
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// Set the repetition count for the multiple-times frequencies.
    ///
    /// The count lands in `times_per_day` or `times_per_week` depending on
    /// the frequency; for the other frequencies it is dropped.
    pub fn with_times(mut self, times: u32) -> Self {
        match self.frequency {
            Frequency::MultipleDaily => self.times_per_day = Some(times),
            Frequency::MultipleWeekly => self.times_per_week = Some(times),
            _ => {}
        }
        self
    }

    /// Name shown to the user: the custom name for `Other`, the type label otherwise.
    pub fn display_name(&self) -> &str {
        match (&self.habit_type, &self.custom_name) {
            (HabitType::Other, Some(name)) if !name.trim().is_empty() => name,
            (kind, _) => kind.label(),
        }
    }

    /// Check the invariants a habit form must satisfy before it is saved.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.cost_per_occurrence.is_finite() || self.cost_per_occurrence < 0.0 {
            return Err(ValidationError::invalid(
                "costPerOccurrence",
                "must be a non-negative amount",
            ));
        }
        if self.habit_type == HabitType::Other
            && self.custom_name.as_deref().map_or(true, |n| n.trim().is_empty())
        {
            return Err(ValidationError::missing("customName", "required for habit type OTHER"));
        }
        match self.frequency {
            Frequency::MultipleDaily if !matches!(self.times_per_day, Some(n) if n > 0) => Err(
                ValidationError::missing("timesPerDay", "required for MULTIPLE_DAILY"),
            ),
            Frequency::MultipleWeekly if !matches!(self.times_per_week, Some(n) if n > 0) => Err(
                ValidationError::missing("timesPerWeek", "required for MULTIPLE_WEEKLY"),
            ),
            Frequency::Unknown => Err(ValidationError::invalid("frequency", "unknown frequency")),
            _ => Ok(()),
        }
    }
}
