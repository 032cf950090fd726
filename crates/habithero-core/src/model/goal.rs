use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::ValidationError;

/// Something the user is saving toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    /// URL or embedded image data. May be empty.
    #[serde(default)]
    pub image_path: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        image_path: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            target_amount,
            image_path: image_path.into(),
            created_at: clock.timestamp(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::missing("name", "a goal needs a name"));
        }
        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(ValidationError::invalid(
                "targetAmount",
                "must be a positive amount",
            ));
        }
        Ok(())
    }
}

/// A goal that was reached and archived. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievedGoal {
    #[serde(flatten)]
    pub goal: Goal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub achieved_at: DateTime<Utc>,
    /// Successful check-ins made while pursuing the goal.
    pub days_to_achieve: u32,
    /// Total accrued when the goal was archived.
    pub amount_saved: f64,
}

/// Entry of the built-in goal catalog offered when picking a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuggestedGoal {
    pub name: &'static str,
    pub price: f64,
    pub image: &'static str,
}

impl SuggestedGoal {
    pub fn to_goal(&self, clock: &impl Clock) -> Goal {
        Goal::new(self.name, self.price, self.image, clock)
    }
}

static SUGGESTED_GOALS: [SuggestedGoal; 11] = [
    SuggestedGoal {
        name: "JBL PartyBox 110",
        price: 35_000.0,
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&fit=crop",
    },
    SuggestedGoal {
        name: "PlayStation 5",
        price: 60_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "Kugoo electric scooter",
        price: 74_000.0,
        image: "https://images.unsplash.com/photo-1559311043-09f919eb3d2d?w=400&fit=crop",
    },
    SuggestedGoal {
        name: "Trip to Turkey",
        price: 80_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "Online course",
        price: 50_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "Coffee machine",
        price: 45_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "Fur coat",
        price: 120_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "Camera",
        price: 180_000.0,
        image: "",
    },
    SuggestedGoal {
        name: "MacBook Air M4",
        price: 140_000.0,
        image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&fit=crop",
    },
    SuggestedGoal {
        name: "Apartment furniture",
        price: 150_000.0,
        image: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400&fit=crop",
    },
    SuggestedGoal {
        name: "iPhone 17 Pro",
        price: 150_000.0,
        image: "",
    },
];

/// Built-in goals, in display order.
pub fn suggested_goals() -> &'static [SuggestedGoal] {
    &SUGGESTED_GOALS
}
