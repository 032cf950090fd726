//! Daily accrual rate of a habit.

use crate::model::{Frequency, Habit};

/// Days per week, used to spread weekly spending over single days.
const DAYS_PER_WEEK: f64 = 7.0;

/// Amount credited to savings for one successful day.
///
/// Missing repetition counts count as 1. Negative or NaN costs are not
/// rejected here; they flow through the arithmetic unchanged.
pub fn daily_savings(habit: &Habit) -> f64 {
    let cost = habit.cost_per_occurrence;
    match habit.frequency {
        Frequency::Daily => cost,
        Frequency::Weekly => cost / DAYS_PER_WEEK,
        Frequency::MultipleDaily => cost * f64::from(habit.times_per_day.unwrap_or(1)),
        Frequency::MultipleWeekly => {
            cost * f64::from(habit.times_per_week.unwrap_or(1)) / DAYS_PER_WEEK
        }
        Frequency::Unknown => 0.0,
    }
}
