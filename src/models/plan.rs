//! Weekly meal plan model
//!
//! The plan maps a slot (week start, day of week, meal type) to a planned
//! meal. The planned meal is a snapshot of the recipe at planning time:
//! later edits to the recipe do not change what the plan says it will cost.
//! Slot keys serialize as `YYYY-MM-DD|Day|MealType` strings so the plan can
//! live as a plain JSON object, but in memory the key is structured and the
//! components are closed enums, so the separator can never appear inside one.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ids::RecipeId;
use super::money::Money;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in plan order
    pub fn all() -> &'static [Day] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(format!("Unknown day: {}", s)),
        }
    }
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    LunchKids,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub fn all() -> &'static [MealType] {
        &[
            Self::Breakfast,
            Self::Lunch,
            Self::LunchKids,
            Self::Dinner,
            Self::Snack,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::LunchKids => "Lunch (Kids)",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "lunch (kids)" | "lunch-kids" | "kids-lunch" => Ok(Self::LunchKids),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(format!("Unknown meal type: {}", s)),
        }
    }
}

/// Key identifying one meal slot in the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanKey {
    /// Monday the slot's week begins on
    pub week_start: NaiveDate,
    pub day: Day,
    pub meal: MealType,
}

impl PlanKey {
    pub fn new(week_start: NaiveDate, day: Day, meal: MealType) -> Self {
        Self {
            week_start,
            day,
            meal,
        }
    }
}

impl fmt::Display for PlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.week_start.format("%Y-%m-%d"),
            self.day,
            self.meal
        )
    }
}

impl FromStr for PlanKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '|');
        let date = parts.next().ok_or_else(|| format!("Bad plan key: {}", s))?;
        let day = parts.next().ok_or_else(|| format!("Bad plan key: {}", s))?;
        let meal = parts.next().ok_or_else(|| format!("Bad plan key: {}", s))?;

        let week_start = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| format!("Bad plan key date '{}': {}", date, e))?;

        Ok(Self {
            week_start,
            day: day.parse()?,
            meal: meal.parse()?,
        })
    }
}

// Serialized as a single string so the plan round-trips as a JSON object.
impl Serialize for PlanKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlanKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A recipe snapshot stored in a plan slot
///
/// Deliberately denormalized: `total_cost` and `servings` are frozen at
/// planning time so the week's planned cost is a historical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub total_cost: Money,
    pub servings: u32,
}

/// The whole plan, every week that has ever been planned
pub type WeeklyPlan = BTreeMap<PlanKey, PlannedMeal>;

/// The Monday of the week containing `date`
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_week_start_for() {
        // 2025-06-02 is a Monday
        assert_eq!(week_start_for(monday()), monday());
        // Wednesday of the same week
        let wed = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(week_start_for(wed), monday());
        // Sunday still belongs to the week that started the previous Monday
        let sun = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        assert_eq!(week_start_for(sun), monday());
        // The next Monday starts a new week
        let next_mon = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(week_start_for(next_mon), next_mon);
    }

    #[test]
    fn test_plan_key_display() {
        let key = PlanKey::new(monday(), Day::Wednesday, MealType::LunchKids);
        assert_eq!(key.to_string(), "2025-06-02|Wednesday|Lunch (Kids)");
    }

    #[test]
    fn test_plan_key_round_trip() {
        for &day in Day::all() {
            for &meal in MealType::all() {
                let key = PlanKey::new(monday(), day, meal);
                let parsed: PlanKey = key.to_string().parse().unwrap();
                assert_eq!(parsed, key);
            }
        }
    }

    #[test]
    fn test_plan_key_rejects_garbage() {
        assert!("2025-06-02|Wednesday".parse::<PlanKey>().is_err());
        assert!("not-a-date|Monday|Dinner".parse::<PlanKey>().is_err());
        assert!("2025-06-02|Someday|Dinner".parse::<PlanKey>().is_err());
        assert!("2025-06-02|Monday|Brunch".parse::<PlanKey>().is_err());
    }

    #[test]
    fn test_plan_serializes_as_json_object() {
        let mut plan = WeeklyPlan::new();
        plan.insert(
            PlanKey::new(monday(), Day::Monday, MealType::Dinner),
            PlannedMeal {
                recipe_id: RecipeId::new(),
                recipe_name: "Tacos".to_string(),
                total_cost: Money::from_cents(1250),
                servings: 4,
            },
        );

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"2025-06-02|Monday|Dinner\""));

        let back: WeeklyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_meal_type_parse_aliases() {
        assert_eq!("lunch (kids)".parse::<MealType>(), Ok(MealType::LunchKids));
        assert_eq!("lunch-kids".parse::<MealType>(), Ok(MealType::LunchKids));
        assert_eq!("DINNER".parse::<MealType>(), Ok(MealType::Dinner));
    }
}
