//! Energy and body-composition formulas.
//!
//! Every function here is pure and assumes its inputs passed
//! [`crate::validation::validate`]. Rounding to whole numbers uses
//! [`f64::round`], i.e. half away from zero.

use strum::{AsRefStr, Display, EnumIter};

use crate::profile::{ActivityLevel, Gender, Goal, UserProfile};

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Daily calorie offset applied for the loss and gain goals.
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, AsRefStr, Display, EnumIter)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

/// Upper bound (exclusive) of each bounded BMI band. Anything above the last
/// bound is [`BmiCategory::Obese`].
const BMI_BANDS: [(BmiCategory, f64); 3] = [
    (BmiCategory::Underweight, 18.5),
    (BmiCategory::NormalWeight, 25.0),
    (BmiCategory::Overweight, 30.0),
];

impl BmiCategory {
    /// Inclusive lower and exclusive upper bound of the band. The top band is
    /// unbounded.
    pub fn band(self) -> (f64, Option<f64>) {
        let position = BMI_BANDS.iter().position(|(category, _)| *category == self);
        let lower = match position {
            Some(0) => 0.0,
            Some(i) => BMI_BANDS[i - 1].1,
            None => BMI_BANDS[BMI_BANDS.len() - 1].1,
        };
        (lower, position.map(|i| BMI_BANDS[i].1))
    }
}

/// Percentage split of the daily calories between macronutrients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Gender {
    fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
        }
    }
}

impl Goal {
    fn calorie_offset(self) -> f64 {
        match self {
            Goal::Loss => -GOAL_CALORIE_OFFSET,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_CALORIE_OFFSET,
        }
    }

    pub fn macro_split(self) -> MacroSplit {
        match self {
            Goal::Loss => MacroSplit {
                protein: 0.30,
                fat: 0.30,
                carbs: 0.40,
            },
            Goal::Maintain => MacroSplit {
                protein: 0.25,
                fat: 0.30,
                carbs: 0.45,
            },
            Goal::Gain => MacroSplit {
                protein: 0.25,
                fat: 0.25,
                carbs: 0.50,
            },
        }
    }
}

/// Daily macronutrient targets in grams.
///
/// Each value is rounded on its own, so converting them back to calories does
/// not have to add up to the daily calorie target exactly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Macros {
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    BMI_BANDS
        .iter()
        .find(|(_, upper)| bmi < *upper)
        .map_or(BmiCategory::Obese, |(category, _)| *category)
}

/// Basal metabolic rate in kcal/day, Mifflin-St Jeor equation.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset()
}

pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

pub fn daily_calories(tdee: f64, goal: Goal) -> i32 {
    (tdee + goal.calorie_offset()).round() as i32
}

pub fn macros(daily_calories: i32, goal: Goal) -> Macros {
    let split = goal.macro_split();
    let calories = f64::from(daily_calories);
    let grams = |share: f64, kcal_per_gram: f64| (calories * share / kcal_per_gram).round() as i32;

    Macros {
        protein: grams(split.protein, PROTEIN_KCAL_PER_GRAM),
        fat: grams(split.fat, FAT_KCAL_PER_GRAM),
        carbs: grams(split.carbs, CARBS_KCAL_PER_GRAM),
    }
}

/// Everything derived from a [`UserProfile`]. Recomputed for every results
/// view, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSet {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: i32,
    pub macros: Macros,
}

impl MetricSet {
    pub fn compute(profile: &UserProfile) -> Self {
        let bmi = bmi(profile.weight_kg(), profile.height_cm());
        let bmr = bmr(
            profile.weight_kg(),
            profile.height_cm(),
            profile.age(),
            profile.gender(),
        );
        let tdee = tdee(bmr, profile.activity_level());
        let daily_calories = daily_calories(tdee, profile.goal());

        Self {
            bmi,
            bmi_category: bmi_category(bmi),
            bmr,
            tdee,
            daily_calories,
            macros: macros(daily_calories, profile.goal()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn bmi_divides_by_height_in_metres_squared() {
        let test_data = [(70.0, 170.0), (55.5, 162.0), (120.0, 199.9), (0.1, 0.1)];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            assert_eq!(
                bmi(weight, height),
                weight / ((height / 100.0) * (height / 100.0)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn bmi_category_boundaries() {
        let test_data = [
            (18.49, BmiCategory::Underweight),
            (18.5, BmiCategory::NormalWeight),
            (24.99, BmiCategory::NormalWeight),
            (25.0, BmiCategory::Overweight),
            (29.99, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
            (55.0, BmiCategory::Obese),
        ];

        for (i, (bmi, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(bmi_category(bmi), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn bmi_category_labels() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Obese.as_ref(), "Obese");
    }

    #[test]
    fn bmi_bands_are_contiguous() {
        assert_eq!(BmiCategory::Underweight.band(), (0.0, Some(18.5)));
        assert_eq!(BmiCategory::NormalWeight.band(), (18.5, Some(25.0)));
        assert_eq!(BmiCategory::Overweight.band(), (25.0, Some(30.0)));
        assert_eq!(BmiCategory::Obese.band(), (30.0, None));
    }

    #[test]
    fn bmr_mifflin_st_jeor() {
        // 700 + 1062.5 - 150 = 1612.5 before the gender offset
        assert_eq!(bmr(70.0, 170.0, 30, Gender::Male), 1617.5);
        assert_eq!(bmr(70.0, 170.0, 30, Gender::Female), 1451.5);
    }

    #[test]
    fn tdee_applies_activity_multiplier() {
        assert_close(tdee(1673.5, ActivityLevel::Sedentary), 2008.2);
        assert_close(tdee(1000.0, ActivityLevel::Light), 1375.0);
        assert_close(tdee(1000.0, ActivityLevel::Moderate), 1550.0);
        assert_close(tdee(1000.0, ActivityLevel::Active), 1725.0);
    }

    #[test]
    fn daily_calories_per_goal() {
        let tdee = tdee(1673.5, ActivityLevel::Sedentary);
        assert_eq!(daily_calories(tdee, Goal::Loss), 1508);
        assert_eq!(daily_calories(tdee, Goal::Gain), 2508);
        assert_eq!(daily_calories(tdee, Goal::Maintain), 2008);
    }

    #[test]
    fn daily_calories_round_half_away_from_zero() {
        let test_data = [
            (2000.5, Goal::Maintain, 2001),
            (2000.49, Goal::Maintain, 2000),
            (2000.5, Goal::Loss, 1501),
            (2000.5, Goal::Gain, 2501),
            (499.5, Goal::Loss, -1),
        ];

        for (i, (tdee, goal, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(daily_calories(tdee, goal), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn macros_for_weight_loss() {
        assert_eq!(
            macros(1508, Goal::Loss),
            Macros {
                protein: 113,
                fat: 50,
                carbs: 151
            }
        );
    }

    #[test]
    fn macros_for_gain_and_maintenance() {
        assert_eq!(
            macros(2000, Goal::Gain),
            Macros {
                protein: 125,
                fat: 56,
                carbs: 250
            }
        );
        assert_eq!(
            macros(2000, Goal::Maintain),
            Macros {
                protein: 125,
                fat: 67,
                carbs: 225
            }
        );
    }

    #[test]
    fn macro_grams_need_not_resum_to_calories() {
        let macros = macros(1508, Goal::Loss);
        let calories = macros.protein * 4 + macros.fat * 9 + macros.carbs * 4;
        assert_eq!(calories, 1506);
    }

    #[test]
    fn macro_splits_cover_all_calories() {
        for goal in Goal::iter() {
            let split = goal.macro_split();
            assert_close(split.protein + split.fat + split.carbs, 1.0);
        }
    }

    #[test]
    fn metric_set_for_reference_profile() {
        let profile = UserProfile::new(
            70.0,
            170.0,
            30,
            Gender::Male,
            ActivityLevel::Sedentary,
            Goal::Loss,
        );
        let metrics = MetricSet::compute(&profile);

        assert!((metrics.bmi - 24.2).abs() < 0.05);
        assert_eq!(metrics.bmi_category, BmiCategory::NormalWeight);
        assert_eq!(metrics.bmr, 1617.5);
        assert_close(metrics.tdee, 1941.0);
        assert_eq!(metrics.daily_calories, 1441);
        assert_eq!(
            metrics.macros,
            Macros {
                protein: 108,
                fat: 48,
                carbs: 144
            }
        );
    }

    #[test]
    fn reference_profile_calories_per_goal() {
        let test_data = [
            (Goal::Loss, 1441),
            (Goal::Maintain, 1941),
            (Goal::Gain, 2441),
        ];

        for (i, (goal, expected)) in test_data.into_iter().enumerate() {
            let profile = UserProfile::new(
                70.0,
                170.0,
                30,
                Gender::Male,
                ActivityLevel::Sedentary,
                goal,
            );
            assert_eq!(
                MetricSet::compute(&profile).daily_calories,
                expected,
                "Test case #{}",
                i
            );
        }
    }
}
