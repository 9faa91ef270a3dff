//! Display values derived from a [`MetricSet`]. Nothing here feeds back into
//! the metrics themselves.

use strum::{AsRefStr, Display, EnumIter};

use crate::formula::{
    BmiCategory, MetricSet, CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use crate::profile::{ActivityLevel, Goal};

/// Reference ranges listed next to the BMI gauge.
pub const BMI_REFERENCE: [(&str, &str); 4] = [
    ("Underweight", "< 18.5"),
    ("Normal weight", "18.5-24.9"),
    ("Overweight", "25-29.9"),
    ("Obesity", "≥ 30"),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Red,
}

impl BmiCategory {
    pub fn tone(self) -> Tone {
        match self {
            BmiCategory::Underweight => Tone::Blue,
            BmiCategory::NormalWeight => Tone::Green,
            BmiCategory::Overweight => Tone::Yellow,
            BmiCategory::Obese => Tone::Red,
        }
    }
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Loss => "Weight Loss",
            Goal::Maintain => "Weight Maintenance",
            Goal::Gain => "Weight Gain",
        }
    }
}

impl ActivityLevel {
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Lightly Active (1-3 days/week)",
            ActivityLevel::Moderate => "Moderately Active (3-5 days/week)",
            ActivityLevel::Active => "Very Active (6-7 days/week)",
        }
    }
}

/// Fill of the BMI gauge in `[0, 1]`, measured within the band the value
/// falls into. The unbounded top band is always full.
pub fn bmi_progress(bmi: f64) -> f64 {
    let (lower, upper) = crate::formula::bmi_category(bmi).band();
    match upper {
        Some(upper) => ((bmi - lower) / (upper - lower)).clamp(0.0, 1.0),
        None => 1.0,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, AsRefStr, Display, EnumIter)]
pub enum Macronutrient {
    Protein,
    Carbohydrates,
    Fat,
}

impl Macronutrient {
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macronutrient::Protein => PROTEIN_KCAL_PER_GRAM,
            Macronutrient::Carbohydrates => CARBS_KCAL_PER_GRAM,
            Macronutrient::Fat => FAT_KCAL_PER_GRAM,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroShare {
    pub nutrient: Macronutrient,
    pub grams: i32,
    pub calories: i32,
    /// Share of the daily calorie target, in percent.
    pub percent: f64,
}

/// Protein, carbohydrates and fat, in display order.
pub fn macro_shares(metrics: &MetricSet) -> [MacroShare; 3] {
    let share = |nutrient: Macronutrient, grams: i32| {
        let calories = f64::from(grams) * nutrient.kcal_per_gram();
        let percent = if metrics.daily_calories > 0 {
            calories / f64::from(metrics.daily_calories) * 100.0
        } else {
            0.0
        };
        MacroShare {
            nutrient,
            grams,
            calories: calories.round() as i32,
            percent,
        }
    };

    [
        share(Macronutrient::Protein, metrics.macros.protein),
        share(Macronutrient::Carbohydrates, metrics.macros.carbs),
        share(Macronutrient::Fat, metrics.macros.fat),
    ]
}

/// Rounded, labelled view of a [`MetricSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub bmi: String,
    pub bmi_category: BmiCategory,
    pub bmi_tone: Tone,
    pub bmi_progress: f64,
    pub bmr_kcal: i64,
    pub tdee_kcal: i64,
    pub daily_calories: i32,
    pub macros: [MacroShare; 3],
}

impl ResultSummary {
    pub fn new(metrics: &MetricSet) -> Self {
        Self {
            bmi: format!("{:.1}", metrics.bmi),
            bmi_category: metrics.bmi_category,
            bmi_tone: metrics.bmi_category.tone(),
            bmi_progress: bmi_progress(metrics.bmi),
            bmr_kcal: metrics.bmr.round() as i64,
            tdee_kcal: metrics.tdee.round() as i64,
            daily_calories: metrics.daily_calories,
            macros: macro_shares(metrics),
        }
    }
}
