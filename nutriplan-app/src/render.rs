use std::fmt;

use itertools::Itertools;
use nutriplan_model::{
    meal_plan::MEAL_PLAN_NOTES, presentation::BMI_REFERENCE, validation::ValidationErrors,
};

use crate::{Notice, NoticeLevel, ResultsView};

const GAUGE_WIDTH: usize = 20;

fn gauge(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled)
    )
}

pub fn notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "+",
        NoticeLevel::Error => "!",
    };
    format!("[{}] {}: {}", marker, notice.title, notice.description)
}

pub fn validation_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .join("\n")
}

/// Plain-text results page.
pub struct ResultsPage<'a>(pub &'a ResultsView);

impl fmt::Display for ResultsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let summary = &view.summary;
        let profile = &view.profile;

        writeln!(f, "Your Nutrition Results")?;
        writeln!(f)?;
        writeln!(f, "Body Mass Index (BMI)")?;
        writeln!(
            f,
            "  {} {} ({})",
            summary.bmi, summary.bmi_category, summary.bmi_tone
        )?;
        writeln!(f, "  {}", gauge(summary.bmi_progress))?;
        writeln!(
            f,
            "  {}",
            BMI_REFERENCE
                .iter()
                .map(|(label, range)| format!("{}: {}", label, range))
                .join(" | ")
        )?;
        writeln!(f)?;
        writeln!(f, "Basal Metabolic Rate (BMR): {} kcal/day", summary.bmr_kcal)?;
        writeln!(
            f,
            "Total Daily Energy Expenditure: {} kcal/day ({})",
            summary.tdee_kcal,
            profile.activity_level().description()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Daily Caloric Needs for {}: {} kcal/day",
            profile.goal().label(),
            summary.daily_calories
        )?;
        for share in summary.macros.iter() {
            writeln!(
                f,
                "  {:<14}{:>4}g ({} kcal, {:.0}%)",
                share.nutrient.to_string(),
                share.grams,
                share.calories,
                share.percent
            )?;
        }

        let plan = view.meal_plan;
        writeln!(f)?;
        writeln!(f, "{}", plan.title)?;
        writeln!(f, "{}", plan.description)?;
        writeln!(f, "Daily Calories: {} kcal", summary.daily_calories)?;
        for meal in plan.meals.iter() {
            writeln!(f)?;
            writeln!(f, "{}", meal.name)?;
            for item in meal.items.iter() {
                writeln!(f, "  • {}", item)?;
            }
        }

        writeln!(f)?;
        write!(f, "Notes:")?;
        for note in MEAL_PLAN_NOTES.iter() {
            write!(f, "\n  - {}", note)?;
        }

        for n in view.notices.iter() {
            write!(f, "\n\n{}", notice(n))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nutriplan_model::validation::{validate, ProfileForm};

    use super::*;

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0.0), "[--------------------]");
        assert_eq!(gauge(0.5), "[##########----------]");
        assert_eq!(gauge(1.0), "[####################]");
        assert_eq!(gauge(3.0), "[####################]");
    }

    #[test]
    fn notices_are_marked_by_level() {
        let n = Notice::new(NoticeLevel::Error, "Error", "Failed to save your data");
        assert_eq!(notice(&n), "[!] Error: Failed to save your data");
    }

    #[test]
    fn validation_errors_list_one_field_per_line() {
        let errors = validate(&ProfileForm {
            weight: "0".to_owned(),
            height: "170".to_owned(),
            age: "120".to_owned(),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(
            validation_errors(&errors),
            "  weight: Weight must be a positive number less than 500kg\n  \
            age: Age must be a positive number less than 120"
        );
    }
}
