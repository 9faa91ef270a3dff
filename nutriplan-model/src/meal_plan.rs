use crate::profile::Goal;

#[derive(Debug, PartialEq)]
pub struct Meal {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct MealPlan {
    pub title: &'static str,
    pub description: &'static str,
    pub meals: [Meal; 4],
}

/// General advice shown under every meal plan.
pub const MEAL_PLAN_NOTES: [&str; 4] = [
    "Adjust portion sizes based on your hunger levels and activity.",
    "Stay hydrated by drinking 8-10 glasses of water daily.",
    "These are sample recommendations. Consult a nutritionist for a personalized plan.",
    "Include seasonal fruits and vegetables for better nutrition.",
];

static WEIGHT_LOSS: MealPlan = MealPlan {
    title: "Weight Loss Meal Plan",
    description: "Lower carb, higher protein diet with focus on whole foods",
    meals: [
        Meal {
            name: "Breakfast",
            items: &[
                "1 bowl Moong Dal Chilla with mint chutney",
                "1 cup green tea or black coffee",
                "1/2 cup low-fat yogurt",
            ],
        },
        Meal {
            name: "Lunch",
            items: &[
                "1 bowl mixed vegetable dal",
                "2 multigrain rotis",
                "1 bowl cucumber raita",
                "1 bowl vegetable salad",
            ],
        },
        Meal {
            name: "Snack",
            items: &[
                "1 apple or 1 orange",
                "Handful of roasted chana",
                "1 cup green tea",
            ],
        },
        Meal {
            name: "Dinner",
            items: &[
                "1 bowl vegetable curry (no cream)",
                "1 multigrain roti",
                "1 bowl mixed vegetables",
                "1 small bowl dal",
            ],
        },
    ],
};

static WEIGHT_MAINTENANCE: MealPlan = MealPlan {
    title: "Weight Maintenance Meal Plan",
    description: "Balanced diet with moderate portions",
    meals: [
        Meal {
            name: "Breakfast",
            items: &[
                "2 idlis with sambhar and chutney",
                "OR 1 bowl poha with vegetables",
                "1 cup tea or coffee",
                "1 fruit (apple or orange)",
            ],
        },
        Meal {
            name: "Lunch",
            items: &[
                "1.5 cups rice or 3 chapatis",
                "1 bowl dal",
                "1 bowl vegetable curry",
                "1 bowl salad",
                "1 bowl curd",
            ],
        },
        Meal {
            name: "Snack",
            items: &[
                "1 bowl sprouts chaat",
                "OR 1 vegetable sandwich",
                "1 cup chai",
                "Handful of nuts",
            ],
        },
        Meal {
            name: "Dinner",
            items: &[
                "2-3 chapatis",
                "1 bowl dal or rajma",
                "1 bowl vegetable curry",
                "1 bowl curd or raita",
            ],
        },
    ],
};

static WEIGHT_GAIN: MealPlan = MealPlan {
    title: "Weight Gain Meal Plan",
    description: "Higher calorie, nutrient-dense foods with adequate protein",
    meals: [
        Meal {
            name: "Breakfast",
            items: &[
                "2 stuffed parathas with ghee",
                "1 bowl paneer bhurji",
                "1 glass full-fat milk with nuts",
                "1 banana",
            ],
        },
        Meal {
            name: "Lunch",
            items: &[
                "2 cups rice",
                "1 bowl rajma or chole",
                "2-3 chapatis with ghee",
                "1 bowl vegetable curry",
                "1 glass buttermilk",
            ],
        },
        Meal {
            name: "Snack",
            items: &[
                "1 mango milkshake or banana shake",
                "2 samosas or 1 plate pakoras",
                "1 cup chai with full-fat milk",
            ],
        },
        Meal {
            name: "Dinner",
            items: &[
                "2 cups biryani or pulao",
                "1 bowl paneer butter masala",
                "2-3 butter naans",
                "1 bowl mixed vegetable curry",
                "1 bowl sweet (kheer or halwa)",
            ],
        },
    ],
};

pub fn meal_plan_for(goal: Goal) -> &'static MealPlan {
    match goal {
        Goal::Loss => &WEIGHT_LOSS,
        Goal::Maintain => &WEIGHT_MAINTENANCE,
        Goal::Gain => &WEIGHT_GAIN,
    }
}
