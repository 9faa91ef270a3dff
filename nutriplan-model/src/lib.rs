pub mod formula;
pub mod meal_plan;
pub mod presentation;
pub mod profile;
pub mod validation;
