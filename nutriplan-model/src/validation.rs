use std::{collections::BTreeMap, error::Error, fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::profile::{ActivityLevel, Gender, Goal, ProfileRecord, UserProfile};

pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_AGE: u32 = 120;

const WEIGHT_MESSAGE: &str = "Weight must be a positive number less than 500kg";
const HEIGHT_MESSAGE: &str = "Height must be a positive number less than 300cm";
const AGE_MESSAGE: &str = "Age must be a positive number less than 120";

/// Raw form values, exactly as the user typed or picked them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProfileForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            gender: Gender::Male.to_string(),
            activity_level: ActivityLevel::Sedentary.to_string(),
            goal: Goal::Maintain.to_string(),
        }
    }
}

impl From<UserProfile> for ProfileForm {
    fn from(profile: UserProfile) -> Self {
        Self {
            weight: profile.weight_kg().to_string(),
            height: profile.height_cm().to_string(),
            age: profile.age().to_string(),
            gender: profile.gender().to_string(),
            activity_level: profile.activity_level().to_string(),
            goal: profile.goal().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Weight,
    Height,
    Age,
    Gender,
    ActivityLevel,
    Goal,
}

/// Field name to message, for every field that failed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn check<T>(&mut self, field: Field, value: Result<T, String>) -> Option<T> {
        match value {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Reads the longest decimal number at the start of `raw`, after leading
/// whitespace. Trailing text is ignored, so "70kg" reads as 70.
fn leading_real(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from =
        |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign);
    let mut mantissa_digits = end - sign;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 {
            mantissa_digits += fraction_end - end - 1;
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    s[..end].parse().ok()
}

/// Reads the whole number at the start of `raw`, so "30.5" reads as 30.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign = usize::from(s.starts_with(&['+', '-'][..]));
    let end = sign + s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    s[..end].parse().ok()
}

fn positive_below<T>(value: Option<T>, limit: T, message: &str) -> Result<T, String>
where
    T: PartialOrd + Default,
{
    value
        .filter(|value| *value > T::default() && *value < limit)
        .ok_or_else(|| message.to_owned())
}

fn parse_choice<T>(raw: &str, field: Field) -> Result<T, String>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    T::from_str(raw).map_err(|_| {
        let expected: Vec<_> = T::iter().map(|choice| choice.as_ref().to_owned()).collect();
        format!(
            "Invalid {} \"{}\", expected one of: {}",
            field,
            raw,
            expected.join(", ")
        )
    })
}

/// Checks every field independently and builds a [`UserProfile`] only when all
/// of them are valid.
pub fn validate(form: &ProfileForm) -> Result<UserProfile, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let weight = errors.check(
        Field::Weight,
        positive_below(leading_real(&form.weight), MAX_WEIGHT_KG, WEIGHT_MESSAGE),
    );
    let height = errors.check(
        Field::Height,
        positive_below(leading_real(&form.height), MAX_HEIGHT_CM, HEIGHT_MESSAGE),
    );
    let age = errors.check(
        Field::Age,
        positive_below(leading_integer(&form.age), i64::from(MAX_AGE), AGE_MESSAGE)
            .map(|age| age as u32),
    );
    let gender = errors.check(Field::Gender, parse_choice(&form.gender, Field::Gender));
    let activity_level = errors.check(
        Field::ActivityLevel,
        parse_choice(&form.activity_level, Field::ActivityLevel),
    );
    let goal = errors.check(Field::Goal, parse_choice(&form.goal, Field::Goal));

    match (weight, height, age, gender, activity_level, goal) {
        (Some(weight), Some(height), Some(age), Some(gender), Some(activity_level), Some(goal)) => {
            Ok(UserProfile::new(
                weight,
                height,
                age,
                gender,
                activity_level,
                goal,
            ))
        }
        _ => Err(errors),
    }
}

/// Range check for a record that arrives already typed, with the same limits
/// and messages as [`validate`].
pub fn check_record(record: &ProfileRecord) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    errors.check(
        Field::Weight,
        positive_below(Some(record.weight), MAX_WEIGHT_KG, WEIGHT_MESSAGE),
    );
    errors.check(
        Field::Height,
        positive_below(Some(record.height), MAX_HEIGHT_CM, HEIGHT_MESSAGE),
    );
    errors.check(
        Field::Age,
        positive_below(Some(record.age), MAX_AGE, AGE_MESSAGE),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
