use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::validation::{ProfileForm, ValidationErrors};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    FromPrimitive,
    ToPrimitive,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    FromPrimitive,
    ToPrimitive,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    FromPrimitive,
    ToPrimitive,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Goal {
    Loss,
    Maintain,
    Gain,
}

/// Body metrics of a single calculation session.
///
/// Only [`crate::validation::validate`] builds one, so every instance is within
/// the accepted ranges. The serialized form is the raw form record, and
/// deserializing runs validation again.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "ProfileForm", try_from = "ProfileForm")
)]
pub struct UserProfile {
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Goal,
}

impl UserProfile {
    pub(crate) fn new(
        weight: f64,
        height: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            weight,
            height,
            age,
            gender,
            activity_level,
            goal,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight
    }

    pub fn height_cm(&self) -> f64 {
        self.height
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ProfileForm> for UserProfile {
    type Error = ValidationErrors;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        crate::validation::validate(&form)
    }
}

/// Row sent to the remote data store after a results view is shown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileRecord {
    pub user_id: String,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl ProfileRecord {
    pub fn new(user_id: impl Into<String>, profile: &UserProfile) -> Self {
        Self {
            user_id: user_id.into(),
            weight: profile.weight,
            height: profile.height,
            age: profile.age,
            gender: profile.gender,
            activity_level: profile.activity_level,
            goal: profile.goal,
        }
    }
}
