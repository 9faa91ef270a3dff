pub mod config;
pub mod handoff;
pub mod render;

use log::{debug, error, info, warn};
use nutriplan_client::{Client, Identity, IdentityError};
use nutriplan_model::{
    formula::MetricSet,
    meal_plan::{meal_plan_for, MealPlan},
    presentation::ResultSummary,
    profile::{ProfileRecord, UserProfile},
    validation::{validate, ProfileForm, ValidationErrors},
};

use crate::handoff::{HandoffError, HandoffSlot};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Home,
    Results,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Short, non-blocking message for the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_owned(),
            description: description.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid form: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

#[derive(Debug)]
pub struct ResultsView {
    pub profile: UserProfile,
    pub metrics: MetricSet,
    pub summary: ResultSummary,
    pub meal_plan: &'static MealPlan,
    pub notices: Vec<Notice>,
}

#[derive(Debug)]
pub enum Navigation {
    Redirect(Route),
    Show(ResultsView),
}

/// Application context: owns the handoff between the form and results steps
/// and the optional collaborators used to save submitted profiles.
pub struct App {
    handoff: Box<dyn HandoffSlot>,
    identity: Box<dyn Identity>,
    client: Option<Box<dyn Client>>,
}

impl App {
    pub fn new(
        handoff: Box<dyn HandoffSlot>,
        identity: Box<dyn Identity>,
        client: Option<Box<dyn Client>>,
    ) -> Self {
        Self {
            handoff,
            identity,
            client,
        }
    }

    /// Validates the form and hands the profile over to the results step.
    pub fn submit(&mut self, form: &ProfileForm) -> Result<(Notice, Route), SubmitError> {
        info!("Validating submitted form");
        let profile = validate(form).map_err(|errors| {
            debug!("Form rejected: {}", errors);
            errors
        })?;

        info!("Storing profile for results view");
        self.handoff.store(&profile)?;

        Ok((
            Notice::new(
                NoticeLevel::Success,
                "Form submitted!",
                "Your nutrition analysis is ready.",
            ),
            Route::Results,
        ))
    }

    /// Builds the results view from the handed-over profile, or redirects home
    /// when there is none.
    pub async fn open_results(&self) -> Navigation {
        let profile = match self.handoff.load() {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                info!("No submitted profile, redirecting home");
                return Navigation::Redirect(Route::Home);
            }
            Err(e) => {
                error!("Error parsing user data: {}", e);
                return Navigation::Redirect(Route::Home);
            }
        };

        info!("Calculating metrics");
        let metrics = MetricSet::compute(&profile);
        debug!("{:?}", metrics);
        let summary = ResultSummary::new(&metrics);
        let meal_plan = meal_plan_for(profile.goal());

        let notices = self.save_profile(&profile).await.into_iter().collect();

        Navigation::Show(ResultsView {
            profile,
            metrics,
            summary,
            meal_plan,
            notices,
        })
    }

    pub async fn sign_out(&self) -> Notice {
        match self.identity.sign_out().await {
            Ok(()) => Notice::new(NoticeLevel::Success, "Signed out", "See you next time."),
            Err(IdentityError::Disabled) => Notice::new(
                NoticeLevel::Info,
                "Info",
                IdentityError::Disabled.to_string(),
            ),
            Err(e) => {
                error!("Failed to sign out: {}", e);
                Notice::new(NoticeLevel::Error, "Error", e.to_string())
            }
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Option<Notice> {
        let Some(client) = self.client.as_ref() else {
            debug!("No profile store configured, skipping save");
            return None;
        };

        let user = match self.identity.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("Nobody is signed in, skipping save");
                return None;
            }
            Err(e) => {
                warn!("Failed to resolve current user: {}", e);
                return Some(Notice::new(
                    NoticeLevel::Error,
                    "Error",
                    format!("Failed to save your data: {}", e),
                ));
            }
        };

        info!("Saving profile for user {}", user.email);
        match client
            .insert_profile(&ProfileRecord::new(user.id, profile))
            .await
        {
            Ok(()) => None,
            Err(e) => {
                error!("Failed to save profile, skipping. {}", e);
                Some(Notice::new(
                    NoticeLevel::Error,
                    "Error",
                    format!("Failed to save your data: {}", e),
                ))
            }
        }
    }
}
