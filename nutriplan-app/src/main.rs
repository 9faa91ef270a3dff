use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use log::info;
use nutriplan_app::{
    config::Config,
    handoff::{FileSlot, HandoffSlot, MemorySlot},
    render::{self, ResultsPage},
    App, Navigation, SubmitError,
};
use nutriplan_client::{Client, Identity, StubIdentity};
use nutriplan_model::validation::ProfileForm;

#[derive(Parser)]
#[command(
    name = "nutriplan",
    about = "Calculate your BMI, BMR, and get personalized meal recommendations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Handoff file shared by `submit` and `results`
    #[arg(long, global = true)]
    handoff: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate body metrics and keep them for the results view
    Submit(FormArgs),
    /// Show the analysis for the last submitted metrics
    Results,
    /// Submit and show the analysis in one go
    Calculate(FormArgs),
    /// Sign out of the identity provider
    SignOut,
}

#[derive(Args)]
struct FormArgs {
    /// Weight in kilograms
    #[arg(long)]
    weight: String,
    /// Height in centimeters
    #[arg(long)]
    height: String,
    /// Age in years
    #[arg(long)]
    age: String,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: String,
    /// sedentary, light, moderate or active
    #[arg(long, default_value = "sedentary")]
    activity_level: String,
    /// loss, maintain or gain
    #[arg(long, default_value = "maintain")]
    goal: String,
}

impl From<FormArgs> for ProfileForm {
    fn from(args: FormArgs) -> Self {
        Self {
            weight: args.weight,
            height: args.height,
            age: args.age,
            gender: args.gender,
            activity_level: args.activity_level,
            goal: args.goal,
        }
    }
}

fn identity(config: &Config) -> Box<dyn Identity> {
    match &config.auth {
        Some(auth) => {
            info!("Using identity provider at {}", auth.url);
            Box::new(nutriplan_client::create_identity(
                auth.url.clone(),
                auth.token.clone(),
            ))
        }
        None => {
            info!("Authentication disabled, using stub identity");
            Box::new(StubIdentity::new())
        }
    }
}

fn client(config: &Config) -> Option<Box<dyn Client>> {
    config
        .api_url
        .clone()
        .map(|url| Box::new(nutriplan_client::create(url)) as Box<dyn Client>)
}

/// Returns whether the form was accepted.
fn submit(app: &mut App, form: ProfileForm) -> Result<bool, Box<dyn Error>> {
    match app.submit(&form) {
        Ok((notice, _)) => {
            println!("{}", render::notice(&notice));
            Ok(true)
        }
        Err(SubmitError::Invalid(errors)) => {
            eprintln!("Please correct the following fields:");
            eprintln!("{}", render::validation_errors(&errors));
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

async fn show_results(app: &App) -> ExitCode {
    match app.open_results().await {
        Navigation::Show(view) => {
            println!("{}", ResultsPage(&view));
            ExitCode::SUCCESS
        }
        Navigation::Redirect(_) => {
            eprintln!("No submitted details found. Run `nutriplan submit` first.");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let cli = Cli::parse();
    let config = Config::from_env();

    let handoff: Box<dyn HandoffSlot> = match cli.command {
        Command::Calculate(_) => Box::new(MemorySlot::new()),
        _ => Box::new(FileSlot::new(
            cli.handoff.unwrap_or_else(|| config.handoff_path.clone()),
        )),
    };
    let mut app = App::new(handoff, identity(&config), client(&config));

    let code = match cli.command {
        Command::Submit(form) => {
            if submit(&mut app, form.into())? {
                println!("Run `nutriplan results` to see your analysis.");
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Command::Results => show_results(&app).await,
        Command::Calculate(form) => {
            if submit(&mut app, form.into())? {
                show_results(&app).await
            } else {
                ExitCode::from(2)
            }
        }
        Command::SignOut => {
            println!("{}", render::notice(&app.sign_out().await));
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
