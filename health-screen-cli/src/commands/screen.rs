use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use console::style;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use health_screen::api::screenings::ScreeningResponse;
use health_screen::models::{
    validate_age, validate_bmi, validate_cholesterol, validate_diastolic, validate_glucose,
    validate_systolic, Gender, HealthProfile, SmokingStatus,
};
use health_screen::services::ScreeningService;

use crate::api::RemoteClient;
use crate::config::Config;

#[derive(Args)]
pub struct ScreenCommand {
    /// Age in years (0-100)
    #[arg(long)]
    pub age: Option<i32>,

    /// Gender: male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Systolic blood pressure in mmHg (50-250)
    #[arg(long)]
    pub systolic: Option<i32>,

    /// Diastolic blood pressure in mmHg (30-200)
    #[arg(long)]
    pub diastolic: Option<i32>,

    /// Total cholesterol in mg/dL (50-500)
    #[arg(long)]
    pub cholesterol: Option<f64>,

    /// Fasting glucose in mg/dL (50-500)
    #[arg(long)]
    pub glucose: Option<f64>,

    /// Body mass index (10-60)
    #[arg(long)]
    pub bmi: Option<f64>,

    /// Smoking status: yes or no
    #[arg(long)]
    pub smoking: Option<SmokingStatus>,

    /// Run a single screening and exit
    #[arg(long)]
    pub once: bool,

    /// Screen against a running server instead of training locally;
    /// uses the configured base URL when no URL is given
    #[arg(long, value_name = "URL")]
    pub remote: Option<Option<String>>,

    /// Directory containing the training datasets (local mode)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Where screenings run: an in-process service or a remote server
enum Backend {
    Local(ScreeningService),
    Remote(RemoteClient),
}

impl Backend {
    async fn screen(&self, profile: &HealthProfile) -> Result<ScreeningResponse> {
        match self {
            Backend::Local(service) => {
                let report = service.screen(profile)?;
                Ok(ScreeningResponse::from_report(&report))
            }
            Backend::Remote(client) => Ok(client.screen(profile).await?),
        }
    }
}

impl ScreenCommand {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load()?;

        println!("{}", style("Health Screen").bold());
        println!();

        let backend = match &self.remote {
            Some(url) => {
                let base_url = url
                    .clone()
                    .unwrap_or_else(|| config.server.base_url.clone());
                let client = RemoteClient::new(&base_url, config.server.timeout_seconds)?;
                println!("Screening against {}", client.base_url());
                println!();
                Backend::Remote(client)
            }
            None => {
                let data_dir = self
                    .data_dir
                    .clone()
                    .unwrap_or_else(|| config.data.dir.clone());
                Backend::Local(train_local(&config, &data_dir)?)
            }
        };

        loop {
            let profile = self.collect_profile()?;
            let response = backend.screen(&profile).await?;
            print_report(&response);

            if self.once || self.fully_specified() {
                break;
            }

            println!();
            let again = Confirm::new()
                .with_prompt("Check another person?")
                .default(true)
                .interact()?;
            if !again {
                break;
            }
            println!();
        }

        Ok(())
    }

    /// All eight profile fields supplied as flags
    fn fully_specified(&self) -> bool {
        self.age.is_some()
            && self.gender.is_some()
            && self.systolic.is_some()
            && self.diastolic.is_some()
            && self.cholesterol.is_some()
            && self.glucose.is_some()
            && self.bmi.is_some()
            && self.smoking.is_some()
    }

    /// Build a profile from flags, prompting for whatever is missing
    fn collect_profile(&self) -> Result<HealthProfile> {
        let age = match self.age {
            Some(age) => age,
            None => prompt_number("Age (years)", validate_age)?,
        };
        let gender = match self.gender {
            Some(gender) => gender,
            None => prompt_gender()?,
        };
        let systolic = match self.systolic {
            Some(systolic) => systolic,
            None => prompt_number("Systolic blood pressure (mmHg)", validate_systolic)?,
        };
        let diastolic = match self.diastolic {
            Some(diastolic) => diastolic,
            None => prompt_number("Diastolic blood pressure (mmHg)", validate_diastolic)?,
        };
        let cholesterol = match self.cholesterol {
            Some(cholesterol) => cholesterol,
            None => prompt_number("Total cholesterol (mg/dL)", validate_cholesterol)?,
        };
        let glucose = match self.glucose {
            Some(glucose) => glucose,
            None => prompt_number("Fasting glucose (mg/dL)", validate_glucose)?,
        };
        let bmi = match self.bmi {
            Some(bmi) => bmi,
            None => prompt_number("Body mass index", validate_bmi)?,
        };
        let smoking = match self.smoking {
            Some(smoking) => smoking,
            None => prompt_smoking()?,
        };

        let profile = HealthProfile {
            age,
            gender,
            systolic,
            diastolic,
            cholesterol,
            glucose,
            bmi,
            smoking,
        };
        profile.validate()?;

        Ok(profile)
    }
}

/// Train the three models with a spinner while fitting
fn train_local(config: &Config, data_dir: &std::path::Path) -> Result<ScreeningService> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Training models from {}", data_dir.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let trained = ScreeningService::train(data_dir, &config.to_training_config());
    spinner.finish_and_clear();

    let service = trained?;
    for metrics in service.metrics() {
        println!(
            "✓ {} model ready ({:.1}% validation accuracy)",
            metrics.disease,
            metrics.accuracy * 100.0
        );
    }
    println!();

    Ok(service)
}

/// Re-asks until the value parses and the range check passes
fn prompt_number<T>(prompt: &str, validate: fn(T) -> Result<()>) -> Result<T>
where
    T: Copy + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Debug + ToString,
{
    let value = Input::<T>::new()
        .with_prompt(prompt)
        .validate_with(|input: &T| validate(*input).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(value)
}

fn prompt_gender() -> Result<Gender> {
    let index = Select::new()
        .with_prompt("Gender")
        .items(&["male", "female"])
        .default(0)
        .interact()?;

    Ok(match index {
        0 => Gender::Male,
        _ => Gender::Female,
    })
}

fn prompt_smoking() -> Result<SmokingStatus> {
    let index = Select::new()
        .with_prompt("Do you smoke?")
        .items(&["no", "yes"])
        .default(0)
        .interact()?;

    Ok(match index {
        0 => SmokingStatus::No,
        _ => SmokingStatus::Yes,
    })
}

fn print_report(response: &ScreeningResponse) {
    println!();
    println!("{}", style("Screening Report").bold());
    println!("────────────────────────────────");
    println!("  Heart Disease:  {}", risk_label(&response.heart_risk));
    println!("  Diabetes:       {}", risk_label(&response.diabetes));
    println!("  Stroke:         {}", risk_label(&response.stroke_risk));
    println!("  Blood Pressure: {}", response.bp_category.bold());
    println!();
    println!("  Report id: {}", response.report_id);
}

fn risk_label(label: &str) -> colored::ColoredString {
    if label.starts_with('⚠') {
        label.red().bold()
    } else {
        label.green()
    }
}
