use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use health_screen::services::ScreeningService;

use crate::config::Config;

#[derive(Args)]
pub struct EvaluateCommand {
    /// Directory containing the training datasets
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Number of bagged trees per model
    #[arg(long)]
    pub trees: Option<usize>,

    /// Fraction of rows held out for evaluation
    #[arg(long)]
    pub validation_split: Option<f32>,

    /// Seed for the shuffle that precedes the split
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EvaluateCommand {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load()?;

        let data_dir = self.data_dir.unwrap_or_else(|| config.data.dir.clone());
        let mut training = config.to_training_config();
        if let Some(trees) = self.trees {
            training.ensemble_size = trees;
        }
        if let Some(split) = self.validation_split {
            training.validation_split = split;
        }
        if let Some(seed) = self.seed {
            training.seed = seed;
        }

        println!("Training models from {}", data_dir.display());
        println!();

        let service = ScreeningService::train(&data_dir, &training)?;

        println!("Model Evaluation");
        println!("────────────────────────────────");
        for metrics in service.metrics() {
            let accuracy = format!("{:.1}%", metrics.accuracy * 100.0);
            println!(
                "  {:<14} {:>7}  ({} train / {} validation rows)",
                metrics.disease.to_string(),
                accuracy.bold(),
                metrics.n_train_samples,
                metrics.n_valid_samples,
            );
        }

        Ok(())
    }
}
