mod config_cmd;
mod evaluate;
mod screen;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use evaluate::EvaluateCommand;
pub use screen::ScreenCommand;

#[derive(Parser)]
#[command(name = "health-screen-cli")]
#[command(about = "Interactive health risk screening from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "HEALTH_SCREEN_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a screening session
    Screen(ScreenCommand),

    /// Train the models and print their validation accuracy
    Evaluate(EvaluateCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn execute(self) -> Result<()> {
        // Commands resolve the config file through this variable
        if let Some(path) = &self.config {
            std::env::set_var("HEALTH_SCREEN_CONFIG", path);
        }

        match self.command {
            Commands::Screen(cmd) => cmd.execute().await,
            Commands::Evaluate(cmd) => cmd.execute().await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config().await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(force).await,
                ConfigSubcommands::Path => config_cmd::show_path().await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
