use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{
    Config, FetchController, RequestState, WeatherScreen, provider_from_config,
    render::{PLACEHOLDER, TITLE},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "City weather lookup")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather API key.
    Configure,

    /// Look up a city repeatedly until Esc or Ctrl-C at the prompt (default).
    /// Ctrl-C during a lookup cancels that lookup.
    Interactive,

    /// Show weather for a single city and exit.
    Show {
        /// City name, e.g. "Campinas,SP" or "London".
        city: String,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Interactive => interactive().await,
            Command::Show { city } => show(city).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let key = Password::new("HG Brasil API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(key);
    cfg.require_api_key()?;
    cfg.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String) -> anyhow::Result<()> {
    let cfg = Config::load_with_env()?;
    let provider = provider_from_config(&cfg)?;

    let mut screen = WeatherScreen::new();
    screen.set_query(city);
    screen.submit(provider.as_ref()).await;

    print!("{}", screen.view());

    match screen.state() {
        RequestState::Error(message) => anyhow::bail!("{message}"),
        RequestState::Idle => anyhow::bail!("City name must not be empty"),
        _ => Ok(()),
    }
}

async fn interactive() -> anyhow::Result<()> {
    let cfg = Config::load_with_env()?;
    let provider = provider_from_config(&cfg)?;

    let mut controller = FetchController::new(provider);
    let mut screen = WeatherScreen::new();

    loop {
        let Some(text) = prompt_city(screen.query().to_string()).await? else {
            debug!("Prompt closed, leaving");
            return Ok(());
        };

        screen.set_query(text);
        if !controller.submit(&mut screen) {
            continue;
        }

        print!("{}", screen.view());
        // Ctrl-C while loading abandons the lookup instead of exiting.
        tokio::select! {
            _ = controller.settle(&mut screen) => {}
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                controller.cancel(&mut screen);
            }
        }
        println!();
        print!("{}", screen.view());
        println!();
    }
}

/// Returns `None` when the user cancels the prompt.
async fn prompt_city(initial: String) -> anyhow::Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(move || {
        Text::new(TITLE)
            .with_placeholder(PLACEHOLDER)
            .with_initial_value(&initial)
            .prompt()
    })
    .await
    .context("Prompt task failed")?;

    match answer {
        Ok(text) => Ok(Some(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read city name"),
    }
}
