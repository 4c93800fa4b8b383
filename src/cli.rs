use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::options::{CONFIG_NAME, default_config};
use crate::config::{ExportConfig, FontMode, OPTION_FONT_OPTIONS};
use crate::export::{DEFAULT_TIMEOUT, ExportSession, run_invocation};
use crate::plugin;

#[derive(Parser)]
#[command(name = "oomoxify")]
#[command(about = "Apply generated Oomox color themes to the Spotify desktop client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a rendered theme to the Spotify install
    Apply {
        /// Path to the rendered theme artifact
        theme_path: PathBuf,
        /// Spotify Apps directory to patch (persisted for next time)
        #[arg(long)]
        spotify_path: Option<String>,
        /// Font handling mode (persisted for next time)
        #[arg(long, value_enum)]
        font_mode: Option<FontMode>,
        /// Custom font family name; only accepted with --font-mode custom
        #[arg(long)]
        font_name: Option<String>,
        /// Path to oomoxify.sh, overriding $OOMOXIFY_SCRIPT and the system location
        #[arg(long)]
        script: Option<PathBuf>,
        /// Print the invocation instead of running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Inspect or edit the persisted export config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show plugin information
    About,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print all persisted options
    Show,
    /// Set one option and save
    Set { key: String, value: String },
}

/// Load this plugin's export config from the default location.
fn load_config() -> Result<ExportConfig> {
    Ok(ExportConfig::load(CONFIG_NAME, &default_config())?)
}

pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Apply {
            theme_path,
            spotify_path,
            font_mode,
            font_name,
            script,
            dry_run,
        } => handle_apply(theme_path, spotify_path, font_mode, font_name, script, dry_run),
        Commands::Config { command } => handle_config(command),
        Commands::About => {
            handle_about();
            Ok(())
        }
    }
}

fn handle_apply(
    theme_path: PathBuf,
    spotify_path: Option<String>,
    font_mode: Option<FontMode>,
    font_name: Option<String>,
    script: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let script_path = plugin::resolve_script_path(script)?;

    let mut config = load_config()?;
    let mut session = ExportSession::from_config(&config)?;

    if let Some(path) = spotify_path {
        session.set_spotify_path(path);
    }
    if let Some(mode) = font_mode {
        session.select_mode(mode);
    }
    if let Some(name) = font_name {
        if !session.font_name_editable() {
            anyhow::bail!(
                "--font-name is only accepted with --font-mode custom (current mode: {})",
                session.font_mode().as_str()
            );
        }
        session.set_font_name(name);
    }

    let invocation = session.build(&script_path, &theme_path, &mut config)?;

    if dry_run {
        println!("{invocation}");
        return Ok(());
    }

    run_invocation(&invocation, DEFAULT_TIMEOUT)?;
    Ok(())
}

fn handle_config(command: ConfigCommands) -> Result<()> {
    let mut config = load_config()?;
    match command {
        ConfigCommands::Show => {
            for (key, value) in config.iter() {
                println!("{key} = {value}");
            }
        }
        ConfigCommands::Set { key, value } => {
            // Reject values the export core would fail fast on later.
            if key == OPTION_FONT_OPTIONS {
                FontMode::parse_str(&value)?;
            }
            config.set(&key, value);
            config.save()?;
        }
    }
    Ok(())
}

fn handle_about() {
    println!("{} ({})", plugin::DISPLAY_NAME, plugin::PLUGIN_NAME);
    println!("{}", plugin::ABOUT_TEXT);
    println!("Homepage: {}", plugin::HOMEPAGE_URL);
    println!();
    println!("Theme keys:");
    for entry in plugin::theme_model_extra() {
        println!(
            "  {} (falls back to {}) - {}",
            entry.key, entry.fallback_key, entry.display_name
        );
    }
}
