use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use env_logger::Env;
use fbrowse::{
    config::ConfigValidator, navigator::Navigator, session::Session, tui::BrowserTui,
    BrowserConfig,
};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
#[derive(Parser, Debug)]
#[command(
    name = "fb",
    author,
    version,
    about = "Interactive terminal file browser",
    long_about = r#"
fbrowse - single-key terminal file browser

Navigate directories, view text files, and delete, copy or move entries
without leaving the keyboard.

KEYS (defaults, configurable in config.json):
  Up/Down, k/j      Move the cursor
  Enter             Enter the selected directory
  Backspace         Go to the parent directory
  Delete, d         Delete the selected entry (directories recursively)
  p                 View the selected file
  s                 Mark the selected entry
  c                 Copy the marked entry here
  z                 Move the marked entry here
  q                 Quit (leaves the viewer when viewing)

EXAMPLES:
  fb                     # Browse the current directory
  fb /var/log            # Start somewhere else
  fb -vv                 # Debug logging to ~/.fbrowse/logs/fbrowse.log
  fb config show         # Print the active configuration
  fb config init         # Write a default config file
    "#
)]
struct Opt {
    #[arg(
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory to start in (defaults to the working directory)"
    )]
    dir: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Config file to use instead of ~/.fbrowse/config.json"
    )]
    config: Option<PathBuf>,
    #[arg(long, help = "Hide dotfiles regardless of the config file")]
    hide_hidden: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}
#[derive(Subcommand, Debug)]
enum Commands {
    Config { #[command(subcommand)] action: ConfigCommand },
}
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the active configuration
    Show,
    /// Write the default configuration file
    Init {
        #[arg(short, long, help = "Overwrite an existing config file")]
        force: bool,
    },
    /// Print the config file location
    Path,
}
fn main() -> Result<()> {
    let opt = Opt::parse();
    let config_path = opt
        .config
        .clone()
        .unwrap_or_else(|| fbrowse::config_path(&fbrowse::get_default_home_dir()));
    let mut config = BrowserConfig::load(&config_path)?;
    if opt.hide_hidden {
        config.listing.show_hidden = false;
    }
    init_logging(opt.verbose, &config.home_dir);
    match opt.command {
        Some(Commands::Config { action }) => handle_config(action, &config, &config_path),
        None => handle_browse(opt.dir, config),
    }
}
/// The TUI owns stdout and stderr, so log records go to a file under the
/// home directory. Logging stays off if that file cannot be opened.
fn init_logging(verbose: u8, home_dir: &Path) {
    let log_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if fbrowse::setup_directory_structure(home_dir).is_err() {
        return;
    }
    let log_file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(fbrowse::log_path(home_dir))
    {
        Ok(file) => file,
        Err(_) => return,
    };
    env_logger::Builder::from_env(
            Env::default().default_filter_or(log_level.to_string()),
        )
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();
}
fn handle_browse(dir: Option<PathBuf>, config: BrowserConfig) -> Result<()> {
    let validation = ConfigValidator::new().validate_config(&config);
    for warning in &validation.warnings {
        warn!("config {}: {}", warning.field, warning.message);
    }
    if !validation.is_valid {
        let details = validation
            .errors
            .iter()
            .map(|e| format!("  {}", e))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("invalid configuration:\n{}", details);
    }
    let start = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the working directory")?,
    };
    let navigator = Navigator::open(config.listing_fs(), &start)
        .with_context(|| format!("cannot open {:?}", start))?;
    let session = Session::new(navigator, config.keys.clone());
    let mut tui = BrowserTui::new(session, config.display.reserved_rows)?;
    let result = tui.run();
    tui.shutdown()?;
    info!("exiting");
    result
}
fn handle_config(action: ConfigCommand, config: &BrowserConfig, path: &Path) -> Result<()> {
    match action {
        ConfigCommand::Show => {
            println!("Config file: {:?}", path);
            println!("Home directory: {:?}", config.home_dir);
            println!("Listing:");
            println!("  Show hidden: {}", config.listing.show_hidden);
            println!("  Directories first: {}", config.listing.dirs_first);
            println!("Display:");
            println!("  Reserved rows: {}", config.display.reserved_rows);
            println!("Keys:");
            for (name, key) in config.keys.entries() {
                println!("  {:<8} {}", name, key);
            }
            let validation = ConfigValidator::new().validate_config(config);
            for error in &validation.errors {
                println!("error: {}", error);
            }
            for warning in &validation.warnings {
                println!("warning: {}: {}", warning.field, warning.message);
            }
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                println!("Config already exists at {:?}", path);
                println!("Use --force to overwrite it");
                return Ok(());
            }
            BrowserConfig::default().save(path)?;
            println!("Wrote default configuration to {:?}", path);
        }
        ConfigCommand::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
