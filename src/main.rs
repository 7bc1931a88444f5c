use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use ratatui_image::picker::{Picker, ProtocolType};
use std::{fs::OpenOptions, io, sync::Mutex, time::Duration};
use tracing_subscriber::EnvFilter;

use wheretui::{
    api::{CountrySource, RestCountriesClient},
    config::{find_config_path, Config},
    handlers::handle_key,
    preferences::{PreferenceDb, ThemePreference},
    ui, utils, App,
};

/// Where in the world? - browse countries from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (wheretui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the country API base URL
    #[arg(long)]
    base_url: Option<String>,
}

/// Route tracing output to the debug log file. Without `--debug` nothing is recorded.
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wheretui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("Debug mode enabled");
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match find_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    Ok(config)
}

fn open_theme_preference(config: &Config) -> ThemePreference {
    let db = match &config.preferences_path {
        Some(path) => PreferenceDb::open(path),
        None => PreferenceDb::new(),
    };

    match db {
        Ok(db) => ThemePreference::load(db),
        Err(e) => {
            tracing::warn!("Preference storage unavailable, theme will not persist: {e:#}");
            ThemePreference::ephemeral()
        }
    }
}

/// Terminal graphics picker for flag images, per the configured protocol
fn build_image_picker(config: &Config) -> Option<Picker> {
    if !config.flag_images {
        tracing::debug!("Flag images disabled in config");
        return None;
    }

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("Flag images: failed to detect terminal: {e}");
            Picker::from_fontsize((8, 16))
        }
    };

    match config.image_protocol.to_lowercase().as_str() {
        "auto" => tracing::debug!("Flag images: auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => tracing::warn!("Flag images: unknown protocol '{unknown}', using auto-detect"),
    }

    Some(picker)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let config = load_config(&args)?;
    let theme = open_theme_preference(&config);

    let source = RestCountriesClient::new(config.base_url.clone(), config.fields.clone());
    tracing::info!(base_url = source.base_url(), "starting");

    // Terminal queries for the picker must run before raw mode / alternate screen
    let picker = build_image_picker(&config);
    let mut app = App::new(&config, source, theme, picker);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {e:#}");
    }
    result
}

fn run_app<B: ratatui::backend::Backend, S: CountrySource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit() {
            break;
        }

        // Apply background results (non-blocking)
        app.drain_responses();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }
    }

    Ok(())
}
