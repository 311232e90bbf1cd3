use clap::{Parser, Subcommand};
use japamala_core::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "japamala", version, about = "Japa mala chanting counter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the counter, active mantra and today's totals
    Status,
    /// Count one or more taps on the active mantra
    Tap {
        /// Number of taps to record
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Reset the count, the round, or all data
    Reset {
        #[command(subcommand)]
        target: commands::chant::ResetTarget,
    },
    /// Make a mantra the active one
    Select {
        /// Mantra id (see `mantra list`)
        id: String,
    },
    /// Pause or resume counting
    Pause,
    /// Mantra catalog management
    Mantra {
        #[command(subcommand)]
        action: commands::mantra::MantraAction,
    },
    /// Add or remove a mantra from favorites
    Favorite {
        /// Mantra id
        id: String,
    },
    /// Chanting statistics
    Stats,
    /// User settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// List built-in sounds
    Sounds {
        #[arg(long, value_enum)]
        kind: Option<commands::sounds::SoundKind>,
    },
}

fn init_tracing() {
    let config = AppConfig::load_or_default();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.level))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Status => commands::chant::status(),
        Commands::Tap { times } => commands::chant::tap(times),
        Commands::Reset { target } => commands::chant::reset(target),
        Commands::Select { id } => commands::chant::select(&id),
        Commands::Pause => commands::chant::pause(),
        Commands::Mantra { action } => commands::mantra::run(action),
        Commands::Favorite { id } => commands::mantra::favorite(&id),
        Commands::Stats => commands::stats::run(),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Sounds { kind } => commands::sounds::run(kind),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
