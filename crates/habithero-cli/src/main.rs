use clap::{CommandFactory, Parser, Subcommand};
use habithero_core::history::MAX_HISTORY_DAYS;
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "habithero", version, about = "HabitHero CLI")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the habit to replace and the first goal
    Init(commands::init::InitArgs),
    /// Log today as a day without the habit
    CheckIn,
    /// Log today as a relapse
    Relapse,
    /// Print the dashboard as JSON
    Status,
    /// Savings growth over recent days
    History {
        /// Number of days, defaults to the configured chart window
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_HISTORY_DAYS))
        )]
        days: Option<u32>,
    },
    /// This month's days with their outcome
    Calendar,
    /// Achievement list with progress
    Achievements {
        /// Only show unlocked achievements
        #[arg(long)]
        unlocked: bool,
    },
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// App settings stored with the state
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Plan the next daily reminder
    Remind,
    /// Print the congratulation text for the current goal
    Share,
    /// Delete all data and start over
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::CheckIn => commands::checkin::run(true),
        Commands::Relapse => commands::checkin::run(false),
        Commands::Status => commands::status::run(),
        Commands::History { days } => commands::history::run_series(days),
        Commands::Calendar => commands::history::run_calendar(),
        Commands::Achievements { unlocked } => commands::achievements::run(unlocked),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Remind => commands::remind::run(),
        Commands::Share => commands::share::run(),
        Commands::Reset { yes } => commands::reset::run(yes),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell, Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
