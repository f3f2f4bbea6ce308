mod cmd;
mod journey;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::choose::ChooseSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "herofreq",
    about = "Hero Frequency: a stage-by-stage journey to your cosmic identity",
    version,
    propagate_version = true
)]
struct Cli {
    /// Journey root (default: auto-detect from .herofreq/ or .git/)
    #[arg(long, global = true, env = "HEROFREQ_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start (or reconfigure) the journey in the current project
    Begin {
        /// Journey flow: express or guided
        #[arg(long)]
        flow: Option<String>,

        /// User id for cross-device session sync
        #[arg(long)]
        user: Option<String>,

        /// Base URL of a hero-server instance for session sync
        #[arg(long)]
        remote: Option<String>,

        /// Base URL of an oracle service for personalized content
        #[arg(long)]
        oracle: Option<String>,
    },

    /// Show where the journey stands
    Status,

    /// Move on to the next stage
    Continue,

    /// Enter your personality and design sun gates (1-64)
    Enter { personality: String, design: String },

    /// Record a selection at the current stage
    Choose {
        #[command(subcommand)]
        subcommand: ChooseSubcommand,
    },

    /// Reveal your identity, mantras or mythos at a reveal stage
    Reveal,

    /// Step back one stage
    Back,

    /// Wipe the journey and start over
    Restart,

    /// Print a share token for the completed journey
    Share,

    /// View a journey from a share token
    View { token: String },

    /// Write the journey dossier to a markdown file
    Export {
        /// Output path
        #[arg(long, default_value = "hero-frequency.md")]
        out: PathBuf,
    },

    /// Browse the gate wheel
    Gates {
        /// A single gate to describe
        number: Option<String>,
    },

    /// Run the session sync server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "4177")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Begin {
            flow,
            user,
            remote,
            oracle,
        } => cmd::begin::run(
            &root,
            flow.as_deref(),
            user.as_deref(),
            remote.as_deref(),
            oracle.as_deref(),
        ),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Continue => cmd::advance::run(&root),
        Commands::Enter {
            personality,
            design,
        } => cmd::enter::run(&root, &personality, &design),
        Commands::Choose { subcommand } => cmd::choose::run(&root, subcommand),
        Commands::Reveal => cmd::reveal::run(&root),
        Commands::Back => cmd::back::run(&root),
        Commands::Restart => cmd::restart::run(&root),
        Commands::Share => cmd::share::run(&root, cli.json),
        Commands::View { token } => cmd::view::run(&token, cli.json),
        Commands::Export { out } => cmd::export::run(&root, &out),
        Commands::Gates { number } => cmd::gates::run(number.as_deref(), cli.json),
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
