use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use refwidget_cli::commands;
use refwidget_cli::logging::init_logging;
use refwidget_cli::readline;
use refwidget_cli::state::HostState;
use refwidget_core::config::{default_config_path, load_config, load_config_from};
use refwidget_core::{TrackingPolicy, WidgetConfig};

#[derive(Parser)]
#[command(version, about = "Reference widget host")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    #[arg(long)]
    media_type: Option<String>,
    #[arg(long)]
    direction: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Single,
    Multi,
}

impl From<PolicyArg> for TrackingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Single => TrackingPolicy::SingleSlot,
            PolicyArg::Multi => TrackingPolicy::MultiSlot,
        }
    }
}

fn resolve_config(args: &Args) -> (WidgetConfig, Option<PathBuf>) {
    let (loaded, path) = match &args.config {
        Some(path) => (load_config_from(path), Some(path.clone())),
        None => (load_config(), default_config_path()),
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default config");
        WidgetConfig::default()
    });
    if let Some(policy) = args.policy {
        config.tracking.policy = policy.into();
    }
    if let Some(media_type) = &args.media_type {
        config.tracking.filter.media_type = media_type.clone();
    }
    if let Some(direction) = &args.direction {
        config.tracking.filter.direction = Some(direction.clone());
    }
    (config, path)
}

fn main() -> Result<(), String> {
    init_logging();

    let args = Args::parse();
    let (config, config_path) = resolve_config(&args);
    let mut state = HostState::new(config, config_path);
    tracing::info!(
        policy = state.config.tracking.policy.label(),
        media_type = %state.config.tracking.filter.media_type,
        "Widget attached"
    );

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut state) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(no_binary_name = true, about = "commands")]
struct Repl {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Generate {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    Regenerate,
    Show,
    Copy,
    CopyFresh,
    Paste,
    Assign {
        #[arg(short, long)]
        id: String,
        #[arg(short, long)]
        media_type: String,
        #[arg(short, long)]
        direction: Option<String>,
    },
    End {
        #[arg(short, long)]
        id: String,
    },
    Replay {
        #[arg(short, long)]
        path: String,
    },
    Status,
    Config,
    Exit,
}

fn respond(line: &str, state: &mut HostState) -> Result<bool, String> {
    let args = shlex::split(line).ok_or("error: Invalid quoting")?;
    let cli = Repl::try_parse_from(args).map_err(|e| e.to_string())?;

    let output = match &cli.command {
        Some(Commands::Generate { count }) => commands::generate(*count),
        Some(Commands::Regenerate) => commands::regenerate(state),
        Some(Commands::Show) => commands::show(state),
        Some(Commands::Copy) => commands::copy(state, false)?,
        Some(Commands::CopyFresh) => commands::copy(state, true)?,
        Some(Commands::Paste) => commands::paste(state),
        Some(Commands::Assign {
            id,
            media_type,
            direction,
        }) => commands::assign(state, id, media_type, direction.as_deref()),
        Some(Commands::End { id }) => commands::end(state, id),
        Some(Commands::Replay { path }) => commands::replay(state, path)?,
        Some(Commands::Status) => commands::status(state),
        Some(Commands::Config) => commands::show_settings(state),
        Some(Commands::Exit) => {
            println!("{}", commands::exit());
            return Ok(true);
        }
        None => return Ok(false),
    };

    println!("{output}");
    Ok(false)
}
