//! Command-line front end: emit messages through namespaced loggers and
//! inspect how levels resolve from the environment.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use severino_logger::config::{load_config, validate_config, ConfigError, LoggerConfig};
use severino_logger::env::env_key;
use severino_logger::handler::TracingHandler;
use severino_logger::{fatal, Level, Logger, Registry};

#[derive(Parser)]
#[command(name = "severino-log")]
#[command(about = "Emit messages through namespaced leveled loggers", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment variable prefix (overrides the config file)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Also forward messages to a tracing subscriber on stderr (filtered by RUST_LOG)
    #[arg(long)]
    tracing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a message
    Emit {
        #[arg(short, long, default_value = "")]
        namespace: String,

        #[arg(short, long, value_enum, default_value_t = LevelArg::Info)]
        level: LevelArg,

        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show which variable sets a namespace's level, and the result
    Resolve {
        #[arg(default_value = "")]
        namespace: String,
    },
    /// Log a fatal message, then exit with status 1
    Fatal {
        #[arg(short, long, default_value = "")]
        namespace: String,

        #[arg(required = true)]
        message: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Debug => Level::Debug,
            LevelArg::Info => Level::Info,
            LevelArg::Warn => Level::Warn,
            LevelArg::Error => Level::Error,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.tracing {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(prefix) = cli.prefix {
        config.env_prefix = prefix;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    let registry = Registry::from_config(&config);
    let open = |namespace: &str| -> Arc<Logger> {
        let logger = registry.get_or_create(namespace);
        if cli.tracing {
            logger.add_handler(Arc::new(TracingHandler::new()));
        }
        logger
    };

    match cli.command {
        Commands::Emit {
            namespace,
            level,
            message,
        } => {
            open(&namespace).log(level.into(), format_args!("{}", message.join(" ")));
        }
        Commands::Resolve { namespace } => {
            let resolved = registry.resolve_level(&namespace);
            println!(
                "{} = {} (from {})",
                env_key(&config.env_prefix, &namespace),
                resolved.level,
                resolved.source
            );
        }
        Commands::Fatal { namespace, message } => {
            let logger = open(&namespace);
            fatal!(logger, "{}", message.join(" ")).exit();
        }
    }

    Ok(())
}
