//! Proxy configuration tool.
//!
//! Loads an instance configuration the same way the proxy does at startup
//! and either reports on it or prints the normalized form.
//!
//! # Startup Contract
//! Any load error is fatal: it is logged with its full cause chain and the
//! process exits with status 1. No partial configuration is ever used.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use proxy_config::config::{ConfigError, ConfigFormat, Configuration};
use proxy_config::observability::logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "proxy-config")]
#[command(about = "Load and inspect proxy instance configuration", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log output format (pretty, json).
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a configuration file and report what it declares
    Check {
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },
    /// Load a configuration file and print its normalized form
    Show {
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
    Toml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(output: OutputFormat) -> Self {
        match output {
            OutputFormat::Yaml => ConfigFormat::Yaml,
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Toml => ConfigFormat::Toml,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %error_chain(e.as_ref()), "Configuration failed");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { config } => {
            let cfg = load_or_exit(&config);
            report(&cfg)?;
        }
        Commands::Show { config, output } => {
            let cfg = load_or_exit(&config);
            let text = ConfigFormat::from(output).render(&cfg).map_err(|e| e.to_string())?;
            print!("{}", text);
        }
    }
    Ok(())
}

fn load_or_exit(path: &Path) -> Configuration {
    match proxy_config::load(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %error_chain(&e), "[config] load config failed");
            process::exit(1);
        }
    }
}

fn report(cfg: &Configuration) -> Result<(), ConfigError> {
    for listener in &cfg.listeners {
        tracing::info!(
            protocol = %listener.protocol_type,
            address = %listener.socket_address.address,
            port = listener.socket_address.port,
            executor = %listener.executor,
            filters = ?listener.filters,
            "Listener"
        );
    }
    for executor in &cfg.executors {
        tracing::info!(
            name = %executor.name,
            mode = %executor.mode,
            filters = ?executor.filters,
            "Executor"
        );
    }
    if let Some(dt) = &cfg.distributed_transaction {
        let driver = match dt.storage.driver_type()? {
            "" => "none",
            name => name,
        };
        tracing::info!(
            port = dt.port,
            addressing = %dt.addressing,
            storage_driver = driver,
            "Distributed transaction coordinator enabled"
        );
    } else {
        tracing::info!("Distributed transaction coordinator disabled");
    }
    Ok(())
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
