//! lokhook - Post resource reports to Discord webhooks.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{error, info};

use lokhook::cli::{Cli, Command, LogFormat};
use lokhook::config::{Config, RuntimeConfig};
use lokhook::{NotifyError, ReportChannels, ReportVariant, TracingReporter};

/// Initialize the tracing subscriber with the specified log format.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    info!(config_path = %cli.config.display(), "Loading configuration");

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, path = %cli.config.display(), "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!(error = %e, "Configuration validation error");
        }
        error!(
            error_count = errors.len(),
            "Configuration validation failed"
        );
        std::process::exit(1);
    }

    if cli.validate {
        println!("Configuration is valid: {}", cli.config.display());
        for (name, _) in config.webhooks.entries() {
            println!("  Webhook: {}", name);
        }
        match config.http.timeout {
            Some(timeout) => println!("  HTTP timeout: {:?}", timeout),
            None => println!("  HTTP timeout: client default"),
        }
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("no command given; use `report`, `message` or `--validate`");
    };

    let runtime_config = config.compile()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let delivered = runtime.block_on(run(runtime_config, command))?;
    if !delivered {
        std::process::exit(1);
    }
    Ok(())
}

/// Send the requested message. Returns whether the webhook accepted it.
async fn run(runtime_config: RuntimeConfig, command: Command) -> Result<bool> {
    // One client for every webhook so connections are pooled
    let http_client = runtime_config.http_client()?;
    let channels = ReportChannels::from_config(
        &runtime_config,
        http_client,
        Arc::new(TracingReporter),
    );

    let (variant, result) = match command {
        Command::Report(args) => {
            let variant = ReportVariant::from(args.channel);
            let report = args.to_report();
            info!(channel = %variant, object_type = %report.object_type, "Sending object report");
            (variant, channels.send_report(variant, &report).await)
        }
        Command::Message { channel, content } => {
            let variant = ReportVariant::from(channel);
            info!(channel = %variant, "Sending message");
            (variant, channels.send_text(variant, &content).await)
        }
    };

    match result {
        Ok(true) => {
            info!(channel = %variant, "Message delivered");
            Ok(true)
        }
        Ok(false) => Ok(false),
        // Already logged by the webhook's error reporter
        Err(NotifyError::Transport(_)) => Ok(false),
        Err(e) => {
            error!(channel = %variant, error = %e, "Message not delivered");
            Ok(false)
        }
    }
}
