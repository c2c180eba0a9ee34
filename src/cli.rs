//! Command-line interface for lokhook using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::notify::{ObjectReport, ReportVariant};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format for log aggregation.
    Json,
}

/// Destination channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChannelArg {
    ObjectLog,
    AllResources,
}

impl From<ChannelArg> for ReportVariant {
    fn from(channel: ChannelArg) -> Self {
        match channel {
            ChannelArg::ObjectLog => ReportVariant::ObjectLog,
            ChannelArg::AllResources => ReportVariant::AllResources,
        }
    }
}

/// Post resource reports to Discord webhooks.
#[derive(Parser, Debug)]
#[command(name = "lokhook")]
#[command(version)]
#[command(about = "Post resource reports to Discord webhooks")]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Validate configuration and exit.
    #[arg(long = "validate")]
    pub validate: bool,

    /// Log format: text or json.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send an object report as an embed.
    Report(ReportArgs),
    /// Send a plain-text message.
    Message {
        #[arg(long, value_enum, default_value_t = ChannelArg::ObjectLog)]
        channel: ChannelArg,
        content: String,
    },
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long, value_enum, default_value_t = ChannelArg::ObjectLog)]
    pub channel: ChannelArg,
    /// Object type, e.g. "Crystal Mine".
    #[arg(long = "type")]
    pub object_type: String,
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub level: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub status: String,
    /// Occupation details; replaces the type line in the description.
    #[arg(long = "occupied", default_value = "")]
    pub occupied_info: String,
}

impl ReportArgs {
    pub fn to_report(&self) -> ObjectReport {
        ObjectReport::new(
            self.object_type.as_str(),
            &self.code,
            &self.level,
            &self.location,
            self.status.as_str(),
        )
        .with_occupied_info(self.occupied_info.as_str())
    }
}
