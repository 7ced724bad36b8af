//! Command-line interface definition using clap.
//!
//! The CLI surface maps one-to-one onto [`DumpConfig`]; parsing and
//! flag validation live here, everything else in the library. The
//! `--exclude`/`--include` pair is an argument group, so clap rejects
//! combining them and `--channels` demands exactly one of them.

use clap::{ArgGroup, Parser};

use crate::config::DumpConfig;

/// Flatten a chat data-package export into a single text dump
/// of message IDs, optionally filtered by year or channel.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatdump")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("membership").args(["exclude", "include"])))]
#[command(after_help = "EXAMPLES:
    chatdump
    chatdump export/messages
    chatdump --year 2020 -o 2020.txt
    chatdump --channels 794183829873885224 --exclude
    chatdump --channels 794183829873885224,794183829873885225 --include")]
pub struct Args {
    /// Path to the export's messages directory
    #[arg(default_value = "messages")]
    pub root: String,

    /// Path to the dump file (created fresh each run)
    #[arg(short, long, default_value = "messages.txt")]
    pub output: String,

    /// Dump only messages from this year (wins over --channels)
    #[arg(long, value_name = "YYYY")]
    pub year: Option<String>,

    /// Comma-separated channel IDs the membership flag applies to
    #[arg(long, value_name = "IDS", requires = "membership")]
    pub channels: Option<String>,

    /// Drop the listed channels, dump everything else
    #[arg(long)]
    pub exclude: bool,

    /// Dump only the listed channels
    #[arg(long)]
    pub include: bool,
}

// Conversion to library config type
impl From<Args> for DumpConfig {
    fn from(args: Args) -> DumpConfig {
        let mut config = DumpConfig::new(args.root)
            .with_output(args.output)
            .with_exclude(args.exclude)
            .with_include(args.include);
        if let Some(year) = args.year {
            config = config.with_year(year);
        }
        if let Some(channels) = args.channels {
            config = config.with_channels(channels);
        }
        config
    }
}
