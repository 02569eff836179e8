/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Render library catalog records as citations", long_about = None)]
pub struct Cli {
    /// Log processing details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a record file in one style, or every prose style
    Render {
        /// Path to the record (JSON or YAML)
        #[arg(index = 1)]
        record: PathBuf,

        /// Style name or alias (apa, mla, chicago, bluebook, cite-as, ris), or "all"
        #[arg(short, long, default_value = "apa")]
        style: String,

        /// Configuration file (YAML, JSON or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Markup for prose styles
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Print the full result (label, content type, filename) as JSON
        #[arg(long)]
        json: bool,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported styles with their labels and content types
    Styles {
        /// Configuration file (YAML, JSON or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    #[command(about = "Generate shell completion scripts")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Format {
    Html,
    Plain,
}
