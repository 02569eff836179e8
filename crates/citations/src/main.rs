/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use citations_core::{Config, Record, Style};
use citations_processor::io::{load_config, load_record};
use citations_processor::{Html, OutputFormat, PlainText, Processor};

use cli::{Cli, Command, Format};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so rendered citations on stdout stay clean.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            record,
            style,
            config,
            format,
            json,
            output,
        } => {
            let processor = Processor::new(read_config(config.as_deref())?)?;
            let record = load_record(&record)
                .with_context(|| format!("failed to load record {}", record.display()))?;

            let request = RenderRequest {
                style: &style,
                json,
                output,
            };
            match format {
                Format::Html => request.run(&processor, &record, &Html),
                Format::Plain => request.run(&processor, &record, &PlainText),
            }
        }

        Command::Styles { config } => {
            let config = read_config(config.as_deref())?;
            for style in Style::ALL {
                let format = config.formats.get(*style);
                println!(
                    "{:<10} {:<8} {}",
                    style.as_str(),
                    format.label,
                    format.content_type
                );
            }
            Ok(())
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn read_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

struct RenderRequest<'a> {
    style: &'a str,
    json: bool,
    output: Option<PathBuf>,
}

impl RenderRequest<'_> {
    fn run<F: OutputFormat>(&self, processor: &Processor, record: &Record, fmt: &F) -> Result<()> {
        if self.style.eq_ignore_ascii_case("all") {
            let all = processor.render_all(record, fmt);
            return self.emit(&serde_json::to_string_pretty(&all)?);
        }

        let rendered = processor.render_named(self.style, record, fmt)?;
        if let (None, Some(filename)) = (&self.output, &rendered.filename) {
            info!(%filename, "suggested file name");
        }

        if self.json {
            self.emit(&serde_json::to_string_pretty(&rendered)?)
        } else {
            self.emit(&rendered.body)
        }
    }

    fn emit(&self, text: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote citation");
            }
            None if text.ends_with('\n') => print!("{text}"),
            None => println!("{text}"),
        }
        Ok(())
    }
}
