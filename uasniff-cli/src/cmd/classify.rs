//! classify user agent strings given as arguments or on stdin

use clap::{Args, ValueEnum};
use std::{
    fmt,
    io::{self, Write},
};
use uasniff::{
    error::{BoxError, ErrorContext as _, ErrorExt as _, OpaqueError},
    ua::{Classification, InvalidInput},
};

#[derive(Debug, Args)]
/// classify user agent strings into hierarchical tags
pub struct CliCommandClassify {
    /// the user agent strings to classify
    ///
    /// (read one agent per line from stdin if none are given)
    agents: Vec<String>,

    #[arg(short = 'f', long, default_value_t = Default::default())]
    /// the format in which classifications are written to stdout
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum Format {
    /// agent line followed by one tag per line,
    /// in the same format as a fixture file
    #[default]
    Text,
    /// one json object per line
    Json,
    /// one `UserAgent` xml element per line
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Text => "text",
                Self::Json => "json",
                Self::Xml => "xml",
            }
        )
    }
}

/// run the classify command
pub fn run(cfg: CliCommandClassify) -> Result<(), BoxError> {
    let agents = if cfg.agents.is_empty() {
        read_agents(io::stdin().lock())?
    } else {
        cfg.agents
    };
    if agents.is_empty() {
        return Err(InvalidInput
            .context("no user agent given as argument or on stdin")
            .into());
    }
    if cfg.format == Format::Text {
        ensure_single_line(&agents)?;
    }
    tracing::debug!(agents = agents.len(), format = %cfg.format, "classify user agents");

    let mut out = io::stdout().lock();
    for (index, agent) in agents.into_iter().enumerate() {
        if index > 0 && cfg.format == Format::Text {
            writeln!(out)?;
        }
        write_classification(&mut out, cfg.format, &Classification::new(agent))?;
    }
    out.flush()?;

    Ok(())
}

/// The text format is line based, so agents spanning multiple lines cannot be written in it.
fn ensure_single_line(agents: &[String]) -> Result<(), OpaqueError> {
    match agents.iter().find(|agent| agent.contains(['\n', '\r'])) {
        Some(agent) => Err(OpaqueError::from_display(format!(
            "user agent {agent:?} contains a line break: use the json or xml format instead"
        ))),
        None => Ok(()),
    }
}

fn write_classification(
    mut out: impl Write,
    format: Format,
    classification: &Classification,
) -> Result<(), BoxError> {
    match format {
        Format::Text => {
            writeln!(out, "{}", classification.agent())?;
            for tag in classification.tags() {
                writeln!(out, "{tag}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut out, classification)
                .context("write classification as json")?;
            writeln!(out)?;
        }
        Format::Xml => writeln!(out, "{}", classification.to_xml_element())?,
    }
    Ok(())
}

fn read_agents(input: impl io::BufRead) -> Result<Vec<String>, BoxError> {
    let mut agents = Vec::new();
    for line in input.lines() {
        let line = line.context("read user agent from stdin")?;
        let agent = line.trim();
        if !agent.is_empty() {
            agents.push(agent.to_owned());
        }
    }
    Ok(agents)
}
