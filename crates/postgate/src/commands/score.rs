//! Score command: engagement heuristics for a finished post.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postgate_core::engagement::{self, Rating};

use super::resolve_input;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Post to score. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,
}

/// Score a post for engagement.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing score command");

    let file = args.file.filter(|f| f.as_str() != "-");
    let content = resolve_input(None, file.as_deref(), max_input_bytes)?;
    let report = engagement::score_post(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score = match report.rating {
        Rating::High => report.score.green().to_string(),
        Rating::Good => report.score.yellow().to_string(),
        Rating::Improve => report.score.red().to_string(),
    };
    println!("{} {score}/100 ({})", "Engagement:".bold(), report.rating);

    let read = if report.read_minutes == 0 {
        "< 1 min".to_string()
    } else {
        format!("{} min", report.read_minutes)
    };
    println!("{}: {} ({read} read)", "Words".dimmed(), report.words);
    println!("{}: {}", "Line breaks".dimmed(), report.line_breaks);
    println!("{}: {}", "Emoji".dimmed(), report.emoji);
    println!("{}: {}", "Hashtags".dimmed(), report.hashtags);
    println!(
        "{}: {:.1} words",
        "Mean paragraph".dimmed(),
        report.mean_paragraph_words
    );

    Ok(())
}
