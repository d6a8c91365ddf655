//! Check command: classify one input for a channel.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postgate_core::{Assessment, Channel, Classifier, ErrorDescriptor};

use super::resolve_input;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Field the input belongs to.
    #[arg(value_enum)]
    pub channel: Channel,

    /// Input text. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,
}

/// Classify one input and report the verdict.
///
/// Exits non-zero on a blocking verdict unless `--json` is set.
#[instrument(name = "cmd_check", skip_all, fields(channel = %args.channel))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    classifier: &Classifier,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let input = resolve_input(args.text, args.file.as_deref(), max_input_bytes)?;
    debug!(len = input.len(), "executing check command");

    let assessment = classifier.assess(args.channel, &input);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    report(&assessment)
}

fn report(assessment: &Assessment) -> anyhow::Result<()> {
    let Assessment {
        channel,
        verdict,
        length,
        thresholds,
        ..
    } = assessment;

    match assessment.error {
        None => {
            println!(
                "{} {channel} is {} ({length}/{} chars)",
                "PASS:".green(),
                verdict.green(),
                thresholds.max_length,
            );
            Ok(())
        }
        Some(ref descriptor) => {
            print_descriptor(descriptor);
            if let Some(rule) = assessment.lexical_rule {
                println!("{}: {}", "Rule".dimmed(), rule.as_str());
            }
            bail!("{channel} rejected as {verdict}");
        }
    }
}

/// Print a descriptor the way the form shows it.
pub fn print_descriptor(descriptor: &ErrorDescriptor) {
    println!("{} {}", descriptor.icon, descriptor.title.bold());
    println!("{}", descriptor.message);
    for suggestion in &descriptor.suggestions {
        println!("  {} {suggestion}", "•".cyan());
    }
}
