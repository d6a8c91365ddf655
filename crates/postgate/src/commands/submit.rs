//! Submit command: screen a topic and audience pair.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use std::time::Instant;

use postgate_core::session::{Field, FormSession};
use postgate_core::{Assessment, Rejection};

use super::check::print_descriptor;

/// Arguments for the `submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Post topic.
    #[arg(long)]
    pub topic: String,

    /// Target audience.
    #[arg(long)]
    pub audience: String,
}

#[derive(Serialize)]
struct SubmitReport {
    pass: bool,
    audience: Assessment,
    topic: Assessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

/// Fill both fields of a form session and submit it, reporting the first
/// rejection (audience before topic).
#[instrument(name = "cmd_submit", skip_all)]
pub fn cmd_submit(
    args: SubmitArgs,
    global_json: bool,
    mut session: FormSession,
) -> anyhow::Result<()> {
    debug!("executing submit command");

    let now = Instant::now();
    session.input(Field::Audience, args.audience, now);
    session.input(Field::Topic, args.topic, now);
    let rejection = session.submit().err();

    let assess = |field: Field| {
        session
            .classifier()
            .assess(field.channel(), session.field(field).value())
    };
    let report = SubmitReport {
        pass: rejection.is_none(),
        audience: assess(Field::Audience),
        topic: assess(Field::Topic),
        rejection,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for assessment in [&report.audience, &report.topic] {
        let status = if assessment.verdict.is_safe() {
            "PASS".green().to_string()
        } else {
            "FAIL".red().to_string()
        };
        println!(
            "  {} {status} {}",
            format!("{}:", assessment.channel).cyan(),
            assessment.verdict
        );
    }

    if let Some(rejection) = report.rejection {
        println!();
        print_descriptor(&rejection.descriptor);
        bail!("submission blocked: {rejection}");
    }

    println!("{} ready to generate", "PASS:".green());
    Ok(())
}
