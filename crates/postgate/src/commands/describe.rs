//! Describe command: print the message shown for a verdict.

use clap::Args;
use tracing::{debug, instrument};

use postgate_core::{Channel, Verdict, describe};

use super::check::print_descriptor;

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Verdict to describe.
    #[arg(value_enum)]
    pub verdict: Verdict,

    /// Field the verdict was reported on.
    #[arg(long, value_enum, default_value = "topic")]
    pub channel: Channel,
}

/// Print the descriptor for a `(verdict, channel)` pair.
#[instrument(name = "cmd_describe", skip_all, fields(verdict = %args.verdict, channel = %args.channel))]
pub fn cmd_describe(args: DescribeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing describe command");
    let descriptor = describe(args.verdict, args.channel);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print_descriptor(&descriptor);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_describes() {
        for verdict in Verdict::ALL {
            for channel in Channel::ALL {
                assert!(cmd_describe(DescribeArgs { verdict, channel }, true).is_ok());
            }
        }
    }
}
