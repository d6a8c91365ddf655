//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod describe;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod submit;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read standard input, refusing more than `max_bytes`.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            // one extra byte tells "exactly at the limit" from "over it"
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Resolve input from an inline argument, a file, or stdin, in that order.
pub fn resolve_input(
    inline: Option<String>,
    file: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(text), _) if text != "-" => Ok(text),
        (_, Some(path)) => read_input_file(path, max_bytes),
        _ => read_stdin(max_bytes),
    }
}
