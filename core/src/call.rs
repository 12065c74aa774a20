//! The `call` operation: dry run, log mode or table mode over the registry.

use std::io::{self, Write};

use crate::dispatch::{Dispatcher, Outcome};
use crate::hook::Hook;
use crate::report::Reporter;

/// Mode flags for one `call` round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Print what would be called without touching the network.
    pub dry_run: bool,
    /// Print one line per hook as it settles instead of a final table.
    pub log: bool,
}

/// Run one round and write its report to `out`.
///
/// Returns the outcomes in input order; a dry run returns none. A failed log
/// write is returned only once the whole round has settled.
pub async fn run<W: Write>(
    dispatcher: &Dispatcher,
    hooks: &[Hook],
    options: CallOptions,
    reporter: Reporter,
    out: &mut W,
) -> io::Result<Vec<Outcome>> {
    if options.dry_run {
        for (index, hook) in hooks.iter().enumerate() {
            writeln!(out, "{}", reporter.dry_run_line(index, hook))?;
        }
        return Ok(Vec::new());
    }

    let mut write_error = None;
    let outcomes = dispatcher
        .dispatch(hooks, |outcome| {
            if options.log && write_error.is_none() {
                if let Err(e) = writeln!(out, "{}", reporter.log_line(outcome)) {
                    write_error = Some(e);
                }
            }
        })
        .await;

    if let Some(e) = write_error {
        return Err(e);
    }
    if !options.log {
        write!(out, "{}", reporter.outcome_table(&outcomes))?;
    }
    out.flush()?;
    Ok(outcomes)
}
