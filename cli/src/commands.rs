//! Command handlers. Each one works on a registry loaded by `run`, which also
//! saves it after `add` and `del`.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use hooker_core::call::CallOptions;
use hooker_core::{Dispatcher, Hook, Registry, Reporter, Transport, Url};
use tracing::{debug, info};

use crate::cli::{AddArgs, CallArgs, Cli, Command};

/// Load the registry, run the selected command and persist any change.
pub async fn run<W: Write>(
    cli: Cli,
    transport: Arc<dyn Transport>,
    reporter: Reporter,
    out: &mut W,
) -> Result<()> {
    let mut registry = Registry::load(&cli.config)?;

    let mutated = match cli.command.unwrap_or(Command::List) {
        Command::List => {
            list(&registry, reporter, out)?;
            false
        }
        Command::Add(args) => {
            add(&mut registry, args);
            true
        }
        Command::Del(args) => {
            del(&mut registry, &args.url, out)?;
            true
        }
        Command::Call(args) => {
            call(&registry, args, Dispatcher::new(transport), reporter, out).await?;
            false
        }
    };

    if mutated {
        registry.save(&cli.config)?;
    }
    Ok(())
}

pub fn list<W: Write>(registry: &Registry, reporter: Reporter, out: &mut W) -> Result<()> {
    write!(out, "{}", reporter.hook_table(registry.hooks()))?;
    Ok(())
}

pub fn add(registry: &mut Registry, args: AddArgs) {
    let hook = Hook::new(args.url, args.verb)
        .with_name(args.name.join(" "))
        .with_headers(args.headers);
    info!(name = %hook.name, verb = %hook.verb, url = %hook.url, "hook added");
    registry.push(hook);
}

/// Remove every hook registered for `url` and report how many went.
pub fn del<W: Write>(registry: &mut Registry, url: &Url, out: &mut W) -> Result<usize> {
    let removed = registry.remove_by_url(url);
    for index in &removed {
        debug!(%url, index, "removing hook");
    }
    writeln!(out, "removed {} URLs", removed.len())?;
    Ok(removed.len())
}

pub async fn call<W: Write>(
    registry: &Registry,
    args: CallArgs,
    dispatcher: Dispatcher,
    reporter: Reporter,
    out: &mut W,
) -> Result<()> {
    if args.url != "all" {
        debug!(url = %args.url, "call --url is ignored, calling every hook");
    }
    let options = CallOptions {
        dry_run: args.dry_run,
        log: args.log,
    };
    let outcomes = hooker_core::call::run(&dispatcher, registry.hooks(), options, reporter, out)
        .await
        .context("failed to write call report")?;
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    debug!(calls = outcomes.len(), failed, "call finished");
    Ok(())
}
