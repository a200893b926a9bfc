//! The interactive command loop.
//!
//! The warehouse is owned by the caller and handed to every handler by
//! reference; nothing here keeps global state.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use warehouse_core::DomainError;
use warehouse_inventory::{AddOutcome, Good, Warehouse};

use crate::command::{self, Command, CommandError, HELP};
use crate::config::CliConfig;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Read commands from `input` until it ends or an exit command arrives.
///
/// Malformed commands and rejected operations are reported on `out` and the
/// loop goes on; only I/O failures end it early.
pub fn run<R, W>(config: &CliConfig, warehouse: &mut Warehouse, input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                warn!(input = %line, error = %err, "rejected command");
                writeln!(out, "Invalid command: {err}")?;
                continue;
            }
        };

        if execute(warehouse, command, &mut out, Utc::now())? == Flow::Exit {
            return Ok(());
        }
    }
}

/// Run one parsed command against `warehouse`, writing results to `out`.
pub fn execute<W: Write>(
    warehouse: &mut Warehouse,
    command: Command,
    out: &mut W,
    now: DateTime<Utc>,
) -> io::Result<Flow> {
    debug!(?command, "executing command");

    match command {
        Command::Exit => return Ok(Flow::Exit),
        Command::Clear => {
            write!(out, "{CLEAR_SCREEN}")?;
            out.flush()?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Add(good) => match warehouse.add_at(*good, now) {
            Ok(AddOutcome::Stored { id }) => writeln!(out, "Stored {id}")?,
            Ok(AddOutcome::Merged { id, count }) => {
                writeln!(out, "Merged into {id}, count is now {count}")?
            }
            Err(err) => report(out, &err)?,
        },
        Command::Search(text) => print_listing(out, warehouse.search(&text))?,
        Command::List(None) => print_listing(out, warehouse.iter())?,
        Command::List(Some(category)) => {
            print_listing(out, warehouse.filter_by_category(category))?
        }
        Command::Info(id) => match warehouse.get(&id) {
            Some(good) => print_details(out, good, now)?,
            None => report(out, &DomainError::not_found(id.to_string()))?,
        },
        Command::Maintain(id) => {
            let result = warehouse
                .get_mut(&id)
                .ok_or_else(|| DomainError::not_found(id.to_string()))
                .and_then(|good| good.maintain(now));
            match result {
                Ok(()) => writeln!(out, "Maintained {id}")?,
                Err(err) => report(out, &err)?,
            }
        }
        Command::Expired => {
            let today = now.date_naive();
            print_listing(out, warehouse.filter(|g| g.is_expired(today) == Some(true)))?
        }
        Command::Export => {
            serde_json::to_writer_pretty(&mut *out, &*warehouse)?;
            writeln!(out)?;
        }
    }

    Ok(Flow::Continue)
}

fn report<W: Write>(out: &mut W, err: &DomainError) -> io::Result<()> {
    warn!(error = %err, "command failed");
    writeln!(out, "Error: {err}")
}

fn print_listing<'a, W, I>(out: &mut W, goods: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Good>,
{
    let mut shown = 0usize;
    for good in goods {
        if shown > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", good.information())?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No matching goods.")?;
    }
    Ok(())
}

fn print_details<W: Write>(out: &mut W, good: &Good, now: DateTime<Utc>) -> io::Result<()> {
    writeln!(out, "{}", good.information())?;
    writeln!(out, "Category: {}", good.category())?;
    if !good.description().is_empty() {
        writeln!(out, "Description: {}", good.description())?;
    }
    if let Some(expired) = good.is_expired(now.date_naive()) {
        writeln!(out, "Expired: {}", if expired { "yes" } else { "no" })?;
    }
    if let Some(at) = good.last_maintained() {
        writeln!(out, "Last maintained: {}", at.format("%d/%m/%Y"))?;
    }
    writeln!(out, "{}", good.check_condition())
}
