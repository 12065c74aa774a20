//! Text rendering for hook lists, dry runs and dispatch outcomes.
//!
//! Tables mimic a console table: a boxed grid with an `(index)` column.
//! Column widths are measured on the uncoloured text so ANSI escapes never
//! skew the layout.

use std::fmt::Write as _;

use crate::dispatch::{CallStatus, Outcome};
use crate::hook::Hook;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Renders report text, optionally with ANSI colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    color: bool,
}

struct Cell {
    text: String,
    color: Option<&'static str>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// `[index] name (VERB) url - [TEST]`
    pub fn dry_run_line(&self, index: usize, hook: &Hook) -> String {
        format!(
            "[{index}] {} ({}) {} - [{}]",
            hook.name,
            hook.verb,
            hook.url,
            self.paint("TEST", YELLOW)
        )
    }

    /// `index - name (VERB) url - [ status ]`, printed as each call settles.
    pub fn log_line(&self, outcome: &Outcome) -> String {
        let status = match &outcome.status {
            CallStatus::Success { status_text } => status_text.as_str(),
            CallStatus::Failure => "FAIL",
        };
        format!(
            "{} - {} ({}) {} - [ {status} ]",
            outcome.index, outcome.name, outcome.verb, outcome.url
        )
    }

    /// The summary table printed once every call has settled. Rows follow
    /// the order of `outcomes`.
    pub fn outcome_table(&self, outcomes: &[Outcome]) -> String {
        let rows = outcomes
            .iter()
            .map(|o| {
                let status = match &o.status {
                    CallStatus::Success { status_text } => Cell {
                        text: format!("[ {status_text} ]"),
                        color: Some(GREEN),
                    },
                    CallStatus::Failure => Cell {
                        text: "[FAIL]".to_string(),
                        color: Some(RED),
                    },
                };
                vec![
                    Cell::plain(o.index.to_string()),
                    Cell::plain(o.name.as_str()),
                    Cell::plain(o.verb.as_str()),
                    Cell::plain(o.url.as_str()),
                    status,
                ]
            })
            .collect::<Vec<_>>();
        self.table(&["(index)", "name", "verb", "url", "status"], &rows)
    }

    /// The registry listing: one row per hook.
    pub fn hook_table(&self, hooks: &[Hook]) -> String {
        let rows = hooks
            .iter()
            .enumerate()
            .map(|(index, hook)| {
                vec![
                    Cell::plain(index.to_string()),
                    Cell::plain(hook.name.as_str()),
                    Cell::plain(hook.verb.as_str()),
                    Cell::plain(hook.url.as_str()),
                ]
            })
            .collect::<Vec<_>>();
        self.table(&["(index)", "name", "verb", "url"], &rows)
    }

    fn table(&self, headers: &[&str], rows: &[Vec<Cell>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}\n", segments.join(mid))
        };

        let mut out = String::new();
        out.push_str(&rule("┌", "┬", "┐"));
        let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::plain(*h)).collect();
        self.row(&mut out, &widths, &header_cells);
        out.push_str(&rule("├", "┼", "┤"));
        for row in rows {
            self.row(&mut out, &widths, row);
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }

    fn row(&self, out: &mut String, widths: &[usize], cells: &[Cell]) {
        out.push('│');
        for (cell, width) in cells.iter().zip(widths) {
            let pad = width - cell.text.chars().count();
            let text = match cell.color {
                Some(color) => self.paint(&cell.text, color),
                None => cell.text.clone(),
            };
            let _ = write!(out, " {text}{} │", " ".repeat(pad));
        }
        out.push('\n');
    }
}
