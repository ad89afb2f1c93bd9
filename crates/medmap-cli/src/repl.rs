//! Line-oriented command vocabulary for the interactive driver.
//!
//! Parsing is separated from dispatch so the grammar can be tested without a
//! runtime or live capabilities.

use std::collections::HashSet;

use medmap_core::{BoundingBox, BusinessStatus, Practitioner};
use medmap_app::Snapshot;

/// One parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// `search <text>`: debounced address lookup.
    Search(String),
    /// `pick <n>`: select the n-th suggestion (1-based).
    Pick(usize),
    /// `settle <min_lat> <min_lng> <max_lat> <max_lng> <zoom>`.
    Settle { bbox: BoundingBox, zoom: u8 },
    /// `specialty [text]`: filter practitioners; bare clears.
    Specialty(Option<String>),
    /// `status [open,closed,noinfo]`: filter by live status; bare clears.
    Status(Option<HashSet<BusinessStatus>>),
    /// `district [text]`: filter suggestions; bare clears.
    District(Option<String>),
    /// `select [n]`: pin the n-th visible practitioner; bare unpins.
    Select(Option<usize>),
    /// `locate`: recenter to the device position.
    Locate,
    /// `list`: print the filtered practitioner list.
    List,
    Help,
    Quit,
}

/// Parse one input line. Empty lines are `Ok(None)`.
pub(crate) fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = tokens.collect();

    let command = match verb {
        "search" => {
            if rest.is_empty() {
                return Err("usage: search <text>".to_owned());
            }
            Command::Search(rest.join(" "))
        }
        "pick" => Command::Pick(parse_index(&rest, "pick")?),
        "settle" => {
            if rest.len() != 5 {
                return Err(
                    "usage: settle <min_lat> <min_lng> <max_lat> <max_lng> <zoom>".to_owned(),
                );
            }
            let coord = |i: usize| -> Result<f64, String> {
                rest[i]
                    .parse()
                    .map_err(|_| format!("not a coordinate: {}", rest[i]))
            };
            Command::Settle {
                bbox: BoundingBox {
                    min_lat: coord(0)?,
                    min_lng: coord(1)?,
                    max_lat: coord(2)?,
                    max_lng: coord(3)?,
                },
                zoom: rest[4]
                    .parse()
                    .map_err(|_| format!("not a zoom level: {}", rest[4]))?,
            }
        }
        "specialty" => Command::Specialty(optional_text(&rest)),
        "status" => Command::Status(parse_statuses(&rest)?),
        "district" => Command::District(optional_text(&rest)),
        "select" => {
            if rest.is_empty() {
                Command::Select(None)
            } else {
                Command::Select(Some(parse_index(&rest, "select")?))
            }
        }
        "locate" => Command::Locate,
        "list" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(command))
}

fn parse_index(rest: &[&str], verb: &str) -> Result<usize, String> {
    let Some(raw) = rest.first() else {
        return Err(format!("usage: {verb} <n>"));
    };
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("not a 1-based index: {raw}")),
    }
}

fn optional_text(rest: &[&str]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn parse_statuses(rest: &[&str]) -> Result<Option<HashSet<BusinessStatus>>, String> {
    let Some(raw) = rest.first() else {
        return Ok(None);
    };
    let mut statuses = HashSet::new();
    for token in raw.split(',').filter(|t| !t.is_empty()) {
        let status = match token.to_ascii_lowercase().as_str() {
            "open" => BusinessStatus::Open,
            "closed" => BusinessStatus::Closed,
            "noinfo" | "no_info" => BusinessStatus::NoInfo,
            other => return Err(format!("unknown status: {other}")),
        };
        statuses.insert(status);
    }
    Ok(Some(statuses))
}

pub(crate) const HELP: &str = "\
commands:
  search <text>                                  debounced address lookup
  pick <n>                                       select the n-th suggestion
  settle <min_lat> <min_lng> <max_lat> <max_lng> <zoom>
  specialty [text]                               filter practitioners (bare clears)
  status [open,closed,noinfo]                    filter by live status (bare clears)
  district [text]                                filter suggestions (bare clears)
  select [n]                                     pin the n-th practitioner (bare unpins)
  locate                                         recenter to device position
  list                                           print the filtered practitioner list
  quit";

pub(crate) fn print_snapshot(snapshot: &Snapshot) {
    println!(
        "viewport: center ({:.4}, {:.4}) zoom {}{}",
        snapshot.viewport.center.lat,
        snapshot.viewport.center.lng,
        snapshot.viewport.zoom,
        if snapshot.is_loading { "  [loading]" } else { "" },
    );
    if let Some(warning) = &snapshot.warning {
        println!("warning: {warning}");
    }
    if let Some(error) = &snapshot.error {
        println!("error: {error}");
    }
    if !snapshot.query.is_empty() {
        println!("query: {}", snapshot.query);
    }
    for (i, candidate) in snapshot.candidates.iter().enumerate() {
        println!(
            "  {}. {} / {}  [{}]",
            i + 1,
            candidate.desc_tc,
            candidate.desc_en,
            candidate.supp_desc_tc,
        );
    }
    println!("practitioners in view: {}", snapshot.practitioners.len());
}

pub(crate) fn print_practitioners(practitioners: &[Practitioner]) {
    if practitioners.is_empty() {
        println!("(no practitioners match)");
        return;
    }
    for (i, p) in practitioners.iter().enumerate() {
        println!(
            "  {}. {} ({})  {}  {}  ({:.4}, {:.4})",
            i + 1,
            p.name_en,
            p.name_tc,
            p.specialty,
            p.phone,
            p.location.lat,
            p.location.lng,
        );
    }
}

#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;
