use anyhow::Result;
use std::io::Write;
use strsim::levenshtein;

use crate::cli::Command;
use crate::error::QuickLinkError;
use crate::launcher::Opener;
use crate::store::{Bookmarks, Store};

/// Whether a command changed the bookmarks and they need saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Changed,
}

/// Loads the bookmarks, runs `command` against them and saves them back
/// if it changed anything.
pub fn run(
    command: Command,
    store: &Store,
    opener: &dyn Opener,
    out: &mut dyn Write,
    verbose: bool,
) -> Result<()> {
    if verbose {
        writeln!(out, "Reading bookmarks from {}", store.path().display())?;
    }
    let mut bookmarks = store.load()?;
    if verbose {
        writeln!(out, "Loaded {} bookmark(s).", bookmarks.len())?;
    }

    if execute(command, &mut bookmarks, opener, out)? == Outcome::Changed {
        store.save(&bookmarks)?;
        if verbose {
            writeln!(out, "Saved {} bookmark(s) to {}", bookmarks.len(), store.path().display())?;
        }
    }
    Ok(())
}

/// Applies `command` to in-memory bookmarks. Nothing touches the disk here.
pub fn execute(
    command: Command,
    bookmarks: &mut Bookmarks,
    opener: &dyn Opener,
    out: &mut dyn Write,
) -> Result<Outcome> {
    match command {
        Command::List => {
            list(bookmarks, out)?;
            Ok(Outcome::Unchanged)
        }
        Command::Add { name, location, .. } => {
            add(bookmarks, &name, &location)?;
            Ok(Outcome::Changed)
        }
        Command::Remove { name } => {
            remove(bookmarks, name.as_deref().unwrap_or(""))?;
            Ok(Outcome::Changed)
        }
        Command::Open(words) => {
            let name = words.first().map(String::as_str).unwrap_or("");
            let location = lookup(bookmarks, name)?;
            opener.open(location, out)?;
            Ok(Outcome::Unchanged)
        }
    }
}

pub fn list(bookmarks: &Bookmarks, out: &mut dyn Write) -> Result<()> {
    let mut entries: Vec<_> = bookmarks.iter().collect();
    entries.sort();

    writeln!(out, "Name : Location")?;
    writeln!(out)?;
    for (name, location) in entries {
        writeln!(out, "{} : {}", name, location)?;
    }
    Ok(())
}

/// Inserts `name -> location`, trimmed. Either being blank is rejected
/// before anything is changed.
pub fn add(bookmarks: &mut Bookmarks, name: &str, location: &str) -> Result<(), QuickLinkError> {
    let trimmed_name = name.trim();
    if trimmed_name.is_empty() {
        return Err(QuickLinkError::EmptyName(name.to_string()));
    }
    let trimmed_location = location.trim();
    if trimmed_location.is_empty() {
        return Err(QuickLinkError::EmptyLocation(location.to_string()));
    }

    bookmarks.insert(trimmed_name, trimmed_location);
    Ok(())
}

/// Removes `name`, returning its location.
pub fn remove(bookmarks: &mut Bookmarks, name: &str) -> Result<String, QuickLinkError> {
    match bookmarks.remove(name) {
        Some(location) => Ok(location),
        None => Err(not_registered(bookmarks, name)),
    }
}

pub fn lookup<'a>(bookmarks: &'a Bookmarks, name: &str) -> Result<&'a str, QuickLinkError> {
    bookmarks
        .get(name)
        .ok_or_else(|| not_registered(bookmarks, name))
}

fn not_registered(bookmarks: &Bookmarks, name: &str) -> QuickLinkError {
    QuickLinkError::NotRegistered {
        name: name.to_string(),
        suggestion: closest_name(bookmarks, name).map(str::to_string),
    }
}

/// The registered name most similar to `query`, if any is close enough.
/// Lower score is better; ties go to the alphabetically first name.
pub fn closest_name<'a>(bookmarks: &'a Bookmarks, query: &str) -> Option<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let max_distance = (query.chars().count() / 3).max(1);

    let mut best: Option<(usize, &str)> = None;
    for name in bookmarks.names() {
        let name_lower = name.to_lowercase();
        let score = levenshtein(&name_lower, &query);
        let close = name_lower == query
            || name_lower.contains(&query)
            || query.contains(&name_lower)
            || score <= max_distance;
        if !close {
            continue;
        }

        let better = match best {
            Some((best_score, best_name)) => (score, name) < (best_score, best_name),
            None => true,
        };
        if better {
            best = Some((score, name));
        }
    }
    best.map(|(_, name)| name)
}
