use tracing::{debug, warn};

use super::CommitRecord;

/// Separator between the fields of a commit header line.
pub const FIELD_SEPARATOR: char = '|';

/// `--pretty=format:` argument producing the header lines understood by [`parse_log`].
///
/// Fields in order:
///   `%H` - full commit hash
///   `%s` - subject
///   `%P` - parent hashes (space-separated)
pub const LOG_PRETTY_FORMAT: &str = "%H|%s|%P";

/// Scan state while walking the log line by line.
#[derive(Debug)]
enum Scan {
    /// No header seen yet, or the last header was unusable.
    Idle,
    /// A header has been read and file lines are attached to it.
    Accumulating(CommitRecord),
}

/// Parse a single commit header line.
///
/// The hash is the text before the first separator and the parent list is the
/// text after the last one, so a separator inside the subject stays part of the
/// message. A line with a single separator yields an empty parent list.
///
/// Returns `None` when the line has no separator or the hash field is empty.
pub fn parse_header(line: &str) -> Option<CommitRecord> {
    let (hash, rest) = line.split_once(FIELD_SEPARATOR)?;
    let hash = hash.trim();
    if hash.is_empty() {
        return None;
    }

    let (message, parents) = if let Some((message, parents)) = rest.rsplit_once(FIELD_SEPARATOR) {
        (message, parents)
    } else {
        debug!(hash, "commit header has no parent field, treating as root");
        (rest, "")
    };

    Some(CommitRecord {
        hash: hash.to_string(),
        message: message.to_string(),
        parents: parents.split_whitespace().map(str::to_string).collect(),
        files: Vec::new(),
    })
}

/// Parse raw `git log --name-only --pretty=format:%H|%s|%P` output.
///
/// Header lines (any line containing [`FIELD_SEPARATOR`]) start a new record;
/// every other non-empty line is a path touched by the current record. The
/// result keeps the log's native newest-first order and never merges records
/// with the same hash.
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    let (mut commits, last) = raw
        .lines()
        .fold((Vec::new(), Scan::Idle), |(mut commits, state), line| {
            let state = step(&mut commits, state, line);
            (commits, state)
        });

    if let Scan::Accumulating(record) = last {
        commits.push(record);
    }

    debug!(count = commits.len(), "parsed commit log");
    commits
}

fn step(commits: &mut Vec<CommitRecord>, state: Scan, line: &str) -> Scan {
    if line.trim().is_empty() {
        return state;
    }

    if line.contains(FIELD_SEPARATOR) {
        if let Scan::Accumulating(record) = state {
            commits.push(record);
        }
        return match parse_header(line) {
            Some(record) => Scan::Accumulating(record),
            None => {
                warn!(line, "commit header has an empty hash, skipping it and its files");
                Scan::Idle
            }
        };
    }

    match state {
        Scan::Accumulating(mut record) => {
            record.files.push(line.trim().to_string());
            Scan::Accumulating(record)
        }
        Scan::Idle => {
            debug!(line, "discarding file line with no preceding commit header");
            Scan::Idle
        }
    }
}
