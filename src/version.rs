//! Ordering of version tokens.
//!
//! Tokens are opaque strings scraped from a listing. Two orderings exist:
//! plain string comparison, which is the default, and a segment-wise numeric
//! comparison that must be asked for explicitly.

use clap::ValueEnum;
use std::cmp::Ordering;

/// How version tokens are ranked when picking the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VersionOrder {
    /// Plain string comparison. "3.9.0" ranks above "3.10.0".
    #[default]
    Lexical,
    /// Segment-wise comparison on `.` and `-`, numeric segments compared as integers.
    Numeric,
}

impl VersionOrder {
    /// Compares two tokens in ascending order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            VersionOrder::Lexical => a.cmp(b),
            VersionOrder::Numeric => compare_numeric(a, b),
        }
    }
}

/// Sorts tokens newest first.
pub fn sort_descending<S: AsRef<str>>(tokens: &mut [S], order: VersionOrder) {
    tokens.sort_by(|a, b| order.compare(b.as_ref(), a.as_ref()));
}

/// Returns the first token after [`sort_descending`], or `None` for an empty slice.
pub fn select_latest(tokens: &[String], order: VersionOrder) -> Option<&str> {
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sort_descending(&mut sorted, order);
    sorted.first().copied()
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a_parts = segments(a);
    let b_parts = segments(b);

    for i in 0..a_parts.len().max(b_parts.len()) {
        let ord = match (a_parts.get(i), b_parts.get(i)) {
            (Some(ap), Some(bp)) => compare_segment(ap, bp),
            (Some(ap), None) => trailing_segment(ap),
            (None, Some(bp)) => trailing_segment(bp).reverse(),
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // "3.0.1" and "3.0-1" split alike; fall back to the raw text so the order is total
    a.cmp(b)
}

fn segments(v: &str) -> Vec<&str> {
    v.split(['.', '-']).filter(|s| !s.is_empty()).collect()
}

fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(an), Ok(bn)) => an.cmp(&bn),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Ranks the longer token against its prefix: an extra number is newer
/// ("3.0.1" > "3.0"), an extra qualifier is older ("3.5.0-beta-1" < "3.5.0").
fn trailing_segment(segment: &str) -> Ordering {
    if segment.parse::<u64>().is_ok() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}
