//! Deterministic memory accounting for retained lines.
//!
//! A line costs its `String` header plus its byte length; a collection costs
//! its `Vec` header plus the cost of every line in it. Spare capacity is not
//! counted, so the figures depend only on the data.

use std::mem::size_of;

pub fn line(line: &str) -> usize {
    size_of::<String>() + line.len()
}

pub fn lines(lines: &[String]) -> usize {
    size_of::<Vec<String>>() + lines.iter().map(|l| line(l)).sum::<usize>()
}
