//! Line-oriented graph description reader.
//!
//! A description is a vertex count alone on its line, one label per line, and
//! then whitespace-separated integer edge descriptors. The descriptor list ends
//! at end of input or at the first descriptor holding a `0` in any field, so
//! several descriptions can be stacked in one text:
//!
//! ```text
//! 3
//! Aurora and 85th
//! Green Lake Starbucks
//! Woodland Park Zoo
//! 1 2 50
//! 2 3 20
//! 0 0 0
//! ```

use crate::error::{GraphError, Result};

/// Supplies one vertex label at a time, in vertex order.
pub trait LabelSource<L> {
    /// Returns the next label, or `None` once the source is drained.
    fn next_label(&mut self) -> Option<L>;
}

impl<L, I> LabelSource<L> for I
where
    I: Iterator<Item = L>,
{
    fn next_label(&mut self) -> Option<L> {
        self.next()
    }
}

/// A cursor over a textual graph description.
#[derive(Debug, Clone)]
pub struct GraphReader<'a> {
    rest: &'a str,
}

impl<'a> GraphReader<'a> {
    /// Creates a reader positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Returns `true` when only whitespace remains.
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim().is_empty()
    }

    fn next_token(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Reads the next integer token. `Ok(None)` means end of input.
    pub fn next_int(&mut self) -> Result<Option<i64>> {
        match self.next_token() {
            None => Ok(None),
            Some(token) => token.parse().map(Some).map_err(|_| GraphError::Parse {
                token: token.to_owned(),
            }),
        }
    }

    /// Reads the rest of the current line, without its terminator.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = match self.rest.find('\n') {
            Some(at) => (&self.rest[..at], &self.rest[at + 1..]),
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Reads a vertex count and discards the remainder of its line.
    pub fn read_count(&mut self) -> Result<i64> {
        let count = self.next_int()?.ok_or(GraphError::UnexpectedEnd {
            expected: "vertex count",
        })?;
        self.next_line();
        Ok(count)
    }

    /// Reads `count` labels, one per line.
    pub fn read_labels<L>(&mut self, count: usize) -> Result<Vec<L>>
    where
        L: From<String>,
    {
        let mut labels = Vec::new();
        for _ in 0..count {
            let line = self.next_line().ok_or(GraphError::UnexpectedEnd {
                expected: "vertex label",
            })?;
            labels.push(L::from(line.to_owned()));
        }
        Ok(labels)
    }

    /// Reads one edge descriptor of `K` integers.
    ///
    /// Returns `Ok(None)` at the terminator: end of input (including a
    /// descriptor cut short by it) or any field equal to zero.
    pub fn read_descriptor<const K: usize>(&mut self) -> Result<Option<[i64; K]>> {
        let mut fields = [0i64; K];
        for field in &mut fields {
            match self.next_int()? {
                Some(value) => *field = value,
                None => return Ok(None),
            }
        }
        if fields.contains(&0) {
            return Ok(None);
        }
        Ok(Some(fields))
    }

    /// Reads descriptors up to and including the terminator.
    pub fn read_descriptors<const K: usize>(&mut self) -> Result<Vec<[i64; K]>> {
        let mut descriptors = Vec::new();
        while let Some(fields) = self.read_descriptor::<K>()? {
            descriptors.push(fields);
        }
        Ok(descriptors)
    }
}

impl<'a, L> LabelSource<L> for GraphReader<'a>
where
    L: From<String>,
{
    fn next_label(&mut self) -> Option<L> {
        self.next_line().map(|line| L::from(line.to_owned()))
    }
}
