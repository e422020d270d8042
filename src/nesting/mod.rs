mod stack;
pub use stack::IntStack;

mod delimiter;
pub use delimiter::Delimiter;

use anyhow::{bail, ensure};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Summary of a completed scan.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Nesting {
    pub max_depth: usize,
    pub groups: usize,
}

/// Walks a JSON-path expression and tracks bracket, brace and paren nesting
/// on an [`IntStack`]. Quoted literals are skipped.
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    offset: usize,
    stack: IntStack,
    depth_limit: Option<usize>,
    nesting: Nesting,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            stack: IntStack::new(),
            depth_limit: None,
            nesting: Default::default(),
        }
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn innermost(&self) -> Option<Delimiter> {
        self.stack.peek().and_then(Delimiter::from_marker)
    }

    /// Consumes one char (or one whole string literal). Returns `false` once
    /// the input is exhausted.
    pub fn step(&mut self) -> anyhow::Result<bool> {
        let input = self.input;
        let offset = self.offset;

        let c = match input[offset..].chars().next() {
            Some(c) => c,
            None => return Ok(false),
        };
        self.offset += c.len_utf8();

        if c == '\'' || c == '"' {
            self.skip_literal(c, offset)?;
        } else if let Some(d) = Delimiter::from_open(c) {
            self.open(d, offset)?;
        } else if let Some(d) = Delimiter::from_close(c) {
            self.close(d, offset)?;
        }

        Ok(true)
    }

    pub fn run(mut self) -> anyhow::Result<Nesting> {
        while self.step()? {}

        ensure!(
            self.stack.is_empty(),
            "unclosed `{}` at depth {}",
            self.innermost().map(Delimiter::open).unwrap_or('?'),
            self.depth()
        );

        debug!(
            "scanned {} bytes: max depth {}, {} groups",
            self.input.len(),
            self.nesting.max_depth,
            self.nesting.groups
        );

        Ok(self.nesting)
    }

    fn open(&mut self, d: Delimiter, offset: usize) -> anyhow::Result<()> {
        trace!("action: open {:?} at {}, depth {}", d, offset, self.depth());

        if let Some(limit) = self.depth_limit {
            ensure!(
                self.depth() < limit,
                "nesting deeper than limit {} at offset {}",
                limit,
                offset
            );
        }

        self.stack.push(d.to_marker());
        self.nesting.max_depth = self.nesting.max_depth.max(self.depth());

        Ok(())
    }

    fn close(&mut self, d: Delimiter, offset: usize) -> anyhow::Result<()> {
        trace!("action: close {:?} at {}, depth {}", d, offset, self.depth());

        let expected = match self.innermost() {
            Some(expected) => expected,
            None => bail!("unexpected `{}` at offset {}", d.close(), offset),
        };

        ensure!(
            expected == d,
            "expected `{}` but found `{}` at offset {}",
            expected.close(),
            d.close(),
            offset
        );

        self.stack.pop();
        self.nesting.groups += 1;

        Ok(())
    }

    fn skip_literal(&mut self, quote: char, start: usize) -> anyhow::Result<()> {
        let input = self.input;
        let mut escaped = false;

        for c in input[self.offset..].chars() {
            self.offset += c.len_utf8();

            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                trace!("action: skip literal {}..{}", start, self.offset);
                return Ok(());
            }
        }

        bail!("unterminated string literal starting at offset {}", start)
    }
}

/// Scans `input` with no depth limit.
pub fn scan(input: &str) -> anyhow::Result<Nesting> {
    Scanner::new(input).run()
}
