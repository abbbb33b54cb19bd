use crate::{
    api::{Error, SessionOptions},
    evaluator::evaluate,
    parser::{ParsedExpr, parse_with_max_depth},
    region::Region,
};

/// A region plus the options used to parse into it.
#[derive(Debug)]
pub struct Session {
    options: SessionOptions,
    region: Region,
}

impl Session {
    pub fn new(options: SessionOptions) -> Result<Self, Error> {
        let region = Region::new(options.region_capacity)?;
        tracing::debug!(
            capacity = region.capacity(),
            max_depth = options.max_depth,
            "session created"
        );
        Ok(Self { options, region })
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Parse and evaluate `source`. The region is reset before returning,
    /// whatever the outcome.
    pub fn evaluate(&mut self, source: &str) -> Result<f64, Error> {
        let value = self.parse_and_then(source, |parsed| evaluate(parsed.expr))?;
        tracing::debug!(source, value, "evaluated");
        Ok(value)
    }

    /// Parse `source` and hand the tree to `f` while it is still alive.
    ///
    /// The tree cannot escape `f`; the region is reset when this returns.
    pub fn parse_and_then<T>(
        &mut self,
        source: &str,
        f: impl FnOnce(&ParsedExpr<'_>) -> T,
    ) -> Result<T, Error> {
        let max_depth = self.options.max_depth;
        let scope = self.region.scope();

        let parsed = parse_with_max_depth(&scope, source, max_depth).map_err(|e| {
            tracing::debug!(error = %e.kind, "parse failed");
            Error::from(e)
        })?;
        tracing::debug!(used = scope.used(), "parsed");

        Ok(f(&parsed))
    }
}
