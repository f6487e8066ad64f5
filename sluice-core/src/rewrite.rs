use std::{
    borrow::Cow,
    fmt::{self, Debug},
    sync::Arc,
};

/// A textual fix applied to the SQL before it is scanned and sent.
///
/// Rewrites exist to work around statements generated by third party tools that
/// the engine would otherwise reject. They must never introduce or remove a `?`
/// placeholder.
pub trait Rewrite: Send + Sync {
    /// Name used in the logs.
    fn name(&self) -> &'static str;
    /// Returns the input borrowed when nothing had to change.
    fn rewrite<'s>(&self, sql: &'s str) -> Cow<'s, str>;
}

/// Removes the empty quoted catalog qualifier (`"".`) emitted by some BI tools
/// in front of the table name, for example `SELECT * FROM "".idx`, which makes
/// the parser fail with an extraneous input `.` error.
#[derive(Default, Debug, Clone, Copy)]
pub struct EmptyCatalogQualifier;

impl EmptyCatalogQualifier {
    pub const PATTERN: &'static str = "\"\".";
}

impl Rewrite for EmptyCatalogQualifier {
    fn name(&self) -> &'static str {
        "empty_catalog_qualifier"
    }
    fn rewrite<'s>(&self, sql: &'s str) -> Cow<'s, str> {
        if sql.contains(Self::PATTERN) {
            Cow::Owned(sql.replace(Self::PATTERN, ""))
        } else {
            Cow::Borrowed(sql)
        }
    }
}

/// Ordered list of [`Rewrite`] steps, each one applied exactly once.
#[derive(Clone)]
pub struct Rewrites {
    steps: Vec<Arc<dyn Rewrite>>,
}

impl Rewrites {
    /// No rewrite at all, the SQL is sent as written.
    pub fn none() -> Self {
        Self { steps: Vec::new() }
    }
    pub fn push(mut self, step: impl Rewrite + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|v| v.name())
    }
    pub fn apply<'s>(&self, sql: &'s str) -> Cow<'s, str> {
        let mut result = Cow::Borrowed(sql);
        for step in &self.steps {
            let rewritten = match step.rewrite(&result) {
                Cow::Borrowed(..) => continue,
                Cow::Owned(v) => v,
            };
            log::debug!("Rewrite `{}` changed the query", step.name());
            result = Cow::Owned(rewritten);
        }
        result
    }
}

impl Default for Rewrites {
    fn default() -> Self {
        Self::none().push(EmptyCatalogQualifier)
    }
}

impl Debug for Rewrites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
