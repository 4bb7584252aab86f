//! [`SetBuilder`] — the shared field expression engine.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::SetError;

use super::domain::Domain;

/// Field-specific token resolver, consulted after the alias table and
/// before numeric interpretation (e.g. `15W` on the day-of-month
/// field). Returning `None` hands the token back to the engine.
pub type TokenResolver = Box<dyn Fn(&str) -> Option<Vec<u32>> + Send + Sync>;

/// Builds value sets from cron-style field expressions.
///
/// An expression is a comma-separated union of sub-expressions, each
/// one of: a literal value, an alias token, `*` (or `?`) for the whole
/// domain, `^` / `$` for the first / last domain value, an inclusive
/// range `a-b`, or a stepped run `a-b/n`, `*/n`, or `a/n` (from `a` to
/// the domain max). Range endpoints may themselves be aliases
/// (`mon-fri`, `9am-5pm`) or the `^` / `$` markers.
///
/// Construct once per field type and call [`build`](SetBuilder::build)
/// per expression; the builder holds no per-call state, so a shared
/// instance is safe to use from multiple threads.
pub struct SetBuilder {
    domain: Domain,
    aliases: HashMap<String, u32>,
    resolver: Option<TokenResolver>,
}

impl SetBuilder {
    /// Create an engine over the given domain with no aliases.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            aliases: HashMap::new(),
            resolver: None,
        }
    }

    /// Attach alias tokens. Keys are matched case-insensitively.
    ///
    /// # Panics
    /// Panics if an alias value lies outside the domain; alias tables
    /// are fixed by the field author, so a bad entry is a bug there.
    pub fn with_aliases<K, I>(mut self, aliases: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u32)>,
    {
        for (key, value) in aliases {
            assert!(
                value >= self.domain.min() && value <= self.domain.max(),
                "alias value {} outside domain {}-{}",
                value,
                self.domain.min(),
                self.domain.max(),
            );
            self.aliases.insert(key.into().to_ascii_lowercase(), value);
        }
        self
    }

    /// Attach a field-specific token resolver.
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str) -> Option<Vec<u32>> + Send + Sync + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// The domain this builder validates against.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Build the set of values the expression denotes.
    ///
    /// The result is the union of all comma-separated sub-expressions.
    /// The call fails atomically on the first invalid token, left to
    /// right; no partial sets are returned.
    pub fn build(&self, expression: &str) -> Result<BTreeSet<u32>, SetError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(SetError::Syntax {
                token: expression.to_string(),
            });
        }

        let mut values = BTreeSet::new();
        for part in expression.split(',') {
            values.extend(self.build_part(part.trim())?);
        }
        Ok(values)
    }

    /// Resolve a single comma-separated sub-expression into run order.
    fn build_part(&self, part: &str) -> Result<Vec<u32>, SetError> {
        if part.is_empty() {
            return Err(SetError::Syntax {
                token: part.to_string(),
            });
        }

        // Split off a `/n` step first; on a wildcard or range it steps
        // through the run, on a single value it runs to the domain max.
        let (head, step) = match part.split_once('/') {
            Some((head, step_str)) => {
                let step = step_str
                    .parse::<i64>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| SetError::Syntax {
                        token: part.to_string(),
                    })?;
                (head, Some(step as usize))
            }
            None => (part, None),
        };

        if head == "*" || head == "?" {
            let run: Vec<u32> = (self.domain.min()..=self.domain.max()).collect();
            return Ok(apply_step(run, step));
        }

        if let Some(value) = self.symbol(head).or_else(|| self.alias(head)) {
            return Ok(self.value_run(value, step));
        }

        if let Some(resolver) = &self.resolver {
            if let Some(values) = resolver(head) {
                if step.is_some() {
                    return Err(SetError::Syntax {
                        token: part.to_string(),
                    });
                }
                return Ok(values);
            }
        }

        // Whole-token numeric parse before range splitting, so `-1` is
        // reported as out of range rather than as a malformed range.
        if let Ok(value) = head.parse::<i64>() {
            return Ok(self.value_run(self.domain.checked(value)?, step));
        }

        if let Some((start, end)) = head.split_once('-') {
            let start = self.endpoint(start, part)?;
            let end = self.endpoint(end, part)?;
            let run = self.domain.run(start, end)?;
            return Ok(apply_step(run, step));
        }

        Err(SetError::Syntax {
            token: part.to_string(),
        })
    }

    /// Resolve a range endpoint: `^`/`$` markers and alias lookup
    /// first, numeric second.
    fn endpoint(&self, token: &str, part: &str) -> Result<u32, SetError> {
        if let Some(value) = self.symbol(token).or_else(|| self.alias(token)) {
            return Ok(value);
        }
        match token.parse::<i64>() {
            Ok(value) => self.domain.checked(value),
            Err(_) => Err(SetError::Syntax {
                token: part.to_string(),
            }),
        }
    }

    /// A bare value without a step selects itself; with a step it runs
    /// from the value to the domain max.
    fn value_run(&self, value: u32, step: Option<usize>) -> Vec<u32> {
        match step {
            Some(_) => apply_step((value..=self.domain.max()).collect(), step),
            None => vec![value],
        }
    }

    /// First-value and last-value markers.
    fn symbol(&self, token: &str) -> Option<u32> {
        match token {
            "^" => Some(self.domain.min()),
            "$" => Some(self.domain.max()),
            _ => None,
        }
    }

    fn alias(&self, token: &str) -> Option<u32> {
        self.aliases.get(&token.to_ascii_lowercase()).copied()
    }
}

impl fmt::Debug for SetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetBuilder")
            .field("domain", &self.domain)
            .field("aliases", &self.aliases.len())
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

/// Keep every `step`-th value of a run, starting at its first element.
fn apply_step(run: Vec<u32>, step: Option<usize>) -> Vec<u32> {
    match step {
        Some(n) => run.into_iter().step_by(n).collect(),
        None => run,
    }
}
