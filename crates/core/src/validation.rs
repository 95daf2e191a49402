//! Declarative field validation.
//!
//! A request type describes its constraints as an ordered list of rules, each
//! one a `(field, kind, message, predicate)` tuple. Rules are evaluated
//! uniformly by [`RuleSet::validate`]:
//!
//! - rules run in declaration order;
//! - once a field has failed a rule, its remaining rules are skipped (an empty
//!   name reports `required`, not also `too_short`);
//! - every field is still checked, so the result lists all violated fields.
//!
//! Any violation rejects the value as a whole.

use core::fmt;

use serde::Serialize;

/// Category of a field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Field is empty or blank.
    Required,
    /// Field is shorter than its minimum length.
    TooShort,
    /// Field does not have the expected shape (e.g. email).
    InvalidFormat,
    /// Numeric field is outside its accepted range.
    OutOfRange,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Required => "required",
            ViolationKind::TooShort => "too_short",
            ViolationKind::InvalidFormat => "invalid_format",
            ViolationKind::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
}

/// Non-empty set of violations produced by a rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Names of the violated fields, in rule order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }

    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// One declarative rule over a value of type `T`.
pub struct Rule<T> {
    field: &'static str,
    kind: ViolationKind,
    message: &'static str,
    predicate: fn(&T) -> bool,
}

impl<T> Rule<T> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Returns `true` when the value satisfies this rule.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered list of rules for `T`.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; `predicate` returns `true` for acceptable values.
    pub fn rule(
        mut self,
        field: &'static str,
        kind: ViolationKind,
        message: &'static str,
        predicate: fn(&T) -> bool,
    ) -> Self {
        self.rules.push(Rule {
            field,
            kind,
            message,
            predicate,
        });
        self
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn validate(&self, value: &T) -> Result<(), ValidationErrors> {
        let mut violations: Vec<Violation> = Vec::new();

        for rule in &self.rules {
            if violations.iter().any(|v| v.field == rule.field) {
                continue;
            }
            if !rule.check(value) {
                violations.push(Violation {
                    field: rule.field,
                    kind: rule.kind,
                    message: rule.message,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}

/// Request bodies that can check their own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

// -------------------------
// Predicates
// -------------------------

/// Non-empty after trimming whitespace.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// At least `min` characters (Unicode scalar values, not bytes).
pub fn has_min_chars(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}

/// Email shape: exactly one `@`, non-empty local and domain parts, no whitespace.
pub fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
