//! Decision and rule definitions
//!
//! A `Decision` bundles the three data contracts (input, output,
//! profile) with an ordered list of rules. Definitions are assembled
//! once through `DecisionBuilder`, checked at build time, and never
//! mutated afterwards; concurrent evaluations share them by reference.

use crate::error::DefinitionError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use verdict_core::{ValidationError, Validator, Value};

/// Predicate deciding whether a rule applies
pub type WhenFn<I, P> = Box<dyn Fn(&I, &P) -> bool + Send + Sync>;
/// Producer of a rule's candidate output
pub type EmitFn<I, O, P> = Box<dyn Fn(&I, &P) -> O + Send + Sync>;
/// Producer of a rule's human-readable justification
pub type ExplainFn<I, P> = Box<dyn Fn(&I, &P) -> String + Send + Sync>;

/// A single decision rule: condition, output producer, justification
///
/// All three functions must be pure. No I/O, no clock reads, no
/// mutation of shared state; the engine trusts this contract rather
/// than enforcing it.
pub struct Rule<I, O, P> {
    id: String,
    pub(crate) when: WhenFn<I, P>,
    pub(crate) emit: EmitFn<I, O, P>,
    pub(crate) explain: ExplainFn<I, P>,
}

impl<I, O, P> Rule<I, O, P> {
    /// Create a rule from its three functions.
    pub fn new<W, E, X>(id: impl Into<String>, when: W, emit: E, explain: X) -> Self
    where
        W: Fn(&I, &P) -> bool + Send + Sync + 'static,
        E: Fn(&I, &P) -> O + Send + Sync + 'static,
        X: Fn(&I, &P) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            when: Box::new(when),
            emit: Box::new(emit),
            explain: Box::new(explain),
        }
    }

    /// Rule id, unique within its decision.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<I, O, P> fmt::Debug for Rule<I, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Immutable decision definition
///
/// Rule order is evaluation order. The first rule whose condition
/// holds wins; rules after it are never consulted.
pub struct Decision<I, O, P> {
    id: String,
    version: String,
    input_schema: Box<dyn Validator<I>>,
    output_schema: Box<dyn Validator<O>>,
    profile_schema: Box<dyn Validator<P>>,
    rules: Vec<Rule<I, O, P>>,
    meta: HashMap<String, Value>,
}

impl<I, O, P> Decision<I, O, P> {
    /// Start building a decision definition.
    pub fn builder(id: impl Into<String>, version: impl Into<String>) -> DecisionBuilder<I, O, P> {
        DecisionBuilder::new(id, version)
    }

    /// Decision id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Decision version, carried verbatim into every result.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule<I, O, P>] {
        &self.rules
    }

    /// Free-form metadata attached at build time.
    pub fn meta(&self) -> &HashMap<String, Value> {
        &self.meta
    }

    pub(crate) fn check_input(&self, input: &I) -> Result<(), ValidationError> {
        self.input_schema.validate(input)
    }

    pub(crate) fn check_output(&self, output: &O) -> Result<(), ValidationError> {
        self.output_schema.validate(output)
    }

    pub(crate) fn check_profile(&self, profile: &P) -> Result<(), ValidationError> {
        self.profile_schema.validate(profile)
    }
}

impl<I, O, P> fmt::Debug for Decision<I, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decision")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("rules", &self.rules)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Builder for `Decision` definitions
///
/// `build` checks definition hygiene: a non-empty decision id, all
/// three contracts present, and rule ids non-empty and unique.
pub struct DecisionBuilder<I, O, P> {
    id: String,
    version: String,
    input_schema: Option<Box<dyn Validator<I>>>,
    output_schema: Option<Box<dyn Validator<O>>>,
    profile_schema: Option<Box<dyn Validator<P>>>,
    rules: Vec<Rule<I, O, P>>,
    meta: HashMap<String, Value>,
}

impl<I, O, P> DecisionBuilder<I, O, P> {
    /// Create a builder for the given decision id and version.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            input_schema: None,
            output_schema: None,
            profile_schema: None,
            rules: Vec::new(),
            meta: HashMap::new(),
        }
    }

    /// Set the validator for inputs.
    pub fn input_schema(mut self, validator: impl Validator<I> + 'static) -> Self {
        self.input_schema = Some(Box::new(validator));
        self
    }

    /// Set the validator for rule outputs.
    pub fn output_schema(mut self, validator: impl Validator<O> + 'static) -> Self {
        self.output_schema = Some(Box::new(validator));
        self
    }

    /// Set the validator for profiles.
    pub fn profile_schema(mut self, validator: impl Validator<P> + 'static) -> Self {
        self.profile_schema = Some(Box::new(validator));
        self
    }

    /// Append a rule. Declaration order is evaluation order.
    pub fn rule(mut self, rule: Rule<I, O, P>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<I, O, P>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Attach a metadata entry.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Check the definition and produce an immutable `Decision`.
    pub fn build(self) -> Result<Decision<I, O, P>, DefinitionError> {
        if self.id.is_empty() {
            return Err(DefinitionError::EmptyDecisionId);
        }

        let input_schema = self
            .input_schema
            .ok_or_else(|| DefinitionError::MissingSchema {
                decision: self.id.clone(),
                kind: "input",
            })?;
        let output_schema = self
            .output_schema
            .ok_or_else(|| DefinitionError::MissingSchema {
                decision: self.id.clone(),
                kind: "output",
            })?;
        let profile_schema = self
            .profile_schema
            .ok_or_else(|| DefinitionError::MissingSchema {
                decision: self.id.clone(),
                kind: "profile",
            })?;

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id().is_empty() {
                return Err(DefinitionError::EmptyRuleId {
                    decision: self.id.clone(),
                });
            }
            if !seen.insert(rule.id().to_string()) {
                return Err(DefinitionError::DuplicateRuleId {
                    decision: self.id.clone(),
                    rule: rule.id().to_string(),
                });
            }
        }

        Ok(Decision {
            id: self.id,
            version: self.version,
            input_schema,
            output_schema,
            profile_schema,
            rules: self.rules,
            meta: self.meta,
        })
    }
}
