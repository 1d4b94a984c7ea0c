//! Profile registries and profile-argument resolution
//!
//! A profile parameterizes an evaluation without being part of the
//! input facts: thresholds, market settings, tenant configuration.
//! Callers hand the engine either a concrete profile value or a name
//! to resolve against a `ProfileRegistry` owned by the host.

use crate::error::ResolveError;
use std::collections::HashMap;
use std::fmt;

/// Named-profile lookup table
///
/// The registry is plain host-owned state. It is not internally
/// synchronized; `&mut self` on `register` serializes writes, and
/// evaluations see whatever snapshot the host hands them.
#[derive(Clone)]
pub struct ProfileRegistry<P> {
    profiles: HashMap<String, P>,
}

impl<P> ProfileRegistry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Register a profile under `id`.
    ///
    /// Re-registering an id overwrites the stored profile and returns
    /// the previous one, following map-insert semantics.
    pub fn register(&mut self, id: impl Into<String>, profile: P) -> Option<P> {
        self.profiles.insert(id.into(), profile)
    }

    /// Look up a profile by id.
    pub fn get(&self, id: &str) -> Option<&P> {
        self.profiles.get(id)
    }
}

impl<P> Default for ProfileRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for ProfileRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.profiles.keys().collect();
        ids.sort();
        f.debug_struct("ProfileRegistry").field("ids", &ids).finish()
    }
}

/// Profile argument accepted by `Engine::run`
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileArg<P> {
    /// Use this value directly
    Inline(P),
    /// Resolve the value from the registry under this id
    Named(String),
}

/// A profile argument resolved to a concrete value
#[derive(Debug)]
pub(crate) struct ResolvedProfile<'a, P> {
    value: ProfileValue<'a, P>,
    /// Registry id the value came from; `None` for inline profiles
    pub id: Option<String>,
}

#[derive(Debug)]
enum ProfileValue<'a, P> {
    Inline(P),
    Registered(&'a P),
}

impl<P> ResolvedProfile<'_, P> {
    pub fn value(&self) -> &P {
        match &self.value {
            ProfileValue::Inline(profile) => profile,
            ProfileValue::Registered(profile) => profile,
        }
    }
}

/// Resolve a profile argument against an optional registry.
///
/// Resolution happens before any validation; a name that cannot be
/// resolved is an input-side failure.
pub(crate) fn resolve_profile<P>(
    arg: ProfileArg<P>,
    registry: Option<&ProfileRegistry<P>>,
) -> Result<ResolvedProfile<'_, P>, ResolveError> {
    match arg {
        ProfileArg::Inline(profile) => Ok(ResolvedProfile {
            value: ProfileValue::Inline(profile),
            id: None,
        }),
        ProfileArg::Named(id) => {
            let registry = registry.ok_or_else(|| ResolveError::MissingRegistry {
                id: id.clone(),
            })?;
            match registry.get(&id) {
                Some(profile) => {
                    tracing::debug!("resolved profile '{}' from registry", id);
                    Ok(ResolvedProfile {
                        value: ProfileValue::Registered(profile),
                        id: Some(id),
                    })
                }
                None => Err(ResolveError::UnknownProfile { id }),
            }
        }
    }
}
