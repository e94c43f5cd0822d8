use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{
    error::{DomainError, DomainResult},
    naming::to_pascal_case,
};

/// A service to generate files for.
///
/// Invariant: `name` is never empty. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceDef {
    name: String,
    interface: String,
}

impl ServiceDef {
    /// Create a service with an explicit interface name.
    pub fn new(name: impl Into<String>, interface: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyServiceName);
        }
        Ok(Self {
            name,
            interface: interface.into(),
        })
    }

    /// Create a service whose interface is `I` + PascalCase(name).
    pub fn with_inferred_interface(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let interface = infer_interface(&name);
        Self::new(name, interface)
    }

    /// Raw name as supplied by the caller.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interface identifier, emitted verbatim.
    pub fn interface(&self) -> &str {
        &self.interface
    }
}

/// Interface name used when none is given: `userService` → `IUserService`.
pub fn infer_interface(name: &str) -> String {
    format!("I{}", to_pascal_case(name))
}

/// Parses `name` or `name:Interface`.
impl FromStr for ServiceDef {
    type Err = DomainError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidServiceSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        match spec.split_once(':') {
            None => Self::with_inferred_interface(spec.trim()),
            Some((name, interface)) => {
                let (name, interface) = (name.trim(), interface.trim());
                if name.is_empty() {
                    return Err(invalid("service name is empty"));
                }
                if interface.is_empty() {
                    return Err(invalid("interface name after ':' is empty"));
                }
                if interface.contains(':') {
                    return Err(invalid("more than one ':' separator"));
                }
                Self::new(name, interface)
            }
        }
    }
}

impl fmt::Display for ServiceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.interface)
    }
}
