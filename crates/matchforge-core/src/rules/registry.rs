//! Named rule sets and the active display mode.

use std::sync::Arc;

use super::{handwritten_rules, standard_rules, RuleSet};
use crate::error::{MatchForgeError, Result};
use crate::symbol::Symbol;

/// Registered display modes, in registration order, with one of them active.
///
/// # Example
///
/// ```
/// use matchforge_core::RuleRegistry;
///
/// let mut registry = RuleRegistry::builtin();
/// assert_eq!(registry.active_mode(), Some("standard"));
///
/// registry.switch_mode("handwritten").unwrap();
/// assert_eq!(registry.active_mode(), Some("handwritten"));
/// assert!(registry.switch_mode("roman").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    modes: Vec<(String, Arc<RuleSet>)>,
    active: Option<usize>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `standard` (active) and `handwritten`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.modes.push(("standard".to_string(), Arc::new(standard_rules())));
        registry
            .modes
            .push(("handwritten".to_string(), Arc::new(handwritten_rules())));
        registry.active = Some(0);
        registry
    }

    /// Registers `rules` under `name`. The first registered mode becomes active.
    pub fn register(&mut self, name: impl Into<String>, rules: RuleSet) -> Result<()> {
        let name = name.into();
        validate_mode_name(&name)?;
        if self.position(&name).is_some() {
            return Err(MatchForgeError::Config(format!(
                "mode '{name}' is already registered"
            )));
        }
        rules.verify()?;

        self.modes.push((name, Arc::new(rules)));
        if self.active.is_none() {
            self.active = Some(0);
        }
        Ok(())
    }

    pub fn switch_mode(&mut self, name: &str) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| MatchForgeError::UnknownMode(name.to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active_mode(&self) -> Option<&str> {
        self.active.map(|i| self.modes[i].0.as_str())
    }

    /// The active rule set; fails only on an empty registry.
    pub fn active_rule_set(&self) -> Result<Arc<RuleSet>> {
        self.active
            .map(|i| Arc::clone(&self.modes[i].1))
            .ok_or_else(|| MatchForgeError::Config("no mode registered".to_string()))
    }

    /// The rule set registered under `name`.
    pub fn rule_set(&self, name: &str) -> Result<Arc<RuleSet>> {
        self.position(name)
            .map(|i| Arc::clone(&self.modes[i].1))
            .ok_or_else(|| MatchForgeError::UnknownMode(name.to_string()))
    }

    pub fn mode_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.modes.iter().map(|(name, _)| name.as_str())
    }

    /// Every symbol an equation may contain.
    pub fn legal_symbols(&self) -> &'static [Symbol] {
        &Symbol::ALL
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.modes.iter().position(|(n, _)| n == name)
    }
}

fn validate_mode_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(MatchForgeError::Config(format!("invalid mode name '{name}'")))
    }
}
