//! Per-revision action registries.
//!
//! A compiled script names engine actions only by ordinal, so each revision
//! keeps a dense table whose row index *is* the ordinal. Retired ordinals stay
//! in place as no-op placeholders; new actions are only ever appended.
//!
//! Both tables are compile-time constants. Lookups by ordinal are a bounds check and an
//! index; lookups by name go through a hash index built on first use.

#[macro_use]
mod macros;
mod nwn1;
mod nwn2;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::definition::ActionDefinition;
use crate::{Error, Result};

pub const MAX_ACTION_ID_NWN1: usize = 848;
pub const MAX_ACTION_ID_NWN2: usize = 1058;

/// Engine revision a compiled script targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revision {
    Nwn1,
    Nwn2,
}

impl Revision {
    pub const ALL: [Revision; 2] = [Revision::Nwn1, Revision::Nwn2];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Revision::Nwn1 => "nwn1",
            Revision::Nwn2 => "nwn2",
        }
    }

    #[must_use]
    pub const fn action_count(self) -> usize {
        match self {
            Revision::Nwn1 => MAX_ACTION_ID_NWN1,
            Revision::Nwn2 => MAX_ACTION_ID_NWN2,
        }
    }

    #[must_use]
    pub fn registry(self) -> &'static Registry {
        Registry::for_revision(self)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Revision::ALL
            .into_iter()
            .find(|revision| revision.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownRevision(s.to_string()))
    }
}

static NWN1: Registry = Registry::new(Revision::Nwn1, nwn1::NWN1_ACTIONS);
static NWN2: Registry = Registry::new(Revision::Nwn2, nwn2::NWN2_ACTIONS);

/// Read-only view over one revision's action table.
pub struct Registry {
    revision: Revision,
    actions: &'static [ActionDefinition],
    names: OnceLock<HashMap<&'static str, u32>>,
    #[cfg(debug_assertions)]
    checked: std::sync::Once,
}

impl Registry {
    const fn new(revision: Revision, actions: &'static [ActionDefinition]) -> Self {
        Self {
            revision,
            actions,
            names: OnceLock::new(),
            #[cfg(debug_assertions)]
            checked: std::sync::Once::new(),
        }
    }

    /// The registry for `revision`.
    ///
    /// Debug builds validate the table the first time it is handed out and
    /// abort if it is malformed.
    #[must_use]
    pub fn for_revision(revision: Revision) -> &'static Registry {
        let registry = match revision {
            Revision::Nwn1 => &NWN1,
            Revision::Nwn2 => &NWN2,
        };
        #[cfg(debug_assertions)]
        registry.checked.call_once(|| {
            if let Err(err) = registry.validate() {
                panic!("corrupt action table: {err}");
            }
        });
        registry
    }

    #[must_use]
    pub fn nwn1() -> &'static Registry {
        Self::for_revision(Revision::Nwn1)
    }

    #[must_use]
    pub fn nwn2() -> &'static Registry {
        Self::for_revision(Revision::Nwn2)
    }

    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.actions.len()
    }

    /// The action at `ordinal`.
    ///
    /// Takes any integer so raw bytecode operands, slice indices and negative
    /// values from callers can be passed unchanged. Values too wide for `i64`
    /// are reported as `i64::MAX`.
    pub fn at<T: TryInto<i64>>(&self, ordinal: T) -> Result<&'static ActionDefinition> {
        let ordinal = ordinal.try_into().unwrap_or(i64::MAX);
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| self.actions.get(index))
            .ok_or_else(|| {
                tracing::trace!(revision = %self.revision, ordinal, "action ordinal out of range");
                Error::OutOfRange {
                    revision: self.revision,
                    ordinal,
                    count: self.count(),
                }
            })
    }

    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&'static ActionDefinition> {
        self.actions.get(ordinal)
    }

    /// All actions in ascending ordinal order.
    pub fn iter(&self) -> std::slice::Iter<'static, ActionDefinition> {
        self.actions.iter()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'static [ActionDefinition] {
        self.actions
    }

    /// Ordinal of the action named `name`, matched case-sensitively.
    ///
    /// Always `None` when names are compiled out.
    #[must_use]
    pub fn resolve_by_name(&self, name: &str) -> Option<u32> {
        if name.is_empty() {
            return None;
        }
        self.names().get(name).copied()
    }

    pub fn lookup(&self, name: &str) -> Result<&'static ActionDefinition> {
        self.resolve_by_name(name)
            .and_then(|ordinal| self.get(ordinal as usize))
            .ok_or_else(|| Error::NotFound {
                revision: self.revision,
                name: name.to_string(),
            })
    }

    fn names(&self) -> &HashMap<&'static str, u32> {
        self.names.get_or_init(|| {
            let index: HashMap<_, _> = self
                .actions
                .iter()
                .filter(|action| !action.name().is_empty())
                .map(|action| (action.name(), action.ordinal()))
                .collect();
            tracing::debug!(revision = %self.revision, names = index.len(), "built action name index");
            index
        })
    }

    /// Check every record plus table-wide name uniqueness.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, u32> = HashMap::with_capacity(self.count());

        for (position, action) in self.actions.iter().enumerate() {
            action.validate(self.revision, position)?;

            let name = action.name();
            if name.is_empty() {
                continue;
            }
            if let Some(first) = seen.insert(name, action.ordinal()) {
                return Err(Error::InvariantViolation {
                    revision: self.revision,
                    ordinal: action.ordinal(),
                    reason: format!("name '{name}' already used by ordinal {first}"),
                });
            }
        }

        tracing::debug!(revision = %self.revision, actions = self.count(), "action table validated");
        Ok(())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("revision", &self.revision)
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

impl IntoIterator for &Registry {
    type Item = &'static ActionDefinition;
    type IntoIter = std::slice::Iter<'static, ActionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How one ordinal differs between two registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    /// Only the left registry has this ordinal.
    OnlyLeft(&'static ActionDefinition),
    /// Only the right registry has this ordinal.
    OnlyRight(&'static ActionDefinition),
    /// Same ordinal, different name.
    Renamed {
        left: &'static ActionDefinition,
        right: &'static ActionDefinition,
    },
    /// Same ordinal and name, different arity or types.
    Signature {
        left: &'static ActionDefinition,
        right: &'static ActionDefinition,
    },
}

impl Divergence {
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        match self {
            Divergence::OnlyLeft(action) | Divergence::OnlyRight(action) => action.ordinal(),
            Divergence::Renamed { left, .. } | Divergence::Signature { left, .. } => left.ordinal(),
        }
    }
}

fn same_signature(left: &ActionDefinition, right: &ActionDefinition) -> bool {
    left.min_parameters() == right.min_parameters()
        && left.return_type() == right.return_type()
        && left.parameter_types() == right.parameter_types()
}

/// Every ordinal at which `left` and `right` disagree, in ordinal order.
///
/// Without names compiled in, renames cannot be seen and only signature
/// changes and length differences are reported.
#[must_use]
pub fn compare(left: &Registry, right: &Registry) -> Vec<Divergence> {
    let shared = left.count().min(right.count());
    let mut divergences: Vec<Divergence> = left
        .iter()
        .zip(right.iter())
        .filter_map(|(l, r)| {
            if l.name() != r.name() {
                Some(Divergence::Renamed { left: l, right: r })
            } else if !same_signature(l, r) {
                Some(Divergence::Signature { left: l, right: r })
            } else {
                None
            }
        })
        .collect();

    divergences.extend(left.as_slice()[shared..].iter().map(Divergence::OnlyLeft));
    divergences.extend(right.as_slice()[shared..].iter().map(Divergence::OnlyRight));
    divergences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths_match_revision_counts() {
        for revision in Revision::ALL {
            assert_eq!(revision.registry().count(), revision.action_count());
        }
    }

    #[test]
    fn test_revision_parse() {
        assert_eq!("NWN2".parse::<Revision>(), Ok(Revision::Nwn2));
        assert_eq!("nwn1".parse::<Revision>(), Ok(Revision::Nwn1));
        assert_eq!(
            "nwn3".parse::<Revision>(),
            Err(Error::UnknownRevision("nwn3".into()))
        );
    }

    #[test]
    fn test_at_bounds() {
        let registry = Registry::nwn1();
        assert!(registry.at(0u32).is_ok());
        assert!(registry.at(847u32).is_ok());
        assert_eq!(
            registry.at(848u32),
            Err(Error::OutOfRange {
                revision: Revision::Nwn1,
                ordinal: 848,
                count: 848
            })
        );
        assert!(matches!(
            registry.at(-1i32),
            Err(Error::OutOfRange { ordinal: -1, .. })
        ));
        assert!(registry.at(847usize).is_ok());
        assert!(matches!(
            registry.at(usize::MAX),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_tables_validate() {
        assert_eq!(Registry::nwn1().validate(), Ok(()));
        assert_eq!(Registry::nwn2().validate(), Ok(()));
    }

    #[cfg(feature = "names")]
    #[test]
    fn test_compare_reports_placeholder_and_appended_actions() {
        let divergences = compare(Registry::nwn1(), Registry::nwn2());

        let placeholder = divergences
            .iter()
            .find_map(|d| match d {
                Divergence::Renamed { right, .. } if right.is_placeholder() => Some(right),
                _ => None,
            })
            .expect("nwn2 retires at least one ordinal");
        assert_eq!(placeholder.max_parameters(), 0);

        let appended = divergences
            .iter()
            .filter(|d| matches!(d, Divergence::OnlyRight(_)))
            .count();
        assert_eq!(appended, MAX_ACTION_ID_NWN2 - MAX_ACTION_ID_NWN1);

        let damage = divergences
            .iter()
            .find(|d| d.ordinal() == 79)
            .expect("EffectDamage diverges");
        assert!(matches!(damage, Divergence::Signature { .. }));
    }

    #[test]
    fn test_compare_with_self_is_empty() {
        assert!(compare(Registry::nwn2(), Registry::nwn2()).is_empty());
    }
}
