use crate::registry::Revision;
use crate::types::ActionType;
use crate::{Error, Result};

/// Largest parameter count any action declares.
pub const MAX_PARAMETERS: usize = 13;

/// Name given to retired ordinals that must stay in place.
pub const PLACEHOLDER_NAME: &str = "BadBadReplaceMeThisDoesNothing";

/// One engine action as seen by compiled scripts.
///
/// `parameter_cumulative_sizes[i]` is the number of stack bytes taken by
/// parameters `0..=i`. Arguments are pushed last-first, so parameter 0 ends
/// up on top of the stack.
#[derive(Debug, PartialEq, Eq)]
pub struct ActionDefinition {
    #[cfg(feature = "names")]
    name: &'static str,
    #[cfg(feature = "prototypes")]
    prototype: &'static str,
    ordinal: u32,
    min_parameters: u8,
    return_type: ActionType,
    parameter_types: &'static [ActionType],
    parameter_sizes: &'static [u32],
    placeholder: bool,
}

impl ActionDefinition {
    #[must_use]
    pub(crate) const fn new(
        ordinal: u32,
        name: &'static str,
        prototype: &'static str,
        min_parameters: u8,
        return_type: ActionType,
        parameter_types: &'static [ActionType],
        parameter_sizes: &'static [u32],
    ) -> Self {
        #[cfg(not(feature = "prototypes"))]
        let _ = prototype;

        let placeholder = parameter_types.is_empty() && str_eq(name, PLACEHOLDER_NAME);

        Self {
            #[cfg(feature = "names")]
            name,
            #[cfg(feature = "prototypes")]
            prototype,
            ordinal,
            min_parameters,
            return_type,
            parameter_types,
            parameter_sizes,
            placeholder,
        }
    }

    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Script-visible name.
    #[cfg(feature = "names")]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Names are compiled out; every action reports `""`.
    #[cfg(not(feature = "names"))]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        ""
    }

    /// Source-form signature, for diagnostics only.
    #[cfg(feature = "prototypes")]
    #[must_use]
    pub const fn prototype(&self) -> &'static str {
        self.prototype
    }

    #[cfg(not(feature = "prototypes"))]
    #[must_use]
    pub const fn prototype(&self) -> &'static str {
        ""
    }

    #[must_use]
    pub const fn min_parameters(&self) -> usize {
        self.min_parameters as usize
    }

    #[must_use]
    pub const fn max_parameters(&self) -> usize {
        self.parameter_types.len()
    }

    #[must_use]
    pub const fn return_type(&self) -> ActionType {
        self.return_type
    }

    #[must_use]
    pub const fn parameter_types(&self) -> &'static [ActionType] {
        self.parameter_types
    }

    #[must_use]
    pub const fn parameter_cumulative_sizes(&self) -> &'static [u32] {
        self.parameter_sizes
    }

    #[must_use]
    pub fn parameter_type(&self, index: usize) -> Option<ActionType> {
        self.parameter_types.get(index).copied()
    }

    #[must_use]
    pub fn parameter_cumulative_size(&self, index: usize) -> Option<u32> {
        self.parameter_sizes.get(index).copied()
    }

    /// Whether this slot is a retired ordinal kept as a no-op.
    ///
    /// Recorded when the table is built, so it holds with names compiled out.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn check_argument_count(&self, supplied: usize) -> Result<()> {
        if supplied < self.min_parameters() {
            return Err(Error::TooFewArguments {
                ordinal: self.ordinal,
                supplied,
                min: self.min_parameters(),
            });
        }
        if supplied > self.max_parameters() {
            return Err(Error::TooManyArguments {
                ordinal: self.ordinal,
                supplied,
                max: self.max_parameters(),
            });
        }
        Ok(())
    }

    /// Bytes to pop after a call that supplied `supplied` arguments.
    ///
    /// Defaulted trailing parameters are never pushed, so only the prefix
    /// counts.
    pub fn arguments_size(&self, supplied: usize) -> Result<u32> {
        self.check_argument_count(supplied)?;
        Ok(match supplied {
            0 => 0,
            n => self.parameter_sizes[n - 1],
        })
    }

    /// Offset of argument `index` relative to the stack top, in bytes.
    #[must_use]
    pub fn argument_offset(&self, index: usize) -> Option<i32> {
        self.parameter_sizes.get(index).map(|&size| -(size as i32))
    }

    /// Parameters flattened to stack cells: a vector is three floats and an
    /// action argument takes no cell at all.
    pub fn parameter_cells(&self) -> impl Iterator<Item = ActionType> + '_ {
        self.parameter_types.iter().flat_map(|&ty| {
            let (cell, count) = match ty {
                ActionType::Vector => (ActionType::Float, 3),
                ActionType::Action => (ActionType::Action, 0),
                other => (other, 1),
            };
            std::iter::repeat_n(cell, count)
        })
    }

    #[must_use]
    pub const fn return_size(&self) -> u32 {
        self.return_type.stack_size()
    }

    /// Net stack change in bytes across a call with `supplied` arguments.
    pub fn stack_delta(&self, supplied: usize) -> Result<i32> {
        let popped = self.arguments_size(supplied)?;
        Ok(self.return_size() as i32 - popped as i32)
    }

    /// Check the record's own shape; `position` is where it sits in its table.
    pub fn validate(&self, revision: Revision, position: usize) -> Result<()> {
        let fail = |reason: String| Error::InvariantViolation {
            revision,
            ordinal: self.ordinal,
            reason,
        };

        if self.ordinal as usize != position {
            return Err(fail(format!("stored at position {position}")));
        }
        if self.min_parameters() > self.max_parameters() {
            return Err(fail(format!(
                "min parameters {} exceeds max {}",
                self.min_parameters(),
                self.max_parameters()
            )));
        }
        if self.max_parameters() > MAX_PARAMETERS {
            return Err(fail(format!(
                "{} parameters, limit is {MAX_PARAMETERS}",
                self.max_parameters()
            )));
        }
        if self.parameter_sizes.len() != self.parameter_types.len() {
            return Err(fail(format!(
                "{} parameter types but {} sizes",
                self.parameter_types.len(),
                self.parameter_sizes.len()
            )));
        }

        let mut previous = 0;
        for (index, (&ty, &size)) in self
            .parameter_types
            .iter()
            .zip(self.parameter_sizes)
            .enumerate()
        {
            if ty == ActionType::Void {
                return Err(fail(format!("parameter {index} is void")));
            }
            if size != previous + ty.stack_size() {
                return Err(fail(format!(
                    "parameter {index} ({ty}) ends at {size}, expected {}",
                    previous + ty.stack_size()
                )));
            }
            previous = size;
        }

        Ok(())
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cumulative_sizes;

    const ASSIGN: ActionDefinition = ActionDefinition::new(
        1,
        "AssignCommand",
        "void AssignCommand(object oActionSubject, action aActionToAssign);",
        2,
        ActionType::Void,
        &[ActionType::Object, ActionType::Action],
        &const { cumulative_sizes([ActionType::Object, ActionType::Action]) },
    );

    const SHAPE: ActionDefinition = ActionDefinition::new(
        0,
        "GetFirstObjectInShape",
        "",
        3,
        ActionType::Object,
        &[
            ActionType::Int,
            ActionType::Float,
            ActionType::Location,
            ActionType::Int,
            ActionType::Int,
            ActionType::Vector,
        ],
        &const {
            cumulative_sizes([
                ActionType::Int,
                ActionType::Float,
                ActionType::Location,
                ActionType::Int,
                ActionType::Int,
                ActionType::Vector,
            ])
        },
    );

    #[test]
    fn test_argument_count_bounds() {
        assert!(SHAPE.check_argument_count(3).is_ok());
        assert!(SHAPE.check_argument_count(6).is_ok());
        assert_eq!(
            SHAPE.check_argument_count(2),
            Err(Error::TooFewArguments {
                ordinal: 0,
                supplied: 2,
                min: 3
            })
        );
        assert_eq!(
            SHAPE.check_argument_count(7),
            Err(Error::TooManyArguments {
                ordinal: 0,
                supplied: 7,
                max: 6
            })
        );
    }

    #[test]
    fn test_arguments_size_counts_only_supplied_prefix() {
        assert_eq!(SHAPE.arguments_size(3), Ok(12));
        assert_eq!(SHAPE.arguments_size(6), Ok(32));
        assert_eq!(ASSIGN.arguments_size(2), Ok(4));
    }

    #[test]
    fn test_argument_offsets() {
        assert_eq!(SHAPE.argument_offset(0), Some(-4));
        assert_eq!(SHAPE.argument_offset(5), Some(-32));
        assert_eq!(SHAPE.argument_offset(6), None);
    }

    #[test]
    fn test_parameter_cells_expand_vectors_and_drop_actions() {
        let cells: Vec<_> = SHAPE.parameter_cells().collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(&cells[5..], &[ActionType::Float; 3]);

        let cells: Vec<_> = ASSIGN.parameter_cells().collect();
        assert_eq!(cells, vec![ActionType::Object]);
    }

    #[test]
    fn test_stack_delta() {
        assert_eq!(SHAPE.stack_delta(3), Ok(4 - 12));
        assert_eq!(ASSIGN.stack_delta(2), Ok(-4));
        assert!(ASSIGN.stack_delta(1).is_err());
    }

    #[test]
    fn test_validate_rejects_misplaced_ordinal() {
        assert!(ASSIGN.validate(Revision::Nwn1, 1).is_ok());
        let err = ASSIGN.validate(Revision::Nwn1, 2).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { ordinal: 1, .. }));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let bad = ActionDefinition::new(
            0,
            "Broken",
            "",
            1,
            ActionType::Void,
            &[ActionType::Vector],
            &[4],
        );
        let err = bad.validate(Revision::Nwn2, 0).unwrap_err();
        assert!(err.to_string().contains("expected 12"), "{err}");
    }

    #[test]
    fn test_placeholder_detection() {
        const PLACEHOLDER: ActionDefinition =
            ActionDefinition::new(7, PLACEHOLDER_NAME, "", 0, ActionType::Void, &[], &[]);
        assert!(PLACEHOLDER.is_placeholder());
        assert!(!ASSIGN.is_placeholder());

        // The sentinel name alone is not enough.
        let with_params = ActionDefinition::new(
            7,
            PLACEHOLDER_NAME,
            "",
            1,
            ActionType::Void,
            &[ActionType::Int],
            &[4],
        );
        assert!(!with_params.is_placeholder());
        let renamed = ActionDefinition::new(7, "BadBad", "", 0, ActionType::Void, &[], &[]);
        assert!(!renamed.is_placeholder());
    }

    #[test]
    fn test_str_eq() {
        assert!(str_eq("", ""));
        assert!(str_eq(PLACEHOLDER_NAME, "BadBadReplaceMeThisDoesNothing"));
        assert!(!str_eq("Random", "Randon"));
        assert!(!str_eq("Random", "Rand"));
    }
}
