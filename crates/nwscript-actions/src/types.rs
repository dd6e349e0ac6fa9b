use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Size in bytes of one operand stack cell.
pub const CELL_SIZE: u32 = 4;

/// Primitive value kinds an action can take or return.
///
/// The discriminants are the type codes compiled scripts and the host engine
/// agree on. `Effect` through `ItemProperty` occupy the engine structure
/// slots 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActionType {
    Void = 0,
    Int = 1,
    Float = 2,
    String = 3,
    Object = 4,
    Vector = 5,
    Action = 6,
    Effect = 7,
    Event = 8,
    Location = 9,
    Talent = 10,
    ItemProperty = 11,
}

impl ActionType {
    pub const ALL: [ActionType; 12] = [
        ActionType::Void,
        ActionType::Int,
        ActionType::Float,
        ActionType::String,
        ActionType::Object,
        ActionType::Vector,
        ActionType::Action,
        ActionType::Effect,
        ActionType::Event,
        ActionType::Location,
        ActionType::Talent,
        ActionType::ItemProperty,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Bytes this type occupies on the operand stack.
    ///
    /// `Action` arguments travel out of band with the call and take no
    /// stack space.
    #[must_use]
    pub const fn stack_size(self) -> u32 {
        match self {
            ActionType::Void | ActionType::Action => 0,
            ActionType::Vector => 3 * CELL_SIZE,
            _ => CELL_SIZE,
        }
    }

    #[must_use]
    pub const fn stack_cells(self) -> u32 {
        self.stack_size() / CELL_SIZE
    }

    /// Engine structure slot for opaque engine-owned handles.
    #[must_use]
    pub const fn engine_structure(self) -> Option<u8> {
        match self {
            ActionType::Effect
            | ActionType::Event
            | ActionType::Location
            | ActionType::Talent
            | ActionType::ItemProperty => Some(self as u8 - ActionType::Effect as u8),
            _ => None,
        }
    }

    /// Script source spelling of the type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            ActionType::Void => "void",
            ActionType::Int => "int",
            ActionType::Float => "float",
            ActionType::String => "string",
            ActionType::Object => "object",
            ActionType::Vector => "vector",
            ActionType::Action => "action",
            ActionType::Effect => "effect",
            ActionType::Event => "event",
            ActionType::Location => "location",
            ActionType::Talent => "talent",
            ActionType::ItemProperty => "itemproperty",
        }
    }
}

impl TryFrom<u8> for ActionType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        ActionType::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::InvalidTypeCode(code))
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

impl FromStr for ActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionType::ALL
            .into_iter()
            .find(|ty| ty.keyword() == s)
            .ok_or_else(|| Error::UnknownTypeKeyword(s.to_string()))
    }
}

/// Running byte offsets of each parameter once parameters `0..=i` are on the
/// stack.
#[must_use]
pub const fn cumulative_sizes<const N: usize>(types: [ActionType; N]) -> [u32; N] {
    let mut sizes = [0u32; N];
    let mut total = 0;
    let mut i = 0;
    while i < N {
        total += types[i].stack_size();
        sizes[i] = total;
        i += 1;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_dense() {
        for (i, ty) in ActionType::ALL.iter().enumerate() {
            assert_eq!(usize::from(ty.code()), i);
            assert_eq!(ActionType::try_from(ty.code()), Ok(*ty));
        }
        assert_eq!(ActionType::try_from(12u8), Err(Error::InvalidTypeCode(12)));
    }

    #[test]
    fn test_stack_sizes() {
        assert_eq!(ActionType::Void.stack_size(), 0);
        assert_eq!(ActionType::Action.stack_size(), 0);
        assert_eq!(ActionType::Vector.stack_size(), 12);
        assert_eq!(ActionType::Vector.stack_cells(), 3);
        for ty in [
            ActionType::Int,
            ActionType::Float,
            ActionType::String,
            ActionType::Object,
            ActionType::Location,
            ActionType::ItemProperty,
        ] {
            assert_eq!(ty.stack_size(), CELL_SIZE, "{ty}");
        }
    }

    #[test]
    fn test_engine_structures() {
        assert_eq!(ActionType::Effect.engine_structure(), Some(0));
        assert_eq!(ActionType::ItemProperty.engine_structure(), Some(4));
        assert_eq!(ActionType::Object.engine_structure(), None);
        assert_eq!(ActionType::Action.engine_structure(), None);
    }

    #[test]
    fn test_keyword_roundtrip() {
        assert_eq!("itemproperty".parse(), Ok(ActionType::ItemProperty));
        assert_eq!(ActionType::Location.to_string(), "location");
        assert_eq!(
            "Int".parse::<ActionType>(),
            Err(Error::UnknownTypeKeyword("Int".into()))
        );
        for ty in ActionType::ALL {
            assert_eq!(ty.keyword().parse(), Ok(ty));
        }
    }

    #[test]
    fn test_cumulative_sizes() {
        const SIZES: [u32; 4] = cumulative_sizes([
            ActionType::Vector,
            ActionType::Int,
            ActionType::Action,
            ActionType::Object,
        ]);
        assert_eq!(SIZES, [12, 16, 16, 20]);
        assert_eq!(cumulative_sizes([ActionType::Action]), [0]);
        assert_eq!(cumulative_sizes([]), [0u32; 0]);
    }
}
