/// Builds a static action table.
///
/// Each row reads `ordinal Name(min) -> Return [Param, ...] "prototype";`.
/// Cumulative parameter sizes are derived from the parameter types at
/// compile time.
macro_rules! actions {
    (
        $vis:vis const $table:ident;
        $(
            $ordinal:literal $name:ident ($min:literal) -> $ret:ident [$($param:ident),* $(,)?]
                $prototype:literal;
        )*
    ) => {
        $vis const $table: &[$crate::definition::ActionDefinition] = &[$(
            $crate::definition::ActionDefinition::new(
                $ordinal,
                stringify!($name),
                $prototype,
                $min,
                $crate::types::ActionType::$ret,
                &[$($crate::types::ActionType::$param),*],
                &const { $crate::types::cumulative_sizes([$($crate::types::ActionType::$param),*]) },
            ),
        )*];
    };
}
