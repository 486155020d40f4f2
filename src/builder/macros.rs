//! Macros for ergonomic state declarations.

/// Generate a `State` implementation for a plain enum.
///
/// The enum gets `Clone`, `PartialEq`, `Debug` and serde derives; extra
/// attributes (including further derives) pass through unchanged.
///
/// # Example
///
/// ```
/// use timepicker::state_enum;
/// use timepicker::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum FieldState {
///         Empty,
///         Editing,
///         Accepted,
///     }
///     accepting: [Accepted]
/// }
///
/// assert_eq!(FieldState::Editing.name(), "Editing");
/// assert!(FieldState::Accepted.is_accepting());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(accepting: [$($accepting:ident),* $(,)?])?
    ) => {
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_accepting(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
