//! Macros for declaring state enums.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`,
/// `Serialize` and `Deserialize`, gets a `name()` lookup built from the
/// variant identifiers, and an `ALL` table listing every state in
/// declaration order.
///
/// # Example
///
/// ```
/// use hsmkit::core::State;
/// use hsmkit::hsm_states;
///
/// hsm_states! {
///     pub enum DanceState {
///         InitPSubState,
///         Waiting,
///         Spinning,
///     }
///     pseudo: InitPSubState
/// }
///
/// assert_eq!(DanceState::Waiting.name(), "Waiting");
/// assert!(DanceState::InitPSubState.is_pseudo());
/// assert_eq!(DanceState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! hsm_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        pseudo: $pseudo:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            const PSEUDO: Self = Self::$pseudo;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
