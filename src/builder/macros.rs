//! Macros for declaring state enums.

/// Generate a `State` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use lifespan::state_enum;
///
/// state_enum! {
///     pub enum Siege {
///         Mustering,
///         Assaulting,
///         Razed,
///     }
///     final: [Razed]
/// }
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Watchfire {
            Unlit,
            Blazing,
            Ash,
        }
        final: [Ash]
    }

    #[test]
    fn macro_generates_names_and_finality() {
        assert_eq!(Watchfire::Unlit.name(), "Unlit");
        assert_eq!(Watchfire::Blazing.name(), "Blazing");
        assert!(!Watchfire::Blazing.is_final());
        assert!(Watchfire::Ash.is_final());
    }

    #[test]
    fn macro_accepts_visibility() {
        state_enum! {
            pub enum Banner {
                Furled,
                Flying,
            }
            final: [Furled]
        }

        assert!(Banner::Furled.is_final());
        assert!(!Banner::Flying.is_final());
    }

    #[test]
    fn final_clause_is_optional() {
        state_enum! {
            enum Wheel {
                Turning,
                Still,
            }
        }

        assert!(!Wheel::Turning.is_final());
        assert!(!Wheel::Still.is_final());
    }
}
