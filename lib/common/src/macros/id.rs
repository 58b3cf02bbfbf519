/// Define a transparent newtype around an unsigned integer, for use as an opaque identifier.
///
/// The generated type is `Copy`, ordered, hashable, and displays as its inner value.
#[macro_export]
macro_rules! id_type {
    ($(#[$meta:meta])* $vis:vis $Name:ident($Inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $Name(pub $Inner);

        impl $Name {
            #[inline]
            pub const fn new(raw: $Inner) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn get(self) -> $Inner {
                self.0
            }
        }

        impl From<$Inner> for $Name {
            #[inline]
            fn from(value: $Inner) -> Self {
                Self(value)
            }
        }

        impl From<$Name> for $Inner {
            #[inline]
            fn from(value: $Name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
