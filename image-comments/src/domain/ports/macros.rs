//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor taking `impl Into<_>` for its
//! fields and an `is_<variant>` predicate. Unit variants get `const`
//! constructors.

macro_rules! define_port_error {
    (@members $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
        define_port_error!(@predicate $variant);
    };

    (@members $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            #[must_use]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
        define_port_error!(@predicate $variant);
    };

    (@predicate $variant:ident) => {
        ::paste::paste! {
            #[doc = "Whether this is the `" $variant "` variant."]
            #[must_use]
            pub const fn [<is_ $variant:snake>](&self) -> bool {
                matches!(self, Self::$variant { .. })
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@members $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
