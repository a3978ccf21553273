/// Declares a struct together with its static [`Schema`](crate::Schema) and
/// [`Record`](crate::Record) implementation.
///
/// Each field may carry one flag in brackets and a block of annotations:
///
/// ```rust,ignore
/// forzium_form::record! {
///     #[derive(Debug, Default)]
///     pub struct Signup {
///         pub user_name: String => { "form": "username", "title": "User name", "valid": "required;username" },
///         pub age: i32 => { "valid": "range:18,60" },
///         pub address: Address [nested],
///         pub token: String [readonly],
///         pub extra: Vec<(u8, u8)> [opaque],
///     }
/// }
/// ```
///
/// Flags: `nested` walks an inline record, `readonly` is checked but never
/// bound, `opaque` marks a type the engine does not understand.
#[macro_export]
macro_rules! record {
    (
        $(#[$smeta:meta])*
        $svis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty
                $( [$flag:ident] )?
                $( => { $( $key:literal : $val:literal ),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$smeta])*
        $svis struct $name {
            $( $(#[$fmeta])* $fvis $field : $fty, )*
        }

        impl $crate::Record for $name {
            fn schema(&self) -> &'static $crate::Schema {
                static SCHEMA: $crate::__private::Lazy<$crate::Schema> =
                    $crate::__private::Lazy::new(|| {
                        $crate::Schema::builder(stringify!($name))
                            $(
                                .field(
                                    $crate::__record_field!(@descriptor $field, $fty, [$($flag)?])
                                    $( $( .annotate($key, $val) )* )?
                                )
                            )*
                            .build()
                    });
                &SCHEMA
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![ $( $crate::__record_field!(@ref &self.$field, [$($flag)?]) ),* ]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![ $( $crate::__record_field!(@mut &mut self.$field, [$($flag)?]) ),* ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    (@descriptor $field:ident, $fty:ty, []) => {
        $crate::FieldDescriptor::new(stringify!($field), <$fty as $crate::Field>::declared_kind())
    };
    (@descriptor $field:ident, $fty:ty, [readonly]) => {
        $crate::FieldDescriptor::new(stringify!($field), <$fty as $crate::Field>::declared_kind())
            .read_only()
    };
    (@descriptor $field:ident, $fty:ty, [nested]) => {
        $crate::FieldDescriptor::nested(stringify!($field))
    };
    (@descriptor $field:ident, $fty:ty, [opaque]) => {
        $crate::FieldDescriptor::opaque(stringify!($field))
    };

    (@ref $e:expr, [nested]) => {
        $crate::FieldRef::Nested($e)
    };
    (@ref $e:expr, [opaque]) => {
        $crate::FieldRef::Opaque
    };
    (@ref $e:expr, [$($flag:ident)?]) => {
        $crate::FieldRef::Leaf($e)
    };

    (@mut $e:expr, [nested]) => {
        $crate::FieldMut::Nested($e)
    };
    (@mut $e:expr, []) => {
        $crate::FieldMut::Leaf($e)
    };
    (@mut $e:expr, [$flag:ident]) => {
        $crate::FieldMut::Skip
    };
}

#[cfg(test)]
mod tests {
    use crate::schema::{FieldKind, FieldMut, FieldRef, FloatWidth, IntWidth, Record};

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Inner {
            code: u16 => { "form": "zip" },
        }
    }

    crate::record! {
        /// Outer record used by the macro tests.
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Outer {
            /// Display name.
            pub name: String => { "form": "username", "title": "User name", "valid": "required" },
            weight: f32,
            inner: Inner [nested],
            token: String [readonly] => { "valid": "required", },
            extra: Vec<(u8, u8)> [opaque],
        }
    }

    #[test]
    fn test_schema_is_built_from_declaration() {
        let outer = Outer::default();
        let schema = outer.schema();
        assert_eq!(schema.name(), "Outer");
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "weight", "inner", "token", "extra"]);

        let name = schema.field("name").unwrap();
        assert_eq!(name.kind(), FieldKind::Str);
        assert_eq!(name.annotation("form"), Some("username"));
        assert_eq!(name.annotation("title"), Some("User name"));
        assert_eq!(
            schema.field("weight").unwrap().kind(),
            FieldKind::Float(FloatWidth::F32)
        );
        assert!(schema.field("inner").unwrap().kind().is_nested());
        assert!(!schema.field("token").unwrap().is_writable());
        assert_eq!(schema.field("extra").unwrap().kind(), FieldKind::Other);
    }

    #[test]
    fn test_schema_is_shared() {
        let a = Outer::default();
        let b = Outer::default();
        assert!(std::ptr::eq(a.schema(), b.schema()));
    }

    #[test]
    fn test_views_follow_flags() {
        let mut outer = Outer::default();
        {
            let refs = outer.fields();
            assert_eq!(refs.len(), 5);
            assert!(matches!(refs[0], FieldRef::Leaf(_)));
            assert!(matches!(refs[2], FieldRef::Nested(_)));
            assert!(matches!(refs[3], FieldRef::Leaf(_)));
            assert!(matches!(refs[4], FieldRef::Opaque));
        }
        let muts = outer.fields_mut();
        assert!(matches!(muts[0], FieldMut::Leaf(_)));
        assert!(matches!(muts[2], FieldMut::Nested(_)));
        assert!(matches!(muts[3], FieldMut::Skip));
        assert!(matches!(muts[4], FieldMut::Skip));
    }

    #[test]
    fn test_nested_schema() {
        let inner = Inner::default();
        let field = inner.schema().field("code").unwrap();
        assert_eq!(field.kind(), FieldKind::Uint(IntWidth::W16));
        assert_eq!(field.annotation("form"), Some("zip"));
    }
}
