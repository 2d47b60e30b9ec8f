//! Declarative macros that generate record types together with their reflective descriptors.
//!
//! Every path in the expansions goes through `$crate`, so the macros can be used from other
//! crates to declare additional record types without importing anything first.

/// Declares a record struct and implements [`Message`](crate::reflect::Message),
/// [`MessageType`](crate::reflect::MessageType) and the traits that let it be nested inside
/// other records.
///
/// Each field is written as `rust_name: Type => ("schema_name", "jsonName")`. Field order in
/// the declaration is the order of the descriptor table and of every encoded object. A field may
/// end with `check some_fn`, where `some_fn(&value, &path) -> CodecResult<()>` runs after the
/// record is read and rejects values the type alone cannot rule out.
///
/// ```
/// phenopackets_schema::message! {
///     /// A named thing.
///     pub struct Thing = "example.Thing" {
///         id: String => ("id", "id"),
///         alternate_ids: Vec<String> => ("alternate_ids", "alternateIds"),
///     }
/// }
///
/// use phenopackets_schema::MessageType;
/// assert_eq!(Thing::DESCRIPTOR.fields[1].json_name, "alternateIds");
/// ```
#[macro_export]
macro_rules! message {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $full_name:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => ($proto:literal, $json:literal) $(check $check:path)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::reflect::Message for $name {
            fn descriptor(&self) -> &'static $crate::reflect::MessageDescriptor {
                <Self as $crate::reflect::MessageType>::DESCRIPTOR
            }

            fn get(&self, field: &str) -> $crate::reflect::FieldValue<'_> {
                match field {
                    $( $proto => <$ty as $crate::reflect::Field>::reflect(&self.$field), )*
                    _ => $crate::reflect::unknown_field(
                        <Self as $crate::reflect::MessageType>::DESCRIPTOR,
                        field,
                    ),
                }
            }

            fn oneof_case(&self, group: &str) -> ::std::option::Option<&'static str> {
                match group {
                    $(
                        $proto if <$ty as $crate::reflect::Field>::KIND.is_oneof() => {
                            <$ty as $crate::reflect::Field>::case(&self.$field)
                        }
                    )*
                    _ => $crate::reflect::not_a_oneof(
                        <Self as $crate::reflect::MessageType>::DESCRIPTOR,
                        group,
                    ),
                }
            }
        }

        impl $crate::reflect::MessageType for $name {
            const DESCRIPTOR: &'static $crate::reflect::MessageDescriptor =
                &$crate::reflect::MessageDescriptor {
                    full_name: $full_name,
                    fields: &[
                        $(
                            $crate::reflect::FieldDescriptor {
                                name: $proto,
                                json_name: $json,
                                kind: <$ty as $crate::reflect::Field>::KIND,
                                cardinality: <$ty as $crate::reflect::Field>::CARDINALITY,
                            },
                        )*
                    ],
                };

            #[allow(unused_variables)]
            fn decode_object(
                object: &$crate::json::JsonMap,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<Self> {
                let record = Self {
                    $(
                        $field: <$ty as $crate::reflect::Field>::read(object, $proto, $json, path)?,
                    )*
                };
                $( $( $check(&record.$field, &path.field($json))?; )? )*
                ::std::result::Result::Ok(record)
            }
        }

        impl $crate::reflect::Element for $name {
            const KIND: $crate::reflect::FieldKind = $crate::reflect::FieldKind::Message($full_name);

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                $crate::reflect::FieldValue::Message(self)
            }

            fn decode(
                value: &$crate::json::JsonValue,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<Self> {
                $crate::json::decode::decode_message(value, path)
            }
        }

        impl $crate::reflect::Optional for $name {
            const KIND: $crate::reflect::FieldKind = $crate::reflect::FieldKind::Message($full_name);

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                $crate::reflect::FieldValue::Message(self)
            }

            fn read_present(
                object: &$crate::json::JsonMap,
                name: &'static str,
                json_name: &'static str,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<::std::option::Option<Self>> {
                $crate::json::decode::read_element(object, name, json_name, path)
            }
        }
    };
}

/// Declares a oneof group as a closed enum, one variant per alternative.
///
/// Each variant is written as `Variant(Payload) => ("schema_name", "jsonName")`. A record holds
/// the group as `Option<Group>`; `None` means no alternative is set.
#[macro_export]
macro_rules! oneof {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty) => ($proto:literal, $json:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        impl $crate::reflect::Oneof for $name {
            const ALTERNATIVES: &'static [$crate::reflect::OneofAlternative] = &[
                $(
                    $crate::reflect::OneofAlternative {
                        name: $proto,
                        json_name: $json,
                        kind: <$payload as $crate::reflect::Element>::KIND,
                    },
                )+
            ];

            fn case(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $proto, )+
                }
            }

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                match self {
                    $( Self::$variant(value) => <$payload as $crate::reflect::Element>::reflect(value), )+
                }
            }

            fn decode_alternative(
                alternative: &'static $crate::reflect::OneofAlternative,
                value: &$crate::json::JsonValue,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<Self> {
                match alternative.name {
                    $(
                        $proto => ::std::result::Result::Ok(Self::$variant(
                            <$payload as $crate::reflect::Element>::decode(value, path)?,
                        )),
                    )+
                    other => ::std::result::Result::Err($crate::CodecError::mismatch(
                        path,
                        ::std::format!("'{}' is not an alternative of {}", other, stringify!($name)),
                    )),
                }
            }
        }

        impl $crate::reflect::Optional for $name {
            const KIND: $crate::reflect::FieldKind =
                $crate::reflect::FieldKind::Oneof(<Self as $crate::reflect::Oneof>::ALTERNATIVES);

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                <Self as $crate::reflect::Oneof>::reflect(self)
            }

            fn case(&self) -> ::std::option::Option<&'static str> {
                ::std::option::Option::Some(<Self as $crate::reflect::Oneof>::case(self))
            }

            fn read_present(
                object: &$crate::json::JsonMap,
                name: &'static str,
                _json_name: &'static str,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<::std::option::Option<Self>> {
                $crate::json::decode::read_oneof(object, name, path)
            }
        }
    };
}

/// Declares a closed enumeration whose first variant is the zero default.
///
/// Each variant is written as `Variant = number => "SYMBOLIC_NAME"`. JSON carries the symbolic
/// name; decoding also accepts the number.
#[macro_export]
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident = $full_name:literal {
            $(#[$first_meta:meta])*
            $first:ident = $first_number:literal => $first_text:literal,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $number:literal => $text:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum $name {
            $(#[$first_meta])*
            #[default]
            $first = $first_number,
            $(
                $(#[$variant_meta])*
                $variant = $number,
            )*
        }

        impl $crate::reflect::ProtoEnum for $name {
            const FULL_NAME: &'static str = $full_name;

            fn number(self) -> i32 {
                self as i32
            }

            fn as_str_name(self) -> &'static str {
                match self {
                    Self::$first => $first_text,
                    $( Self::$variant => $text, )*
                }
            }

            fn from_number(number: i32) -> ::std::option::Option<Self> {
                match number {
                    $first_number => ::std::option::Option::Some(Self::$first),
                    $( $number => ::std::option::Option::Some(Self::$variant), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn from_str_name(name: &str) -> ::std::option::Option<Self> {
                match name {
                    $first_text => ::std::option::Option::Some(Self::$first),
                    $( $text => ::std::option::Option::Some(Self::$variant), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $crate::reflect::ProtoEnum>::as_str_name(*self))
            }
        }

        impl $crate::reflect::Element for $name {
            const KIND: $crate::reflect::FieldKind = $crate::reflect::FieldKind::Enum($full_name);

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                $crate::reflect::FieldValue::Enum($crate::reflect::EnumValue {
                    name: <Self as $crate::reflect::ProtoEnum>::as_str_name(*self),
                    number: <Self as $crate::reflect::ProtoEnum>::number(*self),
                })
            }

            fn decode(
                value: &$crate::json::JsonValue,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<Self> {
                $crate::json::decode::decode_enum(value, path)
            }
        }

        impl $crate::reflect::Field for $name {
            const KIND: $crate::reflect::FieldKind = <Self as $crate::reflect::Element>::KIND;

            fn reflect(&self) -> $crate::reflect::FieldValue<'_> {
                <Self as $crate::reflect::Element>::reflect(self)
            }

            fn read(
                object: &$crate::json::JsonMap,
                name: &'static str,
                json_name: &'static str,
                path: &$crate::json::FieldPath,
            ) -> $crate::CodecResult<Self> {
                ::std::result::Result::Ok(
                    $crate::json::decode::read_element(object, name, json_name, path)?
                        .unwrap_or_default(),
                )
            }
        }
    };
}
