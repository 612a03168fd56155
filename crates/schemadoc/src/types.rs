/*!
Type descriptions consumed by the schema mapper.

A [`TypeDescriptor`] is the runtime view of a Rust type: its name and its
kind. Structs carry their fields, each with an optional name annotation.
Descriptors are produced by the [`Describe`] trait, usually through
`#[derive(Describe)]`, but can also be assembled by hand.
*/

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Trait for types that can describe their own shape
pub trait Describe {
    /// Build the type description for this type
    fn describe() -> TypeDescriptor;
}

/// Runtime description of a single type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Fully qualified type name, used for diagnostics
    pub type_name: String,
    /// Kind of the type
    pub kind: TypeKind,
}

/// Kind of a described type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Char,
    String,
    Struct(StructDescriptor),
    Enum,
    Array,
    Slice,
    Map,
    Set,
    Option,
    Pointer,
    Tuple,
    Unit,
}

/// Fields of a struct, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructDescriptor {
    pub fields: Vec<FieldDescriptor>,
}

/// A single struct field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared identifier
    pub ident: String,
    /// Raw name annotation, e.g. `"TheName,omitempty"`
    pub annotation: Option<String>,
    /// Type of the field
    pub ty: TypeDescriptor,
}

impl TypeDescriptor {
    /// Create a descriptor with an explicit type name
    pub fn new(type_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
        }
    }

    /// Create a descriptor named after `T`
    pub fn of<T: ?Sized>(kind: TypeKind) -> Self {
        Self::new(type_name::<T>(), kind)
    }

    /// Create a struct descriptor from its fields
    pub fn structure(type_name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(type_name, TypeKind::Struct(StructDescriptor { fields }))
    }
}

impl TypeKind {
    /// Short name of the kind, as reported in errors
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Bool => "bool",
            TypeKind::I8 => "i8",
            TypeKind::I16 => "i16",
            TypeKind::I32 => "i32",
            TypeKind::I64 => "i64",
            TypeKind::Isize => "isize",
            TypeKind::U8 => "u8",
            TypeKind::U16 => "u16",
            TypeKind::U32 => "u32",
            TypeKind::U64 => "u64",
            TypeKind::Usize => "usize",
            TypeKind::F32 => "f32",
            TypeKind::F64 => "f64",
            TypeKind::Char => "char",
            TypeKind::String => "string",
            TypeKind::Struct(_) => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Array => "array",
            TypeKind::Slice => "slice",
            TypeKind::Map => "map",
            TypeKind::Set => "set",
            TypeKind::Option => "option",
            TypeKind::Pointer => "pointer",
            TypeKind::Tuple => "tuple",
            TypeKind::Unit => "unit",
        }
    }
}

impl FieldDescriptor {
    /// Create a field without a name annotation
    pub fn new(ident: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            ident: ident.into(),
            annotation: None,
            ty,
        }
    }

    /// Attach a name annotation
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Name the field is serialized under.
    ///
    /// The first comma-delimited segment of the annotation wins unless it is
    /// empty, in which case the declared identifier is used.
    pub fn serialized_name(&self) -> &str {
        self.annotation
            .as_deref()
            .and_then(|annotation| annotation.split(',').next())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.ident.as_str())
    }

    /// Whether the field is exposed in the schema.
    ///
    /// Decided on the serialized name, not the declared identifier.
    pub fn is_visible(&self) -> bool {
        self.serialized_name()
            .chars()
            .next()
            .is_some_and(is_uppercase_letter)
    }
}

/// Upper-case letter (general category Lu).
///
/// `char::is_uppercase` also accepts the Other_Uppercase symbols (Roman
/// numerals, circled and squared Latin letters), which are not letters.
fn is_uppercase_letter(c: char) -> bool {
    c.is_uppercase()
        && !matches!(
            c,
            '\u{2160}'..='\u{216F}'
                | '\u{24B6}'..='\u{24CF}'
                | '\u{1F130}'..='\u{1F149}'
                | '\u{1F150}'..='\u{1F169}'
                | '\u{1F170}'..='\u{1F189}'
        )
}

macro_rules! describe_as {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::of::<Self>(TypeKind::$kind)
                }
            }
        )+
    };
}

describe_as!(Bool => bool);
describe_as!(I8 => i8);
describe_as!(I16 => i16);
describe_as!(I32 => i32);
describe_as!(I64 => i64);
describe_as!(Isize => isize);
describe_as!(U8 => u8);
describe_as!(U16 => u16);
describe_as!(U32 => u32);
describe_as!(U64 => u64);
describe_as!(Usize => usize);
describe_as!(F32 => f32);
describe_as!(F64 => f64);
describe_as!(Char => char);
describe_as!(String => String, str);
describe_as!(Unit => ());

impl Describe for &str {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::String)
    }
}

impl Describe for Cow<'_, str> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::String)
    }
}

// Container kinds only record their own name; element types are never
// inspected since the mapper rejects these kinds outright.

impl<T> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Slice)
    }
}

impl<T> Describe for VecDeque<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Slice)
    }
}

impl<T> Describe for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Slice)
    }
}

impl<T, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Array)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Map)
    }
}

impl<K, V> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Map)
    }
}

impl<T, S> Describe for HashSet<T, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Set)
    }
}

impl<T> Describe for BTreeSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Set)
    }
}

impl<T> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Option)
    }
}

impl<T: ?Sized> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Pointer)
    }
}

impl<T: ?Sized> Describe for Rc<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Pointer)
    }
}

impl<T: ?Sized> Describe for Arc<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(TypeKind::Pointer)
    }
}

macro_rules! describe_tuple {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> Describe for ($($name,)+) {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::of::<Self>(TypeKind::Tuple)
                }
            }
        )+
    };
}

describe_tuple!((A), (A, B), (A, B, C), (A, B, C, D));

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ident: &str) -> FieldDescriptor {
        FieldDescriptor::new(ident, String::describe())
    }

    #[test]
    fn test_serialized_name_defaults_to_ident() {
        let f = field("Foo");
        assert_eq!(f.serialized_name(), "Foo");
        assert!(f.is_visible());
    }

    #[test]
    fn test_serialized_name_takes_first_annotation_segment() {
        let f = field("foo").with_annotation("TheName,omitempty");
        assert_eq!(f.serialized_name(), "TheName");
        assert!(f.is_visible());
    }

    #[test]
    fn test_empty_annotation_segment_is_ignored() {
        let f = field("Foo").with_annotation(",omitempty");
        assert_eq!(f.serialized_name(), "Foo");

        let f = field("Foo").with_annotation("");
        assert_eq!(f.serialized_name(), "Foo");
    }

    #[test]
    fn test_visibility_follows_resolved_name() {
        // upper-case identifier renamed to lower-case is hidden
        assert!(!field("Foo").with_annotation("foo").is_visible());
        // and the reverse is exposed
        assert!(field("foo").with_annotation("Foo").is_visible());
        assert!(!field("ignored").is_visible());
        assert!(!field("").is_visible());
    }

    #[test]
    fn test_visibility_uses_unicode_case() {
        assert!(field("Écoute").is_visible());
        assert!(!field("écoute").is_visible());
        assert!(!field("_Hidden").is_visible());
    }

    #[test]
    fn test_other_uppercase_symbols_are_hidden() {
        // circled, Roman numeral and squared forms are not Lu letters
        assert!(!field("Ⓐpple").is_visible());
        assert!(!field("Ⅻ").is_visible());
        assert!(!field("\u{1F130}bc").is_visible());
        assert!(field("Ωmega").is_visible());
        // title-case letters are not upper-case either
        assert!(!field("ǅemal").is_visible());
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(bool::describe().kind, TypeKind::Bool);
        assert_eq!(u64::describe().kind, TypeKind::U64);
        assert_eq!(<&str>::describe().kind, TypeKind::String);
        assert_eq!(str::describe().kind, TypeKind::String);
        assert_eq!(i32::describe().type_name, "i32");
    }

    #[test]
    fn test_container_kinds() {
        assert_eq!(Vec::<u8>::describe().kind, TypeKind::Slice);
        assert_eq!(<[u8; 4]>::describe().kind, TypeKind::Array);
        assert_eq!(HashMap::<String, u8>::describe().kind, TypeKind::Map);
        assert_eq!(Option::<String>::describe().kind, TypeKind::Option);
        assert_eq!(Box::<str>::describe().kind, TypeKind::Pointer);
        assert_eq!(<(u8, String)>::describe().kind, TypeKind::Tuple);
        assert_eq!(TypeKind::Slice.name(), "slice");
    }
}
