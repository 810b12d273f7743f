//! Field and record descriptors driving the overlay engine.
//!
//! A [`RecordDescriptor`] is an ordered table of [`FieldDescriptor`]s, each
//! carrying a typed [`Accessor`] bound when the table is built. The derive
//! macro emits the table as a `static`, so the overlay loop never inspects
//! types at run time.

use std::fmt;
use std::num::ParseIntError;

use serde::Serialize;

/// Writes an already validated string into a field.
pub type StringSetter<R> = fn(&mut R, String);

/// Parses a raw value into an integer field, leaving the field untouched on
/// failure.
pub type IntegerSetter<R> = fn(&mut R, &str) -> Result<(), ParseIntError>;

/// Writes a boolean into a field.
pub type BooleanSetter<R> = fn(&mut R, bool);

/// Field kinds the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `String` and aliases of it.
    String,
    /// Any primitive integer type.
    Integer,
    /// `bool`.
    Boolean,
    /// Every other type. Never overlaid.
    Unsupported,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Unsupported => "unsupported",
        })
    }
}

/// Typed write access to one field of `R`.
pub enum Accessor<R> {
    /// Assigns the raw external value verbatim.
    String(StringSetter<R>),
    /// Parses the raw external value as a base-10 integer.
    Integer(IntegerSetter<R>),
    /// Assigns the result of the case-insensitive `true` comparison.
    Boolean(BooleanSetter<R>),
    /// The field's type cannot be overlaid.
    Unsupported,
}

impl<R> Accessor<R> {
    /// The kind this accessor writes.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::String(_) => FieldKind::String,
            Self::Integer(_) => FieldKind::Integer,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Unsupported => FieldKind::Unsupported,
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accessor").field(&self.kind()).finish()
    }
}

/// Metadata describing one field of a record.
///
/// # Examples
///
/// ```
/// use config12::{Accessor, FieldDescriptor, FieldKind};
///
/// struct Server { port: u16 }
///
/// fn set_port(server: &mut Server, raw: &str) -> Result<(), std::num::ParseIntError> {
///     server.port = raw.parse()?;
///     Ok(())
/// }
///
/// let field = FieldDescriptor::new("port", Accessor::Integer(set_port)).bind("PORT");
/// assert_eq!(field.kind(), FieldKind::Integer);
/// assert_eq!(field.external_key(), Some("PORT"));
/// ```
pub struct FieldDescriptor<R> {
    name: &'static str,
    external_key: Option<&'static str>,
    accessible: bool,
    accessor: Accessor<R>,
}

impl<R> FieldDescriptor<R> {
    /// Describe an accessible, unbound field.
    #[must_use]
    pub const fn new(name: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            name,
            external_key: None,
            accessible: true,
            accessor,
        }
    }

    /// Bind the field to `key` in the external source.
    #[must_use]
    pub const fn bind(self, key: &'static str) -> Self {
        Self {
            external_key: Some(key),
            ..self
        }
    }

    /// Hide the field from the engine.
    #[must_use]
    pub const fn hidden(self) -> Self {
        Self {
            accessible: false,
            ..self
        }
    }

    /// Field identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// External key the field binds to, if any.
    #[must_use]
    pub const fn external_key(&self) -> Option<&'static str> {
        self.external_key
    }

    /// Whether the engine may read or write the field.
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Declared kind of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }

    /// Typed accessor for the field.
    #[must_use]
    pub const fn accessor(&self) -> &Accessor<R> {
        &self.accessor
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("external_key", &self.external_key)
            .field("accessible", &self.accessible)
            .finish_non_exhaustive()
    }
}

/// Ordered field table for a record type.
pub struct RecordDescriptor<R: 'static> {
    type_name: &'static str,
    prefix: Option<&'static str>,
    fields: &'static [FieldDescriptor<R>],
}

impl<R: 'static> RecordDescriptor<R> {
    /// Build a table from fields listed in declaration order.
    #[must_use]
    pub const fn new(type_name: &'static str, fields: &'static [FieldDescriptor<R>]) -> Self {
        Self {
            type_name,
            prefix: None,
            fields,
        }
    }

    /// Prepend `prefix` to every external key when looking values up.
    #[must_use]
    pub const fn with_prefix(self, prefix: &'static str) -> Self {
        Self {
            prefix: Some(prefix),
            ..self
        }
    }

    /// Name of the described type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Key prefix declared on the record, if any.
    #[must_use]
    pub const fn prefix(&self) -> Option<&'static str> {
        self.prefix
    }

    /// Fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDescriptor<R>] {
        self.fields
    }
}

impl<R: 'static> fmt::Debug for RecordDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDescriptor")
            .field("type_name", &self.type_name)
            .field("prefix", &self.prefix)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Coarse category of a value that is not a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Strings, numbers, booleans, characters and `()`.
    Scalar,
    /// Vectors, sets, arrays and other element sequences.
    Sequence,
    /// Key/value maps.
    Map,
    /// `Option<T>`.
    Optional,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Optional => "optional value",
        })
    }
}

/// Shape reported by a [`Describe`] implementation.
#[derive(Debug)]
pub enum Shape<R: 'static> {
    /// A struct with named fields, described field by field.
    Record(&'static RecordDescriptor<R>),
    /// Anything else. The engine rejects these.
    Other(ValueKind),
}

/// Types the overlay engine can inspect.
///
/// Derive it with `#[derive(Describe)]` on structs with named fields. The
/// crate also implements it for common scalars and collections so that
/// passing one of them is reported as [`crate::OverlayError::NotARecord`]
/// rather than rejected at compile time.
pub trait Describe: Clone + 'static {
    /// Report the type's shape.
    fn shape() -> Shape<Self>;
}
