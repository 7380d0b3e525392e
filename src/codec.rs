//! The typed codec: mapping between Rust values and DataString items.
//!
//! Instead of scanning runtime attributes, a type declares its mapping once
//! by implementing [`DataStringEncodable`] and returning a [`Schema`]: the
//! type-level kind ("I am the function `rgb`", "I am the main context"), and
//! one binding per encodable field ("I am parameter 0, an integer literal").
//! Fields that declare no binding are simply not encoded.
//!
//! The configuration-error taxonomy of the attribute model is kept: a type
//! that declares no kind fails with [`Error::AttributeExpected`]; declaring
//! two kinds on one type, or two literal kinds on one field name, fails with
//! [`Error::InvalidAttributeContext`]. Both are programmer errors detected
//! when the schema is first used, never retried.
//!
//! ## Examples
//!
//! ```rust
//! use datastring::{encode, decode, DataStringEncodable, Schema};
//! use num_bigint::BigInt;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Rgb { r: u8, g: u8, b: u8 }
//!
//! impl DataStringEncodable for Rgb {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::function("rgb")
//!             .integer("r", |c| Some(BigInt::from(c.r)), |c, v| set_u8(&mut c.r, v))
//!             .integer("g", |c| Some(BigInt::from(c.g)), |c, v| set_u8(&mut c.g, v))
//!             .integer("b", |c| Some(BigInt::from(c.b)), |c, v| set_u8(&mut c.b, v))
//!     }
//! }
//!
//! fn set_u8(slot: &mut u8, value: &BigInt) -> bool {
//!     u8::try_from(value).map(|v| *slot = v).is_ok()
//! }
//!
//! let red = Rgb { r: 255, g: 0, b: 0 };
//! let item = encode(&red).unwrap();
//! assert_eq!(item.to_string(), "rgb(255; 0; 0)");
//! assert_eq!(decode::<Rgb>(&item).unwrap(), red);
//! ```

use crate::bits::{BinaryBase, BitString};
use crate::error::{Error, Result};
use crate::float::BigFloat;
use crate::options::{CodecOptions, Strictness};
use crate::value::{Item, Literal};
use num_bigint::BigInt;

/// A type that declares how it maps onto the DataString notation.
pub trait DataStringEncodable: Sized {
    /// The declarative mapping for this type.
    fn schema() -> Schema<Self>;
}

/// The type-level kind of an encodable type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// Encodes as the root main context.
    MainContext,
    /// Encodes as a function with this exact name.
    Function(&'static str),
    /// Decodes from any function whose name is in the set; an empty set
    /// matches any function name at all. Cannot be encoded (no concrete
    /// name to emit).
    AnyFunction(&'static [&'static str]),
}

type GetString<T> = Box<dyn Fn(&T) -> String>;
type SetString<T> = Box<dyn Fn(&mut T, &str) -> bool>;
type GetInteger<T> = Box<dyn Fn(&T) -> Option<BigInt>>;
type SetInteger<T> = Box<dyn Fn(&mut T, &BigInt) -> bool>;
type GetFloat<T> = Box<dyn Fn(&T) -> Option<BigFloat>>;
type SetFloat<T> = Box<dyn Fn(&mut T, &BigFloat) -> bool>;
type GetBinary<T> = Box<dyn Fn(&T) -> Option<BitString>>;
type SetBinary<T> = Box<dyn Fn(&mut T, &BitString) -> bool>;
type EncodeNested<T> = Box<dyn Fn(&T, &CodecOptions) -> Result<Option<Item>>>;
type DecodeNested<T> = Box<dyn Fn(&mut T, &Item, &CodecOptions) -> Result<bool>>;

enum FieldKind<T> {
    StringLiteral { get: GetString<T>, set: SetString<T> },
    IntegerLiteral { get: GetInteger<T>, set: SetInteger<T> },
    FloatLiteral { get: GetFloat<T>, set: SetFloat<T> },
    BinaryLiteral { base: BinaryBase, get: GetBinary<T>, set: SetBinary<T> },
    NestedFunction { encode: EncodeNested<T>, decode: DecodeNested<T> },
}

impl<T> FieldKind<T> {
    const fn name(&self) -> &'static str {
        match self {
            FieldKind::StringLiteral { .. } => "string-literal",
            FieldKind::IntegerLiteral { .. } => "integer-literal",
            FieldKind::FloatLiteral { .. } => "float-literal",
            FieldKind::BinaryLiteral { .. } => "binary-literal",
            FieldKind::NestedFunction { .. } => "nested-function",
        }
    }
}

struct FieldBinding<T> {
    name: &'static str,
    index: Option<usize>,
    kinds: Vec<FieldKind<T>>,
}

/// The declarative mapping of one type: its kind plus ordered field bindings.
///
/// Built with the constructor for the wanted kind and one method call per
/// field; field declaration order is parameter order unless overridden with
/// [`at`](Schema::at).
pub struct Schema<T> {
    type_name: &'static str,
    kinds: Vec<TypeKind>,
    fields: Vec<FieldBinding<T>>,
}

impl<T> Schema<T> {
    /// A schema with no kind declared. Using it fails with
    /// [`Error::AttributeExpected`]; call [`kind`](Schema::kind) or use one
    /// of the kind constructors.
    #[must_use]
    pub fn new() -> Self {
        Schema {
            type_name: std::any::type_name::<T>(),
            kinds: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// A schema for a type that encodes as the main context.
    #[must_use]
    pub fn main_context() -> Self {
        Self::new().kind(TypeKind::MainContext)
    }

    /// A schema for a type that encodes as the function `name`.
    #[must_use]
    pub fn function(name: &'static str) -> Self {
        Self::new().kind(TypeKind::Function(name))
    }

    /// A schema for a type that decodes from any of the given function names
    /// (any name at all when the set is empty).
    #[must_use]
    pub fn any_function(names: &'static [&'static str]) -> Self {
        Self::new().kind(TypeKind::AnyFunction(names))
    }

    /// Declares a type-level kind. A type must carry exactly one; a second
    /// declaration is reported when the schema is used.
    #[must_use]
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Declares a string-literal field. The getter is the field's natural
    /// string conversion; the setter returns `false` when the text cannot be
    /// stored.
    #[must_use]
    pub fn string(
        self,
        name: &'static str,
        get: impl Fn(&T) -> String + 'static,
        set: impl Fn(&mut T, &str) -> bool + 'static,
    ) -> Self {
        self.field(
            name,
            FieldKind::StringLiteral {
                get: Box::new(get),
                set: Box::new(set),
            },
        )
    }

    /// Declares an integer-literal field. A getter returning `None` means the
    /// runtime value has no integer form.
    #[must_use]
    pub fn integer(
        self,
        name: &'static str,
        get: impl Fn(&T) -> Option<BigInt> + 'static,
        set: impl Fn(&mut T, &BigInt) -> bool + 'static,
    ) -> Self {
        self.field(
            name,
            FieldKind::IntegerLiteral {
                get: Box::new(get),
                set: Box::new(set),
            },
        )
    }

    /// Declares a float-literal field. On decode the setter also receives
    /// integer literals, widened to [`BigFloat`].
    #[must_use]
    pub fn float(
        self,
        name: &'static str,
        get: impl Fn(&T) -> Option<BigFloat> + 'static,
        set: impl Fn(&mut T, &BigFloat) -> bool + 'static,
    ) -> Self {
        self.field(
            name,
            FieldKind::FloatLiteral {
                get: Box::new(get),
                set: Box::new(set),
            },
        )
    }

    /// Declares a binary-literal field with its preferred representation base.
    #[must_use]
    pub fn binary(
        self,
        name: &'static str,
        base: BinaryBase,
        get: impl Fn(&T) -> Option<BitString> + 'static,
        set: impl Fn(&mut T, &BitString) -> bool + 'static,
    ) -> Self {
        self.field(
            name,
            FieldKind::BinaryLiteral {
                base,
                get: Box::new(get),
                set: Box::new(set),
            },
        )
    }

    /// Declares a nested-function field encoded against the target type `U`.
    ///
    /// A getter returning `None` means the runtime value is not an instance
    /// of the target type and the field is omitted (or a strict error).
    #[must_use]
    pub fn nested<U>(
        self,
        name: &'static str,
        get: impl for<'a> Fn(&'a T) -> Option<&'a U> + 'static,
        set: impl Fn(&mut T, U) + 'static,
    ) -> Self
    where
        U: DataStringEncodable + Default + 'static,
    {
        let encode = move |value: &T, options: &CodecOptions| match get(value) {
            Some(target) => encode_with_options(target, options).map(Some),
            None => Ok(None),
        };
        let decode = move |value: &mut T, item: &Item, options: &CodecOptions| {
            let target = decode_with_options::<U>(item, options)?;
            set(value, target);
            Ok(true)
        };
        self.field(
            name,
            FieldKind::NestedFunction {
                encode: Box::new(encode),
                decode: Box::new(decode),
            },
        )
    }

    /// Overrides the ordering index of the last-declared field.
    ///
    /// The index is a sort key for parameter order, not an absolute child
    /// position: fields keyed `0` and `5` occupy parameters 0 and 1. Encode
    /// and decode both number parameters by rank in that order, so a sparse
    /// keying round-trips.
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.index = Some(index);
        }
        self
    }

    fn field(mut self, name: &'static str, kind: FieldKind<T>) -> Self {
        // A repeated field name stacks kinds on the same binding; the
        // conflict is reported at encode/decode time, not here.
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(binding) => binding.kinds.push(kind),
            None => self.fields.push(FieldBinding {
                name,
                index: None,
                kinds: vec![kind],
            }),
        }
        self
    }

    fn resolve_kind(&self) -> Result<&TypeKind> {
        match self.kinds.as_slice() {
            [] => Err(Error::attribute_expected(
                self.type_name,
                "main-context, function or any-function",
            )),
            [kind] => Ok(kind),
            _ => Err(Error::invalid_attribute_context(
                self.type_name,
                "more than one context kind declared",
            )),
        }
    }

    fn resolve_field<'k>(&self, binding: &'k FieldBinding<T>) -> Result<&'k FieldKind<T>> {
        match binding.kinds.as_slice() {
            [] => Err(Error::attribute_expected(
                format!("{}::{}", self.type_name, binding.name),
                "exactly one literal or nested-function kind",
            )),
            [kind] => Ok(kind),
            _ => Err(Error::invalid_attribute_context(
                format!("{}::{}", self.type_name, binding.name),
                "more than one field kind declared",
            )),
        }
    }

    /// Fields in parameter order: stable-sorted by the declared index,
    /// falling back to declaration position. Only the resulting order is
    /// meaningful; both encode and decode number parameters by rank in it,
    /// so index gaps do not leave holes.
    fn ordered_fields(&self) -> Vec<&FieldBinding<T>> {
        let mut ordered: Vec<(usize, &FieldBinding<T>)> = self
            .fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.index.unwrap_or(position), field))
            .collect();
        ordered.sort_by_key(|(index, _)| *index);
        ordered.into_iter().map(|(_, field)| field).collect()
    }

    pub(crate) fn decodes_main_context(&self) -> Result<bool> {
        Ok(matches!(self.resolve_kind()?, TypeKind::MainContext))
    }

    pub(crate) fn resolved_kind(&self) -> Result<TypeKind> {
        self.resolve_kind().cloned()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a value into an item tree using default (lenient) options.
///
/// # Errors
///
/// Fails with the metadata error taxonomy when the schema is misdeclared;
/// see the module docs.
pub fn encode<T: DataStringEncodable>(value: &T) -> Result<Item> {
    encode_with_options(value, &CodecOptions::default())
}

/// Encodes a value into an item tree.
///
/// In [`Strictness::Lenient`] mode a field whose runtime value cannot be
/// converted to its declared literal kind is silently omitted, as the
/// original attribute codec did; [`Strictness::Strict`] turns every such
/// omission into [`Error::ConversionFailed`].
pub fn encode_with_options<T: DataStringEncodable>(
    value: &T,
    options: &CodecOptions,
) -> Result<Item> {
    let schema = T::schema();
    let kind = schema.resolve_kind()?.clone();
    let mut children = Vec::new();
    for binding in schema.ordered_fields() {
        let encoded = match schema.resolve_field(binding)? {
            FieldKind::StringLiteral { get, .. } => {
                Some(Item::Literal(Literal::String(get(value))))
            }
            FieldKind::IntegerLiteral { get, .. } => {
                get(value).map(|v| Item::Literal(Literal::Integer(v)))
            }
            FieldKind::FloatLiteral { get, .. } => {
                get(value).map(|v| Item::Literal(Literal::Float(v)))
            }
            FieldKind::BinaryLiteral { base, get, .. } => get(value).map(|bits| {
                Item::Literal(Literal::Binary { bits, base: *base })
            }),
            FieldKind::NestedFunction { encode, .. } => encode(value, options)?,
        };
        match encoded {
            Some(item) => children.push(item),
            None if options.strictness == Strictness::Strict => {
                return Err(Error::ConversionFailed {
                    entity: schema.type_name.to_string(),
                    field: binding.name.to_string(),
                });
            }
            None => {}
        }
    }
    match kind {
        TypeKind::MainContext => Ok(Item::MainContext(children)),
        TypeKind::Function(name) => Ok(Item::function(name, children)),
        TypeKind::AnyFunction(_) => Err(Error::invalid_attribute_context(
            schema.type_name,
            "an any-function kind declares no concrete name to encode as",
        )),
    }
}

/// Decodes a value from an item tree using default (lenient) options.
pub fn decode<T: DataStringEncodable + Default>(item: &Item) -> Result<T> {
    decode_with_options(item, &CodecOptions::default())
}

/// Decodes a value from an item tree, the structural mirror of encoding.
///
/// The item's shape must match the schema's kind: a main-context type takes
/// an [`Item::MainContext`], a function type takes an [`Item::Function`]
/// with a matching name (any listed name for an any-function kind). Fields
/// populate from the children in parameter order, numbering the fields by
/// rank exactly as encoding does; in lenient mode missing children and
/// unconvertible values leave the default in place, in strict mode they are
/// hard errors.
pub fn decode_with_options<T: DataStringEncodable + Default>(
    item: &Item,
    options: &CodecOptions,
) -> Result<T> {
    let schema = T::schema();
    let kind = schema.resolve_kind()?;
    let children: &[Item] = match (kind, item) {
        (TypeKind::MainContext, Item::MainContext(items)) => items,
        (TypeKind::Function(name), Item::Function { name: found, args }) if found == name => args,
        (TypeKind::AnyFunction(names), Item::Function { name: found, args })
            if names.is_empty() || names.contains(&found.as_str()) =>
        {
            args
        }
        _ => {
            return Err(Error::type_mismatch(
                schema.type_name,
                expected_shape(kind),
                item.kind_name(),
            ))
        }
    };

    let mut value = T::default();
    for (position, binding) in schema.ordered_fields().into_iter().enumerate() {
        let kind = schema.resolve_field(binding)?;
        let Some(child) = children.get(position) else {
            if options.strictness == Strictness::Strict {
                return Err(Error::MissingParameter {
                    entity: schema.type_name.to_string(),
                    field: binding.name.to_string(),
                    index: position,
                });
            }
            continue;
        };
        match decode_field(&mut value, kind, child, options)? {
            FieldOutcome::Stored => {}
            FieldOutcome::WrongKind if options.strictness == Strictness::Strict => {
                return Err(Error::type_mismatch(
                    format!("{}::{}", schema.type_name, binding.name),
                    kind.name(),
                    child.kind_name(),
                ));
            }
            FieldOutcome::Rejected if options.strictness == Strictness::Strict => {
                return Err(Error::ConversionFailed {
                    entity: schema.type_name.to_string(),
                    field: binding.name.to_string(),
                });
            }
            FieldOutcome::WrongKind | FieldOutcome::Rejected => {}
        }
    }
    Ok(value)
}

enum FieldOutcome {
    Stored,
    /// The child's literal kind does not match the field's.
    WrongKind,
    /// The kind matched but the setter could not store the value.
    Rejected,
}

impl FieldOutcome {
    fn from_set(stored: bool) -> Self {
        if stored {
            FieldOutcome::Stored
        } else {
            FieldOutcome::Rejected
        }
    }
}

fn decode_field<T>(
    value: &mut T,
    kind: &FieldKind<T>,
    child: &Item,
    options: &CodecOptions,
) -> Result<FieldOutcome> {
    let outcome = match (kind, child) {
        (FieldKind::StringLiteral { set, .. }, Item::Literal(Literal::String(text))) => {
            FieldOutcome::from_set(set(value, text))
        }
        (FieldKind::IntegerLiteral { set, .. }, Item::Literal(Literal::Integer(v))) => {
            FieldOutcome::from_set(set(value, v))
        }
        (FieldKind::FloatLiteral { set, .. }, Item::Literal(Literal::Float(v))) => {
            FieldOutcome::from_set(set(value, v))
        }
        // Integer literals widen into float fields.
        (FieldKind::FloatLiteral { set, .. }, Item::Literal(Literal::Integer(v))) => {
            FieldOutcome::from_set(set(value, &BigFloat::from(v.clone())))
        }
        (FieldKind::BinaryLiteral { set, .. }, Item::Literal(Literal::Binary { bits, .. })) => {
            FieldOutcome::from_set(set(value, bits))
        }
        (FieldKind::NestedFunction { decode, .. }, _) => match decode(value, child, options) {
            Ok(true) => FieldOutcome::Stored,
            Ok(false) => FieldOutcome::Rejected,
            // A shape mismatch on a nested field is soft in lenient mode.
            Err(Error::TypeMismatch { .. }) if options.strictness == Strictness::Lenient => {
                FieldOutcome::WrongKind
            }
            Err(err) => return Err(err),
        },
        _ => FieldOutcome::WrongKind,
    };
    Ok(outcome)
}

const fn expected_shape(kind: &TypeKind) -> &'static str {
    match kind {
        TypeKind::MainContext => "main context",
        TypeKind::Function(_) => "function",
        TypeKind::AnyFunction(_) => "matching function",
    }
}

/// Decodes a whole document: a main-context type decodes the parsed root,
/// any other kind decodes the root's single top-level item.
pub(crate) fn decode_document<T: DataStringEncodable + Default>(
    input: &str,
    options: &CodecOptions,
) -> Result<T> {
    let root = crate::parser::parse(input)?;
    let schema = T::schema();
    if schema.decodes_main_context()? {
        return decode_with_options(&root, options);
    }
    match root.children() {
        [item] => decode_with_options(item, options),
        items => Err(Error::type_mismatch(
            schema.type_name,
            "exactly one top-level item",
            if items.is_empty() {
                "empty input"
            } else {
                "multiple top-level items"
            },
        )),
    }
}
