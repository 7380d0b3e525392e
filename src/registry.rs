//! Name-driven dispatch from parsed functions to registered Rust types.
//!
//! A [`Registry`] collects [`DataStringEncodable`] types that share a common
//! value representation `V` and decodes each top-level function into whichever
//! type registered its name. A type with an empty any-function name set
//! becomes the fallback for otherwise unknown names.
//!
//! ```rust
//! use datastring::{Registry, DataStringEncodable, Schema};
//! use num_bigint::BigInt;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Move { x: i64, y: i64 }
//!
//! #[derive(Debug, PartialEq)]
//! enum Step { Move(Move) }
//!
//! impl From<Move> for Step {
//!     fn from(value: Move) -> Self { Step::Move(value) }
//! }
//!
//! impl DataStringEncodable for Move {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::function("move")
//!             .integer("x", |m| Some(BigInt::from(m.x)), |m, v| i64::try_from(v).map(|x| m.x = x).is_ok())
//!             .integer("y", |m| Some(BigInt::from(m.y)), |m, v| i64::try_from(v).map(|y| m.y = y).is_ok())
//!     }
//! }
//!
//! let mut registry: Registry<Step> = Registry::new();
//! registry.register::<Move>().unwrap();
//! let steps = registry.decode_all("move(3; 4)").unwrap();
//! assert_eq!(steps, vec![Step::Move(Move { x: 3, y: 4 })]);
//! ```

use crate::codec::{decode_with_options, DataStringEncodable, TypeKind};
use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::parser;
use crate::value::Item;
use indexmap::IndexMap;

type Decoder<V> = Box<dyn Fn(&Item, &CodecOptions) -> Result<V>>;

/// Dispatches parsed functions to registered types by name.
pub struct Registry<V> {
    by_name: IndexMap<&'static str, Decoder<V>>,
    fallback: Option<Decoder<V>>,
    options: CodecOptions,
}

impl<V> Registry<V> {
    /// An empty registry with default (lenient) codec options.
    #[must_use]
    pub fn new() -> Self {
        Registry {
            by_name: IndexMap::new(),
            fallback: None,
            options: CodecOptions::default(),
        }
    }

    /// An empty registry decoding with the given options.
    #[must_use]
    pub fn with_options(options: CodecOptions) -> Self {
        Registry { options, ..Self::new() }
    }

    /// Registers a decodable type under the function name(s) its schema
    /// declares.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidAttributeContext`] when the type declares
    /// a main-context kind (there is no function name to register), when a
    /// name is already taken, or when a second fallback is registered.
    pub fn register<T>(&mut self) -> Result<()>
    where
        T: DataStringEncodable + Default + Into<V> + 'static,
    {
        let schema = T::schema();
        let type_name = schema.type_name();
        let decoder: Decoder<V> = Box::new(|item, options| {
            decode_with_options::<T>(item, options).map(Into::into)
        });
        match schema.resolved_kind()? {
            TypeKind::Function(name) => self.insert(type_name, name, decoder),
            TypeKind::AnyFunction([]) => {
                if self.fallback.is_some() {
                    return Err(Error::invalid_attribute_context(
                        type_name,
                        "a fallback type is already registered",
                    ));
                }
                self.fallback = Some(decoder);
                Ok(())
            }
            TypeKind::AnyFunction(names) => {
                // All names share one closure; clone by re-boxing per name.
                for &name in names {
                    let decoder: Decoder<V> = Box::new(|item, options| {
                        decode_with_options::<T>(item, options).map(Into::into)
                    });
                    self.insert(type_name, name, decoder)?;
                }
                Ok(())
            }
            TypeKind::MainContext => Err(Error::invalid_attribute_context(
                type_name,
                "a main-context type has no function name to register",
            )),
        }
    }

    fn insert(&mut self, type_name: &str, name: &'static str, decoder: Decoder<V>) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(Error::invalid_attribute_context(
                type_name,
                &format!("the function name '{name}' is already registered"),
            ));
        }
        self.by_name.insert(name, decoder);
        Ok(())
    }

    /// Decodes one item, which must be a function with a registered name.
    pub fn decode(&self, item: &Item) -> Result<V> {
        let Item::Function { name, .. } = item else {
            return Err(Error::type_mismatch(
                "registry dispatch",
                "function",
                item.kind_name(),
            ));
        };
        let decoder = self
            .by_name
            .get(name.as_str())
            .or(self.fallback.as_ref())
            .ok_or_else(|| Error::UnknownFunction { name: name.clone() })?;
        decoder(item, &self.options)
    }

    /// Parses a whole document and decodes every top-level item.
    pub fn decode_all(&self, input: &str) -> Result<Vec<V>> {
        let root = parser::parse(input)?;
        root.children().iter().map(|item| self.decode(item)).collect()
    }

    /// The registered function names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}
