use crate::error::SelectorError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A name-only reference to a field of the record type `T`.
///
/// Specifiers are metadata tokens: they are never used to read a value from a
/// record, only to report which fields a traversal depended on. Two specifiers
/// are equal when their property names are equal, regardless of how they were
/// built.
///
/// Prefer the [`field!`](crate::field!) macro, which checks at compile time that
/// the field exists on `T`. [`PropertySpecifier::new`] is the runtime builder used
/// for declarative sources.
pub struct PropertySpecifier<T> {
    property_name: Cow<'static, str>,
    _record: PhantomData<fn() -> T>,
}

impl<T> PropertySpecifier<T> {
    /// Builds a specifier from a field name token.
    ///
    /// The token must be a single identifier. A raw-identifier prefix (`r#`) is
    /// unwrapped, so `r#type` and `type` name the same field.
    pub fn new(selector: impl AsRef<str>) -> Result<Self, SelectorError> {
        let selector = selector.as_ref();
        let name = unwrap_raw(selector.trim());
        if !is_identifier(name) {
            return Err(SelectorError::InvalidSelector(selector.to_string()));
        }
        Ok(Self {
            property_name: Cow::Owned(name.to_string()),
            _record: PhantomData,
        })
    }

    /// Used by `field!` after the compiler has already checked the access.
    #[doc(hidden)]
    pub fn from_ident(ident: &'static str) -> Self {
        Self {
            property_name: Cow::Borrowed(unwrap_raw(ident)),
            _record: PhantomData,
        }
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }
}

fn unwrap_raw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Manual impls so that `T` does not need to implement these traits.
impl<T> Clone for PropertySpecifier<T> {
    fn clone(&self) -> Self {
        Self {
            property_name: self.property_name.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for PropertySpecifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertySpecifier")
            .field(&self.property_name)
            .finish()
    }
}

impl<T> fmt::Display for PropertySpecifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property_name)
    }
}

impl<T> PartialEq for PropertySpecifier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.property_name == other.property_name
    }
}

impl<T> Eq for PropertySpecifier<T> {}

impl<T> Hash for PropertySpecifier<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property_name.hash(state);
    }
}

impl<T> Serialize for PropertySpecifier<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.property_name)
    }
}

impl<'de, T> Deserialize<'de> for PropertySpecifier<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        PropertySpecifier::new(name).map_err(de::Error::custom)
    }
}

/// Builds a [`PropertySpecifier`] for a field, checked by the compiler.
///
/// ```rust
/// use shapeflow::field;
///
/// struct Movie {
///     title: String,
/// }
///
/// let spec = field!(Movie, title);
/// assert_eq!(spec.property_name(), "title");
/// ```
#[macro_export]
macro_rules! field {
    ($record:ty, $field:ident) => {{
        let _ = |record: &$record| {
            let _ = &record.$field;
        };
        $crate::field::PropertySpecifier::<$record>::from_ident(stringify!($field))
    }};
}
