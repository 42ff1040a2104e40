//! Schema model handed over by the IDL front end.
//!
//! Everything here is read-only input for a generation run. Types refer to
//! each other by `(namespace, name)` pairs and are resolved through [`Api`]
//! lookups, never by ownership.
//!
//! The model deserializes from the JSON document the front end produces:
//!
//! ```json
//! {
//!   "namespaces": [{
//!     "name": "files",
//!     "aliases": [{ "name": "Path", "data_type": { "type": "string" } }],
//!     "routes": [{
//!       "name": "download",
//!       "arg": { "type": "struct", "namespace": "files", "name": "DownloadArg" },
//!       "result": { "type": "void" },
//!       "error": { "type": "void" },
//!       "attrs": { "host": "content", "style": "download" }
//!     }],
//!     "types": [{
//!       "kind": "struct",
//!       "name": "DownloadArg",
//!       "fields": [{ "name": "path", "data_type": { "type": "string" } }]
//!     }]
//!   }]
//! }
//! ```

use crate::error::GenResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Upper bound on alias-to-alias hops before a chain is treated as cyclic.
const MAX_ALIAS_DEPTH: usize = 64;

/// A complete, already-resolved schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Namespaces in emission order.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

/// A named grouping of types and routes; one output module per namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub aliases: Vec<Alias>,

    #[serde(default)]
    pub routes: Vec<Route>,

    /// User-defined types in declaration order.
    #[serde(default)]
    pub types: Vec<UserType>,
}

/// A struct or union declared in a namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserType {
    Struct(Struct),
    Union(Union),
}

/// A record type, either plain (fields) or polymorphic (enumerated subtypes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// Present when the struct is polymorphic.
    #[serde(default)]
    pub subtypes: Option<Subtypes>,
}

/// The closed (or catch-all) subtype family of a polymorphic struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtypes {
    /// Accept wire values whose tag names no known subtype.
    #[serde(default)]
    pub catch_all: bool,

    pub members: Vec<Subtype>,
}

/// One member of a subtype family: a wire tag and the struct it selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtype {
    pub tag: String,
    pub namespace: String,
    pub name: String,
}

/// A tagged union. Each field is a variant; a `void` payload makes a unit variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    /// Accept wire values whose tag names no known variant.
    #[serde(default)]
    pub catch_all: bool,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A struct field or union variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    pub data_type: DataType,

    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub default: Option<DefaultValue>,
}

/// A named synonym for another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,

    pub data_type: DataType,

    #[serde(default)]
    pub doc: Option<String>,
}

/// A remote operation declared in a namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    pub arg: DataType,

    pub result: DataType,

    pub error: DataType,

    /// Free-form attributes; `host` and `style` select endpoint and call style.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// Abstract type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataType {
    Int32,
    #[serde(rename = "uint32")]
    UInt32,
    Int64,
    #[serde(rename = "uint64")]
    UInt64,
    Float32,
    Float64,
    Boolean,
    String,
    Timestamp,
    Bytes,
    Void,
    Nullable { inner: Box<DataType> },
    List { item: Box<DataType> },
    Map { key: Box<DataType>, value: Box<DataType> },
    Alias { namespace: String, name: String },
    Struct { namespace: String, name: String },
    Union { namespace: String, name: String },
}

/// Declared default of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    TagRef(TagRef),
}

/// A default that names one variant of a union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRef {
    pub namespace: String,
    pub union: String,
    pub tag: String,
}

impl Api {
    /// Parse a schema document.
    pub fn from_json(source: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a schema document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    pub fn lookup_struct(&self, namespace: &str, name: &str) -> Option<&Struct> {
        self.namespace(namespace)?.struct_named(name)
    }

    pub fn lookup_union(&self, namespace: &str, name: &str) -> Option<&Union> {
        self.namespace(namespace)?.union_named(name)
    }

    pub fn lookup_alias(&self, namespace: &str, name: &str) -> Option<&Alias> {
        self.namespace(namespace)?.alias_named(name)
    }

    /// Follow alias references until a non-alias type is reached.
    ///
    /// Stops at the last resolvable type when an alias is missing or the chain
    /// loops back on itself.
    pub fn unwrap_aliases<'a>(&'a self, data_type: &'a DataType) -> &'a DataType {
        let mut current = data_type;
        for _ in 0..MAX_ALIAS_DEPTH {
            let DataType::Alias { namespace, name } = current else {
                return current;
            };
            match self.lookup_alias(namespace, name) {
                Some(alias) => current = &alias.data_type,
                None => return current,
            }
        }
        current
    }
}

impl Namespace {
    pub fn user_type(&self, name: &str) -> Option<&UserType> {
        self.types.iter().find(|ty| ty.name() == name)
    }

    pub fn struct_named(&self, name: &str) -> Option<&Struct> {
        match self.user_type(name)? {
            UserType::Struct(s) => Some(s),
            UserType::Union(_) => None,
        }
    }

    pub fn union_named(&self, name: &str) -> Option<&Union> {
        match self.user_type(name)? {
            UserType::Union(u) => Some(u),
            UserType::Struct(_) => None,
        }
    }

    pub fn alias_named(&self, name: &str) -> Option<&Alias> {
        self.aliases.iter().find(|alias| alias.name == name)
    }
}

impl UserType {
    pub fn name(&self) -> &str {
        match self {
            UserType::Struct(s) => &s.name,
            UserType::Union(u) => &u.name,
        }
    }
}

impl Struct {
    /// Whether this struct is a subtype family rather than a record.
    pub fn is_polymorphic(&self) -> bool {
        self.subtypes.is_some()
    }

    pub fn is_catch_all(&self) -> bool {
        self.subtypes.as_ref().is_some_and(|s| s.catch_all)
    }

    /// Fields that must be supplied by the caller: neither nullable nor defaulted.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_required())
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_required())
    }

    pub fn has_required_fields(&self) -> bool {
        self.fields.iter().any(Field::is_required)
    }
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            doc: None,
            default: None,
        }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.data_type.is_nullable()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_required(&self) -> bool {
        !self.is_nullable() && !self.has_default()
    }
}

impl Route {
    /// Endpoint host attribute, `api` when absent.
    pub fn host(&self) -> &str {
        self.attrs.get("host").map(String::as_str).unwrap_or("api")
    }

    /// Call style attribute, `rpc` when absent.
    pub fn style(&self) -> &str {
        self.attrs.get("style").map(String::as_str).unwrap_or("rpc")
    }
}

impl DataType {
    pub fn nullable(inner: DataType) -> Self {
        DataType::Nullable {
            inner: Box::new(inner),
        }
    }

    pub fn list(item: DataType) -> Self {
        DataType::List {
            item: Box::new(item),
        }
    }

    pub fn map(key: DataType, value: DataType) -> Self {
        DataType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn alias_ref(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        DataType::Alias {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn struct_ref(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        DataType::Struct {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn union_ref(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        DataType::Union {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, DataType::Nullable { .. })
    }

    pub fn is_void(&self) -> bool {
        matches!(self, DataType::Void)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Int32
                | DataType::UInt32
                | DataType::Int64
                | DataType::UInt64
                | DataType::Float32
                | DataType::Float64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }
}

impl Subtypes {
    pub fn new(members: Vec<Subtype>) -> Self {
        Self {
            catch_all: false,
            members,
        }
    }
}

impl Subtype {
    pub fn new(
        tag: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl DefaultValue {
    /// Whether the value is zero, empty or `false`; an empty string default renders as `String::new()`.
    pub fn is_falsy(&self) -> bool {
        match self {
            DefaultValue::Bool(b) => !b,
            DefaultValue::Integer(i) => *i == 0,
            DefaultValue::Unsigned(u) => *u == 0,
            DefaultValue::Float(f) => *f == 0.0,
            DefaultValue::String(s) => s.is_empty(),
            DefaultValue::TagRef(_) => false,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(b) => write!(f, "{b}"),
            DefaultValue::Integer(i) => write!(f, "{i}"),
            DefaultValue::Unsigned(u) => write!(f, "{u}"),
            DefaultValue::Float(v) => write!(f, "{v:?}"),
            DefaultValue::String(s) => write!(f, "{s:?}"),
            DefaultValue::TagRef(tag) => write!(f, "{}.{}.{}", tag.namespace, tag.union, tag.tag),
        }
    }
}
