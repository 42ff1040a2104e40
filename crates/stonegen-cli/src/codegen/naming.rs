//! Identifier conventions for generated Rust code.
//!
//! Schema names are converted to PascalCase (types, variants, aliases) or
//! snake_case (fields, routes, namespaces). A converted name that collides with
//! a Rust keyword or a prelude item gets a suffix chosen by its category.
//!
//! | Category | Case | Collision suffix | Example |
//! |----------|------|------------------|---------|
//! | [`IdentKind::Struct`] | PascalCase | `Struct` | `Box` → `BoxStruct` |
//! | [`IdentKind::Union`] | PascalCase | `Union` | `Result` → `ResultUnion` |
//! | [`IdentKind::Variant`] | PascalCase | `Variant` | `Some` → `SomeVariant` |
//! | [`IdentKind::Alias`] | PascalCase | `Alias` | `String` → `StringAlias` |
//! | [`IdentKind::Field`] | snake_case | `_field` | `type` → `type_field` |
//! | [`IdentKind::Route`] | snake_case | `_route` | `move` → `move_route` |
//! | [`IdentKind::Namespace`] | snake_case | `_namespace` | `self` → `self_namespace` |
//!
//! None of the suffixes is itself reserved, so one check is enough and the
//! conversion is idempotent. A name with no usable characters becomes the
//! suffix alone, minus any leading underscore.

/// Keywords plus prelude names a generated item must not shadow.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "alignof", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "offsetof", "override",
    "priv", "proc", "pub", "pure", "ref", "return", "Self", "self", "sizeof", "static", "struct",
    "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
    // prelude
    "Copy", "Send", "Sized", "Sync", "Drop", "Fn", "FnMut", "FnOnce", "drop", "Box", "ToOwned",
    "Clone", "PartialEq", "PartialOrd", "Eq", "Ord", "AsRef", "AsMut", "Into", "From", "Default",
    "Iterator", "Extend", "IntoIterator", "DoubleEndedIterator", "ExactSizeIterator", "Option",
    "Some", "None", "Result", "Ok", "Err", "SliceConcatExt", "String", "ToString", "Vec",
];

/// The category of a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Struct,
    Union,
    Variant,
    Alias,
    Field,
    Route,
    Namespace,
}

impl IdentKind {
    pub const ALL: [IdentKind; 7] = [
        IdentKind::Struct,
        IdentKind::Union,
        IdentKind::Variant,
        IdentKind::Alias,
        IdentKind::Field,
        IdentKind::Route,
        IdentKind::Namespace,
    ];

    /// Suffix appended when the converted name is reserved.
    pub fn suffix(self) -> &'static str {
        match self {
            IdentKind::Struct => "Struct",
            IdentKind::Union => "Union",
            IdentKind::Variant => "Variant",
            IdentKind::Alias => "Alias",
            IdentKind::Field => "_field",
            IdentKind::Route => "_route",
            IdentKind::Namespace => "_namespace",
        }
    }

    fn is_pascal(self) -> bool {
        matches!(
            self,
            IdentKind::Struct | IdentKind::Union | IdentKind::Variant | IdentKind::Alias
        )
    }
}

/// Convert a schema name into a Rust identifier of the given category.
///
/// # Examples
///
/// ```
/// use stonegen_cli::codegen::naming::{IdentKind, identifier};
///
/// assert_eq!(identifier("list_folder", IdentKind::Route), "list_folder");
/// assert_eq!(identifier("file_metadata", IdentKind::Struct), "FileMetadata");
/// assert_eq!(identifier("type", IdentKind::Field), "type_field");
/// assert_eq!(identifier("Option", IdentKind::Union), "OptionUnion");
/// ```
pub fn identifier(raw: &str, kind: IdentKind) -> String {
    let mut name = if kind.is_pascal() {
        to_pascal_case(raw)
    } else {
        to_snake_case(raw)
    };

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    if name.is_empty() {
        name.push_str(kind.suffix().trim_start_matches('_'));
    } else if is_reserved(&name) {
        name.push_str(kind.suffix());
    }

    name
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Split a name into words at separators and case boundaries.
///
/// Any non-alphanumeric character separates words. Inside a run of letters a
/// new word starts at a lower-to-upper transition, after a digit, and at the
/// last capital of an acronym followed by lowercase (`HTTPError` → `HTTP`, `Error`).
///
/// # Examples
///
/// ```
/// use stonegen_cli::codegen::naming::split_words;
///
/// assert_eq!(split_words("getHTTPResponse"), vec!["get", "HTTP", "Response"]);
/// assert_eq!(split_words("list-folder/v2"), vec!["list", "folder", "v2"]);
/// ```
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();

    for chunk in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        if chars.is_empty() {
            continue;
        }

        let mut start = 0;
        for i in 1..chars.len() {
            let (prev, cur) = (chars[i - 1], chars[i]);
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let boundary = cur.is_ascii_uppercase()
                && (prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower));
            if boundary {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        words.push(chars[start..].iter().collect());
    }

    words
}

/// Convert a name to PascalCase.
///
/// # Examples
///
/// ```
/// use stonegen_cli::codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("HelloWorld"), "HelloWorld");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|word| capitalize(word)).collect()
}

/// Convert a name to snake_case.
///
/// # Examples
///
/// ```
/// use stonegen_cli::codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("ListFolder"), "list_folder");
/// assert_eq!(to_snake_case("get_metadata"), "get_metadata");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use stonegen_cli::codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
