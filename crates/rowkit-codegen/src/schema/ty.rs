use quote::ToTokens;

/// Abstract storage type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    Text,
    Int64,
    Float64,
    Bool,
    Blob,
}

impl StorageType {
    pub fn is_numeric(self) -> bool {
        matches!(self, StorageType::Int64 | StorageType::Float64)
    }

    /// Lower-case name used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            StorageType::Text => "text",
            StorageType::Int64 => "int64",
            StorageType::Float64 => "float64",
            StorageType::Bool => "bool",
            StorageType::Blob => "blob",
        }
    }

    /// Variant name of `rowkit::FieldType`
    pub(crate) fn variant(self) -> &'static str {
        match self {
            StorageType::Text => "Text",
            StorageType::Int64 => "Int64",
            StorageType::Float64 => "Float64",
            StorageType::Bool => "Bool",
            StorageType::Blob => "Blob",
        }
    }
}

// 128-bit integers do not fit the 64-bit storage column and are unsupported.
const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

const FLOATS: &[&str] = &["f32", "f64"];

const DATE_TIME: &[&str] = &[
    "SystemTime",
    "Instant",
    "DateTime",
    "NaiveDate",
    "NaiveDateTime",
    "NaiveTime",
    "OffsetDateTime",
    "PrimitiveDateTime",
    "Timestamp",
    "Zoned",
];

/// What a field's native type means for mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NativeType {
    /// Maps to a storage type
    Storage(StorageType),

    /// `Vec<Record>`; carries the element type name
    Collection(String),

    /// A date/time type, always rejected
    DateTime,

    /// Anything else
    Unsupported,
}

impl NativeType {
    pub(crate) fn classify(ty: &syn::Type) -> NativeType {
        let Some(segment) = last_segment(ty) else {
            return NativeType::Unsupported;
        };
        let name = segment.ident.to_string();

        if DATE_TIME.contains(&name.as_str()) {
            return NativeType::DateTime;
        }

        match &segment.arguments {
            syn::PathArguments::None => match scalar(&name) {
                Some(storage) => NativeType::Storage(storage),
                None => NativeType::Unsupported,
            },
            syn::PathArguments::AngleBracketed(args) if name == "Vec" && args.args.len() == 1 => {
                let Some(syn::GenericArgument::Type(elem)) = args.args.first() else {
                    return NativeType::Unsupported;
                };

                match element_name(elem) {
                    Some(elem) if elem == "u8" => NativeType::Storage(StorageType::Blob),
                    Some(elem) if scalar(&elem).is_none() && !DATE_TIME.contains(&elem.as_str()) => {
                        NativeType::Collection(elem)
                    }
                    _ => NativeType::Unsupported,
                }
            }
            _ => NativeType::Unsupported,
        }
    }
}

/// Compact textual form of a type, e.g. `Vec<u8>`.
pub(crate) fn native_name(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn scalar(name: &str) -> Option<StorageType> {
    if name == "String" {
        Some(StorageType::Text)
    } else if name == "bool" {
        Some(StorageType::Bool)
    } else if INTEGERS.contains(&name) {
        Some(StorageType::Int64)
    } else if FLOATS.contains(&name) {
        Some(StorageType::Float64)
    } else {
        None
    }
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        syn::Type::Group(group) => last_segment(&group.elem),
        syn::Type::Paren(paren) => last_segment(&paren.elem),
        _ => None,
    }
}

/// Name of a collection element: a plain path with no generic arguments.
fn element_name(ty: &syn::Type) -> Option<String> {
    let segment = last_segment(ty)?;
    match segment.arguments {
        syn::PathArguments::None => Some(segment.ident.to_string()),
        _ => None,
    }
}
