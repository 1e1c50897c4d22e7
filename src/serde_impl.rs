//! String-form serde support, enabled by the `serde` feature.
//!
//! Every path serializes as its canonical string. Deserialization parses that string again, so
//! the variant and the dialect rules are checked on the way in. A [`TypedPath`] is written as an
//! externally tagged enum, `{"windows": "/foo"}`, so its dialect survives the round trip even
//! when the text alone would be ambiguous. [`Platform`] serializes as its label.

use crate::{AbsolutePath, Dialect, Path, Platform, RelativePath, TypedPath};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

macro_rules! impl_serde_for_path {
    ($ty:ident) => {
        impl<D: Dialect> Serialize for $ty<D> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de, D: Dialect> Deserialize<'de> for $ty<D> {
            fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
            where
                De: Deserializer<'de>,
            {
                deserializer.deserialize_str(PathVisitor::<$ty<D>>(PhantomData))
            }
        }
    };
}

impl_serde_for_path!(Path);
impl_serde_for_path!(AbsolutePath);
impl_serde_for_path!(RelativePath);

const PLATFORMS: &[&str] = &["unix", "windows"];

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unix => serializer.serialize_unit_variant("Platform", 0, "unix"),
            Self::Windows => serializer.serialize_unit_variant("Platform", 1, "windows"),
        }
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_identifier(PlatformVisitor)
    }
}

struct PlatformVisitor;

impl<'de> de::Visitor<'de> for PlatformVisitor {
    type Value = Platform;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`unix` or `windows`")
    }

    fn visit_str<E>(self, label: &str) -> std::result::Result<Platform, E>
    where
        E: de::Error,
    {
        match label {
            "unix" => Ok(Platform::Unix),
            "windows" => Ok(Platform::Windows),
            _ => Err(E::unknown_variant(label, PLATFORMS)),
        }
    }

    fn visit_u64<E>(self, index: u64) -> std::result::Result<Platform, E>
    where
        E: de::Error,
    {
        match index {
            0 => Ok(Platform::Unix),
            1 => Ok(Platform::Windows),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(index), &self)),
        }
    }
}

impl Serialize for TypedPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unix(path) => serializer.serialize_newtype_variant("TypedPath", 0, "unix", path),
            Self::Windows(path) => {
                serializer.serialize_newtype_variant("TypedPath", 1, "windows", path)
            }
        }
    }
}

impl<'de> Deserialize<'de> for TypedPath {
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_enum("TypedPath", PLATFORMS, TypedPathVisitor)
    }
}

/// Reads the platform tag, then parses the path text with that platform's dialect
struct TypedPathVisitor;

impl<'de> de::Visitor<'de> for TypedPathVisitor {
    type Value = TypedPath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path string tagged with `unix` or `windows`")
    }

    fn visit_enum<A>(self, data: A) -> std::result::Result<TypedPath, A::Error>
    where
        A: de::EnumAccess<'de>,
    {
        let (platform, variant) = data.variant::<Platform>()?;
        let text: String = de::VariantAccess::newtype_variant(variant)?;
        TypedPath::parse(platform, &text).map_err(de::Error::custom)
    }
}

/// Parses any path type from a string
struct PathVisitor<T>(PhantomData<T>);

trait ParseFromStr: Sized {
    fn parse_from_str(text: &str) -> crate::Result<Self>;
}

impl<D: Dialect> ParseFromStr for Path<D> {
    fn parse_from_str(text: &str) -> crate::Result<Self> {
        Self::parse(text)
    }
}

impl<D: Dialect> ParseFromStr for AbsolutePath<D> {
    fn parse_from_str(text: &str) -> crate::Result<Self> {
        Self::parse(text)
    }
}

impl<D: Dialect> ParseFromStr for RelativePath<D> {
    fn parse_from_str(text: &str) -> crate::Result<Self> {
        Self::parse(text)
    }
}

impl<'de, T: ParseFromStr> de::Visitor<'de> for PathVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path string")
    }

    fn visit_str<E>(self, text: &str) -> std::result::Result<T, E>
    where
        E: de::Error,
    {
        T::parse_from_str(text).map_err(E::custom)
    }
}
