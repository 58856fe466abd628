// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved option values and their static type tags.
//!
//! This module provides the `OptionValue` type, the typed output of applying a
//! conversion strategy to a raw property, and `ValueType`, the static type tag
//! a strategy declares for its output. Values are transient artifacts: they are
//! recomputed on each resolution call and own nothing beyond their own data.

use crate::domain::errors::{ConfigError, Result};
use serde::Serialize;
use std::fmt;
use url::Url;

/// The static type of a resolved value, as declared by its conversion strategy.
///
/// External binding layers consume this tag to decide what a provider will
/// yield without invoking it.
///
/// # Examples
///
/// ```
/// use optcfg::domain::ValueType;
///
/// assert_eq!(ValueType::Boolean.to_string(), "boolean");
/// assert_eq!(ValueType::Custom("upper-case").to_string(), "upper-case");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    /// A plain string value.
    String,
    /// An ordered sequence of strings.
    StringList,
    /// A 32-bit signed integer.
    Integer,
    /// A boolean value.
    Boolean,
    /// A parsed URL.
    Url,
    /// A 64-bit signed integer.
    Long,
    /// A caller-declared type produced by a custom converter.
    Custom(&'static str),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ValueType::String => "string",
            ValueType::StringList => "string-list",
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
            ValueType::Url => "url",
            ValueType::Long => "long",
            ValueType::Custom(tag) => tag,
        };
        write!(f, "{}", tag)
    }
}

/// The typed output of resolving one option declaration.
///
/// An `OptionValue` carries the converted form of a raw property string. The
/// accessors return the payload when the variant matches and a descriptive
/// [`ConfigError::WrongType`] otherwise, so callers that know their option's
/// kind can unwrap with `?` instead of matching.
///
/// # Examples
///
/// ```
/// use optcfg::domain::OptionValue;
///
/// let value = OptionValue::Str("V1,V2".to_string());
/// assert_eq!(value.as_str().unwrap(), "V1,V2");
/// assert!(value.as_bool().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OptionValue {
    /// A string value.
    Str(String),
    /// An ordered sequence of strings.
    StrList(Vec<String>),
    /// A 32-bit signed integer.
    Int(i32),
    /// A boolean value.
    Bool(bool),
    /// A parsed URL.
    Url(Url),
    /// A 64-bit signed integer.
    Long(i64),
}

impl OptionValue {
    /// Returns the variant's kind tag, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Str(_) => "string",
            OptionValue::StrList(_) => "string-list",
            OptionValue::Int(_) => "integer",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Url(_) => "url",
            OptionValue::Long(_) => "long",
        }
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::domain::OptionValue;
    ///
    /// let value = OptionValue::Str("hello".to_string());
    /// assert_eq!(value.as_str().unwrap(), "hello");
    /// ```
    pub fn as_str(&self) -> Result<&str> {
        match self {
            OptionValue::Str(s) => Ok(s),
            other => Err(other.wrong_type("string")),
        }
    }

    /// Consumes the value, returning the owned string.
    pub fn into_string(self) -> Result<String> {
        match self {
            OptionValue::Str(s) => Ok(s),
            other => Err(other.wrong_type("string")),
        }
    }

    /// Returns the value as an ordered slice of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::domain::OptionValue;
    ///
    /// let value = OptionValue::StrList(vec!["V1".to_string(), "V2".to_string()]);
    /// assert_eq!(value.as_str_list().unwrap(), ["V1", "V2"]);
    /// ```
    pub fn as_str_list(&self) -> Result<&[String]> {
        match self {
            OptionValue::StrList(items) => Ok(items),
            other => Err(other.wrong_type("string-list")),
        }
    }

    /// Returns the value as a 32-bit signed integer.
    pub fn as_int(&self) -> Result<i32> {
        match self {
            OptionValue::Int(n) => Ok(*n),
            other => Err(other.wrong_type("integer")),
        }
    }

    /// Returns the value as a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::domain::OptionValue;
    ///
    /// let value = OptionValue::Bool(true);
    /// assert!(value.as_bool().unwrap());
    /// ```
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            OptionValue::Bool(b) => Ok(*b),
            other => Err(other.wrong_type("boolean")),
        }
    }

    /// Returns the value as a parsed URL.
    pub fn as_url(&self) -> Result<&Url> {
        match self {
            OptionValue::Url(url) => Ok(url),
            other => Err(other.wrong_type("url")),
        }
    }

    /// Returns the value as a 64-bit signed integer.
    pub fn as_long(&self) -> Result<i64> {
        match self {
            OptionValue::Long(n) => Ok(*n),
            other => Err(other.wrong_type("long")),
        }
    }

    fn wrong_type(&self, expected: &'static str) -> ConfigError {
        ConfigError::WrongType {
            expected,
            actual: self.kind(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::StrList(items) => write!(f, "{}", items.join(",")),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Url(url) => write!(f, "{}", url),
            OptionValue::Long(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        let value = OptionValue::Str("test".to_string());
        assert_eq!(value.as_str().unwrap(), "test");
    }

    #[test]
    fn test_into_string() {
        let value = OptionValue::Str("test".to_string());
        assert_eq!(value.into_string().unwrap(), "test");
    }

    #[test]
    fn test_as_str_list() {
        let value = OptionValue::StrList(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.as_str_list().unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_as_int() {
        let value = OptionValue::Int(42);
        assert_eq!(value.as_int().unwrap(), 42);
    }

    #[test]
    fn test_as_bool() {
        assert!(OptionValue::Bool(true).as_bool().unwrap());
        assert!(!OptionValue::Bool(false).as_bool().unwrap());
    }

    #[test]
    fn test_as_url() {
        let url = Url::parse("http://www.gimp.org").unwrap();
        let value = OptionValue::Url(url.clone());
        assert_eq!(value.as_url().unwrap(), &url);
    }

    #[test]
    fn test_as_long() {
        let value = OptionValue::Long(1001);
        assert_eq!(value.as_long().unwrap(), 1001);
    }

    #[test]
    fn test_wrong_type_accessor() {
        let value = OptionValue::Str("true".to_string());
        let err = value.as_bool().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WrongType {
                expected: "boolean",
                actual: "string"
            }
        ));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(OptionValue::Str(String::new()).kind(), "string");
        assert_eq!(OptionValue::StrList(vec![]).kind(), "string-list");
        assert_eq!(OptionValue::Int(0).kind(), "integer");
        assert_eq!(OptionValue::Bool(false).kind(), "boolean");
        assert_eq!(OptionValue::Long(0).kind(), "long");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", OptionValue::StrList(vec!["V1".into(), "V2".into()])),
            "V1,V2"
        );
        assert_eq!(format!("{}", OptionValue::Int(-1)), "-1");
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::String.to_string(), "string");
        assert_eq!(ValueType::StringList.to_string(), "string-list");
        assert_eq!(ValueType::Integer.to_string(), "integer");
        assert_eq!(ValueType::Url.to_string(), "url");
        assert_eq!(ValueType::Long.to_string(), "long");
        assert_eq!(ValueType::Custom("widget").to_string(), "widget");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            OptionValue::Str("x".to_string()),
            OptionValue::Str("x".to_string())
        );
        assert_ne!(OptionValue::Int(1), OptionValue::Long(1));
    }
}
