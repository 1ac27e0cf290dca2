use thiserror::Error;

use crate::model::Kind;

/// A raw token could not be converted into the requested type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{token}' cannot convert to {target}.")]
pub struct ConversionError {
    token: String,
    target: &'static str,
}

impl ConversionError {
    pub(crate) fn new(token: impl Into<String>, target: &'static str) -> Self {
        Self {
            token: token.into(),
            target,
        }
    }

    /// The raw token which failed to convert.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The name of the type the token was converted into.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// A single raw token, tagged with the `Kind` it must convert into.
///
/// The token is validated against its kind whenever it is set, so a `Value` always holds convertible text.
/// The actual conversion is repeated on every read (see [`Value::get`]); nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    kind: Kind,
    raw: String,
}

impl Value {
    /// Create a value, failing if `raw` cannot convert to `kind`.
    ///
    /// ### Example
    /// ```
    /// # use argspec_core as argspec;
    /// use argspec::{Kind, Value};
    ///
    /// let value = Value::new(Kind::Integer, "42").unwrap();
    /// assert_eq!(value.get::<i64>().unwrap(), 42);
    /// assert!(Value::new(Kind::Integer, "forty-two").is_err());
    /// ```
    pub fn new(kind: Kind, raw: impl Into<String>) -> Result<Self, ConversionError> {
        let raw = raw.into();
        validate(kind, &raw)?;
        Ok(Self { kind, raw })
    }

    /// The implicit value bound by a matched presence switch.
    pub(crate) fn truth() -> Self {
        Self {
            kind: Kind::Bool,
            raw: "true".to_string(),
        }
    }

    /// Replace the raw token, applying the same validation as [`Value::new`].
    /// On failure the value is left untouched.
    pub fn assign(&mut self, raw: impl Into<String>) -> Result<&mut Self, ConversionError> {
        let raw = raw.into();
        validate(self.kind, &raw)?;
        self.raw = raw;
        Ok(self)
    }

    /// Convert the raw token into `T`.
    ///
    /// Conversion works from the raw text, so any supported `T` may be requested regardless of the declared kind.
    /// For example, an `Integer` value of `"1"` reads as `true`, `1.0`, or `"1"`.
    pub fn get<T: FromValue>(&self) -> Result<T, ConversionError> {
        T::from_value(self)
    }

    /// The declared kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The raw token.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for Value {
    /// Render by kind: `true`/`false`, a decimal integer, a six-decimal float, or the raw string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The raw token was validated on the way in, so these conversions cannot fail.
        // Fall back to the raw text all the same.
        match self.kind {
            Kind::Bool => match convert_bool(&self.raw) {
                Ok(b) => write!(f, "{b}"),
                Err(_) => write!(f, "{}", self.raw),
            },
            Kind::Integer => match convert_integer(&self.raw) {
                Ok(i) => write!(f, "{i}"),
                Err(_) => write!(f, "{}", self.raw),
            },
            Kind::Float => match convert_float(&self.raw) {
                Ok(x) => write!(f, "{x:.6}"),
                Err(_) => write!(f, "{}", self.raw),
            },
            Kind::String => write!(f, "{}", self.raw),
        }
    }
}

fn validate(kind: Kind, raw: &str) -> Result<(), ConversionError> {
    let valid = match kind {
        Kind::Bool => convert_bool(raw).is_ok(),
        Kind::Integer => convert_integer(raw).is_ok(),
        Kind::Float => convert_float(raw).is_ok(),
        Kind::String => true,
    };

    if valid {
        Ok(())
    } else {
        Err(ConversionError::new(raw, kind.describe()))
    }
}

fn convert_bool(raw: &str) -> Result<bool, ()> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        convert_integer(raw).map(|i| i != 0)
    }
}

fn convert_integer(raw: &str) -> Result<i64, ()> {
    raw.parse::<i64>().map_err(|_| ())
}

fn convert_float(raw: &str) -> Result<f64, ()> {
    raw.parse::<f64>().map_err(|_| ())
}

/// Behaviour to read a concrete type out of a [`Value`].
///
/// This is the full conversion table: `bool`, every signed/unsigned integer width, `f32`/`f64`, and `String`.
/// Types outside the table simply have no implementation.
pub trait FromValue: Sized {
    /// Convert the value's raw token into `Self`.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        convert_bool(value.raw())
            .map_err(|_| ConversionError::new(value.raw(), std::any::type_name::<bool>()))
    }
}

macro_rules! integer_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    convert_integer(value.raw())
                        .ok()
                        .and_then(|i| <$t>::try_from(i).ok())
                        .ok_or_else(|| {
                            ConversionError::new(value.raw(), std::any::type_name::<$t>())
                        })
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        convert_float(value.raw())
            .map_err(|_| ConversionError::new(value.raw(), std::any::type_name::<f64>()))
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        convert_float(value.raw())
            .map(|x| x as f32)
            .map_err(|_| ConversionError::new(value.raw(), std::any::type_name::<f32>()))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.raw().to_string())
    }
}
