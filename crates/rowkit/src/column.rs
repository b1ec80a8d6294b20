use crate::{Result, Value};

/// A native field type that converts to and from a [`Value`].
///
/// Generated `values()` reads through `to_value`; generated `pointers()`
/// hands out `&mut dyn Column` so readers can write through `set_value`.
pub trait Column {
    fn to_value(&self) -> Value;

    fn set_value(&mut self, value: Value) -> Result<()>;
}

fn mismatch(expected: &str, value: &Value) -> anyhow::Error {
    anyhow::anyhow!("cannot load {:?} value into `{expected}`", value.ty())
}

impl Column for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Text(value) => {
                *self = value;
                Ok(())
            }
            value => Err(mismatch("String", &value)),
        }
    }
}

impl Column for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Blob(value) => {
                *self = value;
                Ok(())
            }
            value => Err(mismatch("Vec<u8>", &value)),
        }
    }
}

impl Column for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    /// Also accepts `0` and `1`, the usual integer encoding of booleans.
    fn set_value(&mut self, value: Value) -> Result<()> {
        *self = match value {
            Value::Bool(value) => value,
            Value::Int64(0) => false,
            Value::Int64(1) => true,
            value => return Err(mismatch("bool", &value)),
        };
        Ok(())
    }
}

// Integers are stored as `i64`. Narrower types are range checked on the way
// in.
macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl Column for $ty {
                fn to_value(&self) -> Value {
                    Value::Int64(i64::from(*self))
                }

                fn set_value(&mut self, value: Value) -> Result<()> {
                    match value {
                        Value::Int64(value) => {
                            *self = <$ty>::try_from(value).map_err(|_| {
                                anyhow::anyhow!(
                                    "{value} is out of range for `{}`",
                                    stringify!($ty)
                                )
                            })?;
                            Ok(())
                        }
                        value => Err(mismatch(stringify!($ty), &value)),
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

// Pointer-sized and 64-bit unsigned integers share the `i64` bit pattern, so
// `u64::MAX` is stored as `-1` and reads back unchanged.
macro_rules! impl_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl Column for $ty {
                fn to_value(&self) -> Value {
                    Value::Int64(*self as i64)
                }

                fn set_value(&mut self, value: Value) -> Result<()> {
                    match value {
                        Value::Int64(value) => {
                            let bits = if <$ty>::MIN == 0 {
                                value as u64 as i128
                            } else {
                                value as i128
                            };
                            *self = <$ty>::try_from(bits).map_err(|_| {
                                anyhow::anyhow!(
                                    "{value} is out of range for `{}`",
                                    stringify!($ty)
                                )
                            })?;
                            Ok(())
                        }
                        value => Err(mismatch(stringify!($ty), &value)),
                    }
                }
            }
        )*
    };
}

impl_wide_integer!(isize, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Column for $ty {
                fn to_value(&self) -> Value {
                    Value::Float64(*self as f64)
                }

                fn set_value(&mut self, value: Value) -> Result<()> {
                    match value {
                        Value::Float64(value) => {
                            *self = value as $ty;
                            Ok(())
                        }
                        value => Err(mismatch(stringify!($ty), &value)),
                    }
                }
            }
        )*
    };
}

impl_float!(f32, f64);
