//! Typed storage for leaf fields.
//!
//! Every bindable leaf type has a [`Slot`] variant holding a mutable borrow
//! of the caller's field. The flag set writes defaults and parsed values
//! through it.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::ArgMatches;
use clap::builder::ValueParser;

/// Mutable borrow of one leaf field, tagged by its type.
#[derive(Debug)]
pub enum Slot<'a> {
    Bool(&'a mut bool),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Duration(&'a mut Duration),
    String(&'a mut String),
    Path(&'a mut PathBuf),
}

impl Slot<'_> {
    /// Short type label, used as the value name in help output.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::I32(_) => "int32",
            Slot::I64(_) => "int64",
            Slot::Isize(_) => "int",
            Slot::U32(_) => "uint32",
            Slot::U64(_) => "uint64",
            Slot::Usize(_) => "uint",
            Slot::F32(_) => "float32",
            Slot::F64(_) => "float64",
            Slot::Duration(_) => "duration",
            Slot::String(_) => "string",
            Slot::Path(_) => "path",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Slot::Bool(_))
    }

    /// Whether a value may start with `-`.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Slot::I32(_) | Slot::I64(_) | Slot::Isize(_) | Slot::F32(_) | Slot::F64(_)
        )
    }

    /// Parse `raw` and store it. The empty string stores the zero value.
    pub fn assign(&mut self, raw: &str) -> Result<(), String> {
        match self {
            Slot::Bool(v) => **v = parse_or_zero(raw)?,
            Slot::I32(v) => **v = parse_or_zero(raw)?,
            Slot::I64(v) => **v = parse_or_zero(raw)?,
            Slot::Isize(v) => **v = parse_or_zero(raw)?,
            Slot::U32(v) => **v = parse_or_zero(raw)?,
            Slot::U64(v) => **v = parse_or_zero(raw)?,
            Slot::Usize(v) => **v = parse_or_zero(raw)?,
            Slot::F32(v) => **v = parse_or_zero(raw)?,
            Slot::F64(v) => **v = parse_or_zero(raw)?,
            Slot::Duration(v) => {
                **v = if raw.is_empty() {
                    Duration::ZERO
                } else {
                    parse_duration(raw).map_err(|e| e.to_string())?
                }
            }
            Slot::String(v) => **v = raw.to_string(),
            Slot::Path(v) => **v = PathBuf::from(raw),
        }
        Ok(())
    }

    /// Current value as text.
    pub fn render(&self) -> String {
        match self {
            Slot::Bool(v) => v.to_string(),
            Slot::I32(v) => v.to_string(),
            Slot::I64(v) => v.to_string(),
            Slot::Isize(v) => v.to_string(),
            Slot::U32(v) => v.to_string(),
            Slot::U64(v) => v.to_string(),
            Slot::Usize(v) => v.to_string(),
            Slot::F32(v) => v.to_string(),
            Slot::F64(v) => v.to_string(),
            Slot::Duration(v) => humantime::format_duration(**v).to_string(),
            Slot::String(v) => v.to_string(),
            Slot::Path(v) => v.display().to_string(),
        }
    }

    /// The clap parser that validates command-line input for this slot.
    pub fn value_parser(&self) -> ValueParser {
        match self {
            Slot::Bool(_) => clap::value_parser!(bool).into(),
            Slot::I32(_) => clap::value_parser!(i32).into(),
            Slot::I64(_) => clap::value_parser!(i64).into(),
            Slot::Isize(_) => clap::value_parser!(isize).into(),
            Slot::U32(_) => clap::value_parser!(u32).into(),
            Slot::U64(_) => clap::value_parser!(u64).into(),
            Slot::Usize(_) => clap::value_parser!(usize).into(),
            Slot::F32(_) => clap::value_parser!(f32).into(),
            Slot::F64(_) => clap::value_parser!(f64).into(),
            Slot::Duration(_) => ValueParser::new(parse_duration),
            Slot::String(_) => clap::value_parser!(String).into(),
            Slot::Path(_) => clap::value_parser!(PathBuf).into(),
        }
    }

    /// Copy the parsed value for `id` out of `matches`, if there is one.
    ///
    /// `matches` must come from a command whose arg `id` was built with
    /// [`value_parser`](Self::value_parser) of this slot.
    pub fn apply(&mut self, matches: &ArgMatches, id: &str) -> bool {
        match self {
            Slot::Bool(v) => copy_from(matches, id, *v),
            Slot::I32(v) => copy_from(matches, id, *v),
            Slot::I64(v) => copy_from(matches, id, *v),
            Slot::Isize(v) => copy_from(matches, id, *v),
            Slot::U32(v) => copy_from(matches, id, *v),
            Slot::U64(v) => copy_from(matches, id, *v),
            Slot::Usize(v) => copy_from(matches, id, *v),
            Slot::F32(v) => copy_from(matches, id, *v),
            Slot::F64(v) => copy_from(matches, id, *v),
            Slot::Duration(v) => copy_from(matches, id, *v),
            Slot::String(v) => copy_from(matches, id, *v),
            Slot::Path(v) => copy_from(matches, id, *v),
        }
    }
}

fn parse_or_zero<T>(raw: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: Display,
{
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(|e: T::Err| e.to_string())
}

fn copy_from<T>(matches: &ArgMatches, id: &str, dest: &mut T) -> bool
where
    T: Clone + Send + Sync + 'static,
{
    match matches.get_one::<T>(id) {
        Some(value) => {
            *dest = value.clone();
            true
        }
        None => false,
    }
}

/// Parse a duration such as `1h`, `90s` or `1h 30m`. A bare `0` is zero.
pub fn parse_duration(raw: &str) -> Result<Duration, humantime::DurationError> {
    if raw.trim() == "0" {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(raw)
}
