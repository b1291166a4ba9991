//! The flag surface: named flags bound to config storage, parsed by clap.
//!
//! A [`FlagSet`] owns the mutable borrows handed out by the walker. Each
//! registered flag writes its default into storage immediately, so the
//! config is usable even if arguments are never parsed. Parsing builds a
//! [`clap::Command`] with one long argument per flag and copies only the
//! values supplied on the command line back into storage.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::BindError;
use crate::slot::Slot;

/// A single registered flag.
#[derive(Debug)]
pub struct Flag<'a> {
    name: String,
    def_value: String,
    slot: Slot<'a>,
}

impl Flag<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved default, after placeholder substitution.
    pub fn def_value(&self) -> &str {
        &self.def_value
    }

    /// The current value held in storage.
    pub fn value(&self) -> String {
        self.slot.render()
    }

    pub fn kind(&self) -> &'static str {
        self.slot.kind()
    }

    fn arg(&self) -> Arg {
        let arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .value_name(self.kind())
            .value_parser(self.slot.value_parser())
            .action(ArgAction::Set);
        let arg = if self.def_value.is_empty() {
            arg
        } else {
            arg.default_value(self.def_value.clone())
        };
        if self.slot.is_signed() {
            return arg.allow_negative_numbers(true);
        }
        if self.slot.is_bool() {
            arg.num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
        } else {
            arg
        }
    }
}

/// Flags bound to the fields of a config value for the lifetime `'a`.
#[derive(Debug)]
pub struct FlagSet<'a> {
    command: Command,
    flags: Vec<Flag<'a>>,
    index: HashMap<String, usize>,
    reserved: HashSet<String>,
}

impl<'a> FlagSet<'a> {
    /// An empty flag set parsed as program `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_command(Command::new(name.into()))
    }

    /// An empty flag set whose parser starts from `command`.
    ///
    /// Arguments already defined on `command` are parsed alongside the
    /// bound flags and can be read from the matches returned by
    /// [`parse`](Self::parse). Their ids and long names are reserved, so a
    /// field encoding to one of them fails to register.
    pub fn with_command(command: Command) -> Self {
        let reserved = command
            .get_arguments()
            .flat_map(|arg| {
                let id = arg.get_id().as_str().to_string();
                std::iter::once(id).chain(arg.get_long().map(str::to_string))
            })
            .collect();
        Self {
            command,
            flags: Vec::new(),
            index: HashMap::new(),
            reserved,
        }
    }

    /// Register `slot` under `name` and store `default` in it.
    ///
    /// Fails if `name` is taken, by an earlier flag or by an argument of the
    /// base command, or if `default` does not parse for the slot's type.
    /// Nothing is recorded on failure.
    pub fn register(
        &mut self,
        name: String,
        default: String,
        mut slot: Slot<'a>,
    ) -> Result<(), BindError> {
        if self.index.contains_key(&name) || self.reserved.contains(&name) {
            return Err(BindError::DuplicateFlag { name });
        }
        if let Err(reason) = slot.assign(&default) {
            return Err(BindError::InvalidDefault {
                name,
                value: default,
                reason,
            });
        }
        tracing::debug!(flag = %name, default = %default, kind = slot.kind(), "bound flag");
        self.index.insert(name.clone(), self.flags.len());
        self.flags.push(Flag {
            name,
            def_value: default,
            slot,
        });
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.index.get(name).map(|&i| &self.flags[i])
    }

    /// Flags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.flags.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(Flag::name)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The clap command that parses these flags.
    ///
    /// Repeated flags take the last value. The built-in `--help` is dropped
    /// when a bound flag is itself named `help`.
    pub fn command(&self) -> Command {
        let command = self
            .command
            .clone()
            .args_override_self(true)
            .disable_help_flag(self.index.contains_key("help"))
            .disable_version_flag(true);
        command.args(self.flags.iter().map(Flag::arg))
    }

    /// Parse `args` (without the program name) and update storage.
    ///
    /// Errors come straight from clap. The matches are returned so callers
    /// can read arguments of a command given to
    /// [`with_command`](Self::with_command).
    pub fn parse<I, T>(&mut self, args: I) -> Result<ArgMatches, BindError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = self.command();
        let program = OsString::from(command.get_name());
        let argv = std::iter::once(program).chain(args.into_iter().map(Into::into));
        let matches = command.try_get_matches_from(argv)?;
        self.apply(&matches);
        Ok(matches)
    }

    /// Store every value that was given on the command line.
    ///
    /// `matches` must come from [`command`](Self::command) or a command that
    /// includes its arguments. Flags absent from the command line keep their
    /// current value. Returns the number of flags updated.
    pub fn apply(&mut self, matches: &ArgMatches) -> usize {
        let mut updated = 0;
        for flag in &mut self.flags {
            if matches.value_source(&flag.name) != Some(ValueSource::CommandLine) {
                continue;
            }
            if flag.slot.apply(matches, &flag.name) {
                tracing::debug!(flag = %flag.name, value = %flag.slot.render(), "flag set from command line");
                updated += 1;
            }
        }
        updated
    }
}
