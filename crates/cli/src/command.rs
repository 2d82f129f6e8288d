// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of the line-oriented command language.

use registro_domain::{DomainError, Field, Lugar, Tipo};
use std::str::FromStr;
use thiserror::Error;

/// Text printed by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  set <field> <value>   Set dni, nombres, cantidad or descripcion
  tipo <Cerveza|Agua>   Select the beverage
  lugar <Casa|Afuera>   Select the place
  show                  Show the form
  submit                Save the form
  records               Open the records list
  home                  Return to the form
  back                  Go to the previous screen
  delete <id>           Ask to delete a record
  yes | no              Answer the delete prompt
  export                Print the records as JSON
  help                  Show this text
  quit                  Exit";

/// One user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Tipo(Tipo),
    Lugar(Lugar),
    Show,
    Submit,
    Records,
    Home,
    Back,
    Delete(u64),
    Yes,
    No,
    Export,
    Help,
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line was blank.
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid record id '{0}'")]
    InvalidId(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line: &str = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        let (verb, rest): (&str, &str) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim_start()));

        match verb.to_ascii_lowercase().as_str() {
            "set" => parse_set(rest),
            "tipo" => Ok(Self::Tipo(required(rest, "tipo", "Cerveza or Agua")?.parse()?)),
            "lugar" => Ok(Self::Lugar(required(rest, "lugar", "Casa or Afuera")?.parse()?)),
            "show" => Ok(Self::Show),
            "submit" | "save" => Ok(Self::Submit),
            "records" | "registros" => Ok(Self::Records),
            "home" => Ok(Self::Home),
            "back" => Ok(Self::Back),
            "delete" => {
                let id: &str = required(rest, "delete", "a record id")?;
                id.parse::<u64>()
                    .map(Self::Delete)
                    .map_err(|_| CommandError::InvalidId(id.to_string()))
            }
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "export" => Ok(Self::Export),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

/// Parses `<field> <value...>`. A missing value clears the field.
fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let rest: &str = required(rest, "set", "a field name")?;
    let (name, value): (&str, &str) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, value)| (name, value.trim_start()));
    let field: Field = name.parse()?;
    Ok(Command::Set {
        field,
        value: value.to_string(),
    })
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    let rest: &str = rest.trim();
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}
