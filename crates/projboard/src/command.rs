use std::str::FromStr;

use projboard_runtime::ItemId;

use crate::error::BoardError;
use crate::model::ProjectStatus;

pub const HELP: &str = "\
commands:
  add <title> | <description> | <manday>   add an active project
  finish <id>                              move a project to Finished
  activate <id>                            move a project back to Active
  move <id> <active|finished>              move a project to a status
  list                                     redraw the board
  help                                     show this help
  quit                                     leave";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        manday: String,
    },
    Move {
        id: ItemId,
        status: ProjectStatus,
    },
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = BoardError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest),
            "finish" | "done" => Ok(Command::Move {
                id: parse_id(rest)?,
                status: ProjectStatus::Finished,
            }),
            "activate" => Ok(Command::Move {
                id: parse_id(rest)?,
                status: ProjectStatus::Active,
            }),
            "move" => {
                let (id, status) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| BoardError::invalid("usage: move <id> <active|finished>"))?;
                Ok(Command::Move {
                    id: parse_id(id)?,
                    status: status.parse()?,
                })
            }
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(BoardError::invalid("empty command")),
            other => Err(BoardError::invalid(format!(
                "unknown command `{other}` (try `help`)"
            ))),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, BoardError> {
    let mut fields = rest.splitn(3, '|').map(str::trim);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(title), Some(description), Some(manday)) => Ok(Command::Add {
            title: title.to_string(),
            description: description.to_string(),
            manday: manday.to_string(),
        }),
        _ => Err(BoardError::invalid(
            "usage: add <title> | <description> | <manday>",
        )),
    }
}

fn parse_id(raw: &str) -> Result<ItemId, BoardError> {
    raw.parse()
        .map_err(|_| BoardError::invalid(format!("`{raw}` is not a project id")))
}
