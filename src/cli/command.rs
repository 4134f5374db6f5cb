//! Console commands.

use std::path::PathBuf;
use std::str::FromStr;

use crate::models::{Movement, RecordId};
use crate::state::Mode;
use crate::traits::ConfirmPrompt;

pub const HELP: &str = "\
Commands:
  movement <sikap|pukulan>    select the movement
  mode <live|static>          switch view
  select <path>               stage an image for verification
  verify                      verify the staged image
  instant                     verify the current camera frame
  reset                       clear preview and result
  result                      open the result compare modal
  refs upload <path>...       upload reference images
  refs show <id>              open a reference
  refs delete <id>            delete a reference
  history                     reload history
  history show <id>           open a history record
  history delete <id>         delete a history record
  history clear               delete all history
  close                       close the modal
  show                        print the current view
  help                        this text
  quit                        exit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Movement(Movement),
    Mode(Mode),
    Select(PathBuf),
    Verify,
    Instant,
    Reset,
    Result,
    UploadRefs(Vec<PathBuf>),
    ShowRef(RecordId),
    DeleteRef(RecordId),
    ReloadHistory,
    ShowHistory(RecordId),
    DeleteHistory(RecordId),
    ClearHistory,
    Close,
    Show,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Prompt that must be answered before running this command.
    pub fn confirmation(&self) -> Option<ConfirmPrompt> {
        match self {
            ConsoleCommand::DeleteRef(_) => Some(ConfirmPrompt::DeleteReference),
            ConsoleCommand::ClearHistory => Some(ConfirmPrompt::ClearHistory),
            _ => None,
        }
    }
}

fn parse_id(word: &str) -> Result<RecordId, String> {
    word.parse::<i64>()
        .map(RecordId)
        .map_err(|_| format!("invalid id: {}", word))
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head, rest.as_slice()) {
            ("movement", []) => return Err("usage: movement <name>".to_string()),
            ("movement", name) => ConsoleCommand::Movement(
                name.join(" ")
                    .parse::<Movement>()
                    .map_err(|e| e.to_string())?,
            ),
            ("mode", [mode]) => ConsoleCommand::Mode(mode.parse::<Mode>()?),
            ("select", []) => return Err("usage: select <path>".to_string()),
            ("select", path) => ConsoleCommand::Select(PathBuf::from(path.join(" "))),
            ("verify", []) => ConsoleCommand::Verify,
            ("instant", []) => ConsoleCommand::Instant,
            ("reset", []) => ConsoleCommand::Reset,
            ("result", []) => ConsoleCommand::Result,
            ("refs", ["upload", paths @ ..]) => {
                ConsoleCommand::UploadRefs(paths.iter().map(PathBuf::from).collect())
            }
            ("refs", ["show", id]) => ConsoleCommand::ShowRef(parse_id(id)?),
            ("refs", ["delete", id]) => ConsoleCommand::DeleteRef(parse_id(id)?),
            ("history", []) => ConsoleCommand::ReloadHistory,
            ("history", ["show", id]) => ConsoleCommand::ShowHistory(parse_id(id)?),
            ("history", ["delete", id]) => ConsoleCommand::DeleteHistory(parse_id(id)?),
            ("history", ["clear"]) => ConsoleCommand::ClearHistory,
            ("close", []) => ConsoleCommand::Close,
            ("show", []) => ConsoleCommand::Show,
            ("help", _) | ("?", _) => ConsoleCommand::Help,
            ("quit", []) | ("exit", []) | ("q", []) => ConsoleCommand::Quit,
            (head, _) => return Err(format!("unknown command: {} (try `help`)", head)),
        };
        Ok(command)
    }
}
