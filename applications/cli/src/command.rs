//! Text commands understood by the session

use crate::error::CliError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(String),
    Pause,
    Resume,
    Toggle,
    Next,
    Previous,
    Add(String),
    Remove(String),
    Clear,
    /// Queue an album and play its first track
    Album(String),
    Queue,
    Status,
    Snapshot,
    Search(String),
    Catalog,
    Seek(f64),
    Volume(f64),
    Shuffle,
    Repeat,
    Favorite,
    Events,
    Help,
    Quit,
}

pub const HELP: &str = "\
play <id>       play a catalog track
pause | resume  pause or resume playback
toggle          toggle play/pause
next | prev     move through the queue
add <id>        append a track to the queue
remove <id>     remove a track from the queue
clear           empty the queue
album <name>    queue an album and play it
queue           show the queue
status          show the mini player
snapshot        print the playback state as JSON
search <text>   search the catalog
catalog         list the catalog
seek <0..1>     move the seek bar
volume <0..1>   set the volume slider
shuffle | repeat | favorite   toggle player buttons
events          print pending playback events
help            show this help
quit            exit";

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "play" => Command::Play(required(verb, rest)?),
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "toggle" => Command::Toggle,
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "add" => Command::Add(required(verb, rest)?),
            "remove" | "rm" => Command::Remove(required(verb, rest)?),
            "clear" => Command::Clear,
            "album" => Command::Album(required(verb, rest)?),
            "queue" => Command::Queue,
            "status" => Command::Status,
            "snapshot" => Command::Snapshot,
            "search" => Command::Search(required(verb, rest)?),
            "catalog" => Command::Catalog,
            "seek" => Command::Seek(fraction(verb, rest)?),
            "volume" => Command::Volume(fraction(verb, rest)?),
            "shuffle" => Command::Shuffle,
            "repeat" => Command::Repeat,
            "favorite" => Command::Favorite,
            "events" => Command::Events,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(CliError::Parse("empty command".to_string())),
            other => return Err(CliError::Parse(format!("unknown command '{}'", other))),
        };

        Ok(command)
    }
}

fn required(verb: &str, rest: &str) -> Result<String, CliError> {
    if rest.is_empty() {
        Err(CliError::Parse(format!("'{}' needs an argument", verb)))
    } else {
        Ok(rest.to_string())
    }
}

fn fraction(verb: &str, rest: &str) -> Result<f64, CliError> {
    let value = required(verb, rest)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::Parse(format!("'{}' expects a number, got '{}'", verb, value)))
}
