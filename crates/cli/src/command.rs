//! Commands accepted at the interactive prompt.

use core::str::FromStr;

use anyhow::bail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Set the search term; an empty term clears it.
    Search(String),
    Add,
    Edit(String),
    Delete(String),
    Stats,
    Categories,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                 show items matching the current search
  search [TERM]        filter by name, location or category (no TERM clears)
  add                  add a new item
  edit <ID>            edit an item (the short id from the list is enough)
  delete <ID>          delete an item after confirmation
  stats                show totals for the whole inventory
  categories           show the categories in use
  help                 show this message
  quit                 leave (nothing is saved)";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest.to_string()),
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(required_id(verb, rest)?),
            "delete" | "rm" => Command::Delete(required_id(verb, rest)?),
            "stats" => Command::Stats,
            "categories" | "cats" => Command::Categories,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command {other:?} (type `help` for a list)"),
        };
        Ok(command)
    }
}

fn required_id(verb: &str, rest: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        bail!("`{verb}` needs an item id");
    }
    Ok(rest.to_string())
}
