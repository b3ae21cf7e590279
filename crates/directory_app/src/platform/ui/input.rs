use directory_core::Msg;

pub const HELP: &str = "\
Commands:
  search <text>   filter by name, address, city, state or zip (empty clears)
  state [name]    filter by state (no name = all states)
  city [name]     filter by city (no name = all cities)
  clear           reset search, state and city
  page <n>        jump to page n
  next | prev     move one page
  reload          fetch the directory again
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Reload,
    Help,
    Quit,
    Unknown(String),
}

/// One input line to a command. The argument is the rest of the line.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Msg::NoOp),
        "search" | "s" | "/" => Command::Dispatch(Msg::QueryChanged(rest.to_string())),
        "state" => Command::Dispatch(Msg::StateSelected(rest.to_string())),
        "city" => Command::Dispatch(Msg::CitySelected(rest.to_string())),
        "clear" => Command::Dispatch(Msg::FiltersCleared),
        "next" | "n" => Command::Dispatch(Msg::NextPage),
        "prev" | "p" => Command::Dispatch(Msg::PrevPage),
        "page" => match rest.parse::<usize>() {
            Ok(page) => Command::Dispatch(Msg::PageSelected(page)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}
