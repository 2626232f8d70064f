//! Terminal command parsing.
//!
//! Cards are addressed by their 1-based position in the active tab, so a
//! command is only turned into a core message against the current view.

use recipe_core::{AppViewModel, Msg, RecipeCardView, Tab};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search <term>          search the catalog
  more                   load the next page of results
  fav <n>                toggle favourite on card n
  open <n>               show details for card n
  close                  close the details
  tab search|favourites  switch tabs
  help                   show this text
  quit                   exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    More,
    Favourite(usize),
    Open(usize),
    Close,
    Tab(Tab),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("search needs a term")]
    MissingTerm,
    #[error("`{0}` needs a card number")]
    MissingCard(&'static str),
    #[error("`{0}` is not a card number")]
    BadCard(String),
    #[error("no card {0} on this tab")]
    NoSuchCard(usize),
    #[error("unknown tab `{0}`; use `search` or `favourites`")]
    UnknownTab(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => {
            if rest.is_empty() {
                return Err(InputError::MissingTerm);
            }
            Command::Search(rest.to_string())
        }
        "more" | "m" => Command::More,
        "fav" | "f" => Command::Favourite(card_number("fav", rest)?),
        "open" | "o" => Command::Open(card_number("open", rest)?),
        "close" | "c" => Command::Close,
        "tab" | "t" => Command::Tab(parse_tab(rest)?),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Turns a command into the message it stands for in `view`. `Help` and `Quit`
/// are handled by the host and map to `None`.
pub fn resolve(command: Command, view: &AppViewModel) -> Result<Option<Msg>, InputError> {
    let msg = match command {
        Command::Search(term) => Msg::SearchSubmitted(term),
        Command::More => Msg::LoadMoreClicked,
        Command::Favourite(n) => card(view, n)?.toggle.clone(),
        Command::Open(n) => card(view, n)?.open.clone(),
        Command::Close => Msg::ModalDismissed,
        Command::Tab(tab) => Msg::TabSelected(tab),
        Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(msg))
}

fn card(view: &AppViewModel, n: usize) -> Result<&RecipeCardView, InputError> {
    n.checked_sub(1)
        .and_then(|index| view.cards.get(index))
        .ok_or(InputError::NoSuchCard(n))
}

fn card_number(command: &'static str, rest: &str) -> Result<usize, InputError> {
    if rest.is_empty() {
        return Err(InputError::MissingCard(command));
    }
    rest.parse().map_err(|_| InputError::BadCard(rest.to_string()))
}

fn parse_tab(rest: &str) -> Result<Tab, InputError> {
    match rest.to_ascii_lowercase().as_str() {
        "search" | "s" => Ok(Tab::Search),
        "favourites" | "favorites" | "fav" | "f" => Ok(Tab::Favourites),
        other => Err(InputError::UnknownTab(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use recipe_core::{update, AppState, Recipe, RecipeId};

    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(
            parse("search  chicken curry "),
            Ok(Some(Command::Search("chicken curry".to_string())))
        );
        assert_eq!(parse("M"), Ok(Some(Command::More)));
        assert_eq!(parse("fav 2"), Ok(Some(Command::Favourite(2))));
        assert_eq!(parse("tab favorites"), Ok(Some(Command::Tab(Tab::Favourites))));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn reports_malformed_commands() {
        assert_eq!(parse("search"), Err(InputError::MissingTerm));
        assert_eq!(parse("open"), Err(InputError::MissingCard("open")));
        assert_eq!(parse("fav two"), Err(InputError::BadCard("two".to_string())));
        assert_eq!(parse("tab x"), Err(InputError::UnknownTab("x".to_string())));
        assert_eq!(parse("dance"), Err(InputError::Unknown("dance".to_string())));
    }

    #[test]
    fn card_commands_use_the_view_wiring() {
        let (state, effects) = update(AppState::new(), Msg::SearchSubmitted("pasta".into()));
        let (state, _) = update(
            state,
            Msg::SearchLoaded {
                request_id: effects[0].request_id(),
                result: Ok(vec![Recipe::new(RecipeId::Number(4), "Penne")]),
            },
        );
        let view = state.view();

        assert_eq!(
            resolve(Command::Favourite(1), &view),
            Ok(Some(Msg::AddFavouriteClicked(Recipe::new(
                RecipeId::Number(4),
                ""
            ))))
        );
        assert_eq!(
            resolve(Command::Open(1), &view),
            Ok(Some(Msg::RecipeSelected(Recipe::new(RecipeId::Number(4), ""))))
        );
        assert_eq!(
            resolve(Command::Open(0), &view),
            Err(InputError::NoSuchCard(0))
        );
        assert_eq!(
            resolve(Command::Favourite(2), &view),
            Err(InputError::NoSuchCard(2))
        );
        assert_eq!(resolve(Command::Quit, &view), Ok(None));
    }
}
