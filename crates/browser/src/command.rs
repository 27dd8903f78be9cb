//! Line commands typed at the browser prompt.

use crate::state::Action;

pub const HELP: &str = "\
Commands:
  search <text>   filter by title (empty text clears the filter)
  type <text>     edit the search box without submitting
  submit          submit the search box
  size <n>        page size: 10, 25, 50 or 100
  next | prev     move one page
  goto <n>        jump to page n
  open <n>        show details for card n
  close           hide the details
  help            show this help
  quit            exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Zero or more state actions to apply in order.
    Actions(Vec<Action>),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let actions = match word.to_ascii_lowercase().as_str() {
        "" => vec![],
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "search" => vec![Action::EditSearch(rest.to_string()), Action::SubmitSearch],
        "type" => vec![Action::EditSearch(rest.to_string())],
        "submit" => vec![Action::SubmitSearch],
        "size" => {
            // Sizes outside the offered options are dropped by the state.
            let size = rest
                .parse::<i64>()
                .map_err(|_| CommandError::Usage("size <10|25|50|100>"))?;
            vec![Action::SetPageSize(size)]
        }
        "next" | "n" => vec![Action::NextPage],
        "prev" | "p" => vec![Action::PrevPage],
        "goto" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("goto <page>"));
            }
            vec![Action::JumpToPage(rest.to_string())]
        }
        "open" => {
            let index = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or(CommandError::Usage("open <card number>"))?;
            vec![Action::Select(index)]
        }
        "close" => vec![Action::CloseDetail],
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Command::Actions(actions))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn search_edits_then_submits() {
        assert_eq!(
            parse("search  the godfather ").unwrap(),
            Command::Actions(vec![
                Action::EditSearch("the godfather".into()),
                Action::SubmitSearch,
            ])
        );
    }

    #[test]
    fn bare_search_clears_the_filter() {
        assert_eq!(
            parse("search").unwrap(),
            Command::Actions(vec![Action::EditSearch(String::new()), Action::SubmitSearch])
        );
    }

    #[test]
    fn type_only_edits() {
        assert_eq!(
            parse("type mat").unwrap(),
            Command::Actions(vec![Action::EditSearch("mat".into())])
        );
    }

    #[test]
    fn size_needs_a_number() {
        assert_eq!(parse("size 25").unwrap(), Command::Actions(vec![Action::SetPageSize(25)]));
        assert_eq!(parse("size 7").unwrap(), Command::Actions(vec![Action::SetPageSize(7)]));
        assert_matches!(parse("size lots"), Err(CommandError::Usage(_)));
    }

    #[test]
    fn goto_passes_raw_text_through() {
        assert_eq!(
            parse("goto 3").unwrap(),
            Command::Actions(vec![Action::JumpToPage("3".into())])
        );
        assert_matches!(parse("goto"), Err(CommandError::Usage(_)));
    }

    #[test]
    fn open_is_one_based() {
        assert_eq!(parse("open 1").unwrap(), Command::Actions(vec![Action::Select(0)]));
        assert_matches!(parse("open 0"), Err(CommandError::Usage(_)));
        assert_matches!(parse("open x"), Err(CommandError::Usage(_)));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse("NEXT").unwrap(), Command::Actions(vec![Action::NextPage]));
        assert_eq!(parse("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn blank_line_is_a_no_op() {
        assert_eq!(parse("   ").unwrap(), Command::Actions(vec![]));
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(parse("dance"), Err(CommandError::Unknown("dance".into())));
    }
}
