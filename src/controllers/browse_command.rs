//! Commands accepted by the interactive browse loop, one per input line

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Page(u32),
    /// Empty text clears the search
    Search(String),
    Show(u32),
    Retry,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  n, next          next page
  p, prev          previous page
  g, page <N>      go to page N
  /<text>          search by name (empty text clears the search)
  search <text>    same as /<text>
  s, show <ID>     show a character and its recent episodes
  r, retry         reload the first page without filters
  <enter>          redraw the list
  h, help          this help
  q, quit          exit";

impl BrowseCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Refresh;
        }
        if let Some(text) = line.strip_prefix('/') {
            return Self::Search(text.trim().to_string());
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "n" | "next" if rest.is_empty() => Self::Next,
            "p" | "prev" if rest.is_empty() => Self::Prev,
            "r" | "retry" if rest.is_empty() => Self::Retry,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            "search" => Self::Search(rest.to_string()),
            "g" | "page" => rest
                .parse()
                .map(Self::Page)
                .unwrap_or_else(|_| Self::Unknown(line.to_string())),
            "s" | "show" => rest
                .parse()
                .map(Self::Show)
                .unwrap_or_else(|_| Self::Unknown(line.to_string())),
            _ => Self::Unknown(line.to_string()),
        }
    }
}
