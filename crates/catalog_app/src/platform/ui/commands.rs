/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    /// A bare number: click on that page link.
    Page(i64),
    /// `j <text>`: the free-text page-jump box.
    Jump(String),
    Retry,
    Open(u64),
    Go(String),
    Back,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &[&str] = &[
    "n / p        next / previous page",
    "f / l        first / last page",
    "<number>     go to a page shown in the pager",
    "j <number>   jump to any page",
    "r            retry after an error",
    "o <id>       open a movie",
    "g <route>    navigate, e.g. g /action or g /movie/603",
    "b            back",
    "h            show this help",
    "q            quit",
];

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head {
            "" => Command::Empty,
            "n" | "next" => Command::Next,
            "p" | "prev" => Command::Previous,
            "f" | "first" => Command::First,
            "l" | "last" => Command::Last,
            "j" | "jump" => Command::Jump(rest.to_string()),
            "r" | "retry" => Command::Retry,
            "o" | "open" => match rest.parse() {
                Ok(id) => Command::Open(id),
                Err(_) => Command::Unknown(line.to_string()),
            },
            "g" | "go" if !rest.is_empty() => Command::Go(rest.to_string()),
            "b" | "back" => Command::Back,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ if rest.is_empty() => match head.parse() {
                Ok(page) => Command::Page(page),
                Err(_) => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(Command::parse("n"), Command::Next);
        assert_eq!(Command::parse(" prev "), Command::Previous);
        assert_eq!(Command::parse("7"), Command::Page(7));
        assert_eq!(Command::parse("-1"), Command::Page(-1));
        assert_eq!(Command::parse("j 12"), Command::Jump("12".to_string()));
        assert_eq!(Command::parse("j"), Command::Jump(String::new()));
    }

    #[test]
    fn parses_screens() {
        assert_eq!(Command::parse("o 603"), Command::Open(603));
        assert_eq!(Command::parse("g /drama?page=2"), Command::Go("/drama?page=2".to_string()));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse(""), Command::Empty);
    }

    #[test]
    fn help_lists_every_command_key() {
        for key in ["n", "f", "j", "r", "o", "g", "b", "h", "q"] {
            assert!(
                HELP.iter().any(|line| line.starts_with(&format!("{key} "))),
                "no help line for {key}"
            );
        }
        assert_eq!(Command::parse("h"), Command::Help);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Command::parse("o x"), Command::Unknown("o x".to_string()));
        assert_eq!(Command::parse("g"), Command::Unknown("g".to_string()));
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
    }
}
