//! Command line parsing
//!
//! `ai-search [command]`. No command opens the search window.

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search window: (none) | gui
    Gui,
    /// Run one search and print the expanded tree: query <text...>
    Query { text: String },
    /// Check the backend health endpoint: status
    Status,
    /// Show help: help | --help | -h
    Help,
    /// Anything else, with a message for the user
    Invalid { message: String },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Gui;
        };
        let rest: Vec<&str> = args[1..].iter().map(AsRef::as_ref).collect();

        match cmd.as_ref() {
            "gui" | "open" => Command::Gui,
            "query" | "q" => {
                let text = rest.join(" ");
                if text.trim().is_empty() {
                    Command::Invalid {
                        message: "Usage: ai-search query <text>".to_string(),
                    }
                } else {
                    Command::Query { text }
                }
            }
            "status" => Command::Status,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {}. Run 'ai-search help' for usage.", other),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"ai-search - search a backend and browse the JSON it returns

Usage: ai-search [command]

Commands:
  (none), gui         Open the search window
  query <text>        Run one search and print the result tree
  status              Check that the backend is reachable
  help                Show this help

Environment:
  AI_SEARCH_CONFIG         Config file (default: <config dir>/ai-search/config.json)
  AI_SEARCH_BACKEND_URL    Backend base URL
  AI_SEARCH_EXPAND_KEYING  path | field-name
  AI_SEARCH_MAX_DEPTH      Nesting shown before the tree is cut off
  RUST_LOG                 Log filter"#
    }
}
