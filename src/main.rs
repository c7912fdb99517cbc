//! ai-search: query a backend and browse the JSON it returns
//!
//! Usage:
//!   ai-search              - Open the search window
//!   ai-search query <text> - Print the result tree for one query
//!   ai-search status       - Check the backend
//!   ai-search help         - Show help

use std::process::ExitCode;

use ai_search::backend::api::HttpSearchClient;
use ai_search::cli::Command;
use ai_search::tree::{text::render_text, visible_rows, ExpandState};
use ai_search::{app, logging, Config, SearchBackend};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Gui => match app::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("window error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Query { text } => run_query(&config, text),
        Command::Status => run_status(&config),
        Command::Help => {
            println!("{}", Command::help_text());
            ExitCode::SUCCESS
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run_query(config: &Config, query: String) -> ExitCode {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let client = HttpSearchClient::from_config(config);

    match rt.block_on(client.search(query)) {
        Ok(value) => {
            let mut expanded = ExpandState::new(config.expand_keying);
            expanded.expand_all(&value);
            print!("{}", render_text(&visible_rows(&value, &expanded, config.max_depth)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(error = %e, "search failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run_status(config: &Config) -> ExitCode {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let client = HttpSearchClient::from_config(config);

    match rt.block_on(client.health()) {
        Ok(health) => {
            println!("Backend at {} is up: {}", config.backend_url, health);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Backend at {} is not reachable: {}", config.backend_url, e);
            ExitCode::FAILURE
        }
    }
}
