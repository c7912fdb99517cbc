//! Search view state and Iced Application implementation
//!
//! Uses Iced 0.13 API. One instance owns the query, the state of the last
//! search and the expand state of the result tree.

use std::sync::Arc;

use iced::widget::{column, container, scrollable, text, Space};
use iced::{window, Background, Border, Element, Length, Padding, Size, Task, Theme};
use serde_json::Value;

use crate::backend::api::HttpSearchClient;
use crate::backend::SearchBackend;
use crate::config::Config;
use crate::error::SearchError;
use crate::search::{QueryInput, SearchSession, Ticket};
use crate::tree::{visible_rows, ExpandKeying, ExpandState, NodePath, TreeRow};
use crate::ui::theme::DarkTheme;
use crate::ui::{alert, search_bar, tree_view};

pub const TITLE: &str = "AI Search";

// ============================================================================
// Application State
// ============================================================================

pub struct AiSearch {
    query: QueryInput,
    session: SearchSession,
    expanded: ExpandState,
    backend: Arc<dyn SearchBackend>,
    max_depth: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Search button or Enter in the input.
    Submit,
    SearchFinished(Ticket, Result<Value, SearchError>),
    Toggle(NodePath),
}

impl AiSearch {
    pub fn new(backend: Arc<dyn SearchBackend>, config: &Config) -> Self {
        Self::with_settings(backend, config.expand_keying, config.max_depth)
    }

    pub fn with_settings(
        backend: Arc<dyn SearchBackend>,
        keying: ExpandKeying,
        max_depth: usize,
    ) -> Self {
        Self {
            query: QueryInput::new(),
            session: SearchSession::new(),
            expanded: ExpandState::new(keying),
            backend,
            max_depth,
        }
    }

    pub fn query(&self) -> &QueryInput {
        &self.query
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn expanded(&self) -> &ExpandState {
        &self.expanded
    }

    /// Rows of the displayed result, empty when nothing is shown.
    pub fn rows(&self) -> Vec<TreeRow> {
        match self.displayed_result() {
            Some(value) => visible_rows(value, &self.expanded, self.max_depth),
            None => Vec::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(text) => {
                self.query.set(text);
                Task::none()
            }

            Message::Submit => {
                let Some(query) = self.query.submission() else {
                    tracing::debug!("ignoring blank query");
                    return Task::none();
                };

                let ticket = self.session.begin();
                tracing::info!(ticket = ticket.id(), len = query.len(), "submitting search");

                let search = self.backend.search(query);
                Task::perform(search, move |result| {
                    Message::SearchFinished(ticket, result)
                })
            }

            Message::SearchFinished(ticket, result) => {
                self.session.finish(ticket, result);
                Task::none()
            }

            Message::Toggle(path) => {
                let expanded = self.expanded.toggle(&path);
                tracing::trace!(%path, expanded, "toggled node");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            text(TITLE).size(22).color(DarkTheme::TEXT),
            Space::with_height(12),
            search_bar::view(
                self.query.text(),
                self.session.is_loading(),
                Message::QueryChanged,
                Message::Submit,
            ),
            Space::with_height(16),
        ];

        if let Some(err) = self.session.error() {
            content = content.push(alert::view("Error", err.user_message()));
            content = content.push(Space::with_height(16));
        }

        if self.displayed_result().is_some() {
            content = content.push(self.view_results());
        }

        // Card with rounded corners on the window background
        container(
            container(content)
                .padding(20)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(DarkTheme::SURFACE)),
                    border: Border {
                        color: DarkTheme::BORDER,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    ..Default::default()
                }),
        )
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::BACKGROUND)),
            ..Default::default()
        })
        .into()
    }

    fn view_results(&self) -> Element<'_, Message> {
        container(
            column![
                text("Search Results:").size(17).color(DarkTheme::TEXT),
                Space::with_height(8),
                scrollable(tree_view::view(self.rows(), Message::Toggle)).height(Length::Fill),
            ]
            .spacing(0),
        )
        .padding(Padding::new(14.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::BACKGROUND)),
            border: Border::default().rounded(8),
            ..Default::default()
        })
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // A null result shows no results panel at all.
    fn displayed_result(&self) -> Option<&Value> {
        self.session.result().filter(|value| !value.is_null())
    }
}

/// Open the search window against the HTTP backend from `config`.
pub fn run(config: Config) -> iced::Result {
    let backend: Arc<dyn SearchBackend> = Arc::new(HttpSearchClient::from_config(&config));
    tracing::info!(backend = %config.backend_url, "starting search view");

    let size = Size::new(config.window_width, config.window_height);
    iced::application(TITLE, AiSearch::update, AiSearch::view)
        .theme(AiSearch::theme)
        .window(window::Settings {
            size,
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (AiSearch::new(backend, &config), Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SEARCH_FAILED_MESSAGE;
    use crate::search::SearchOutcome;
    use crate::tree::DEFAULT_MAX_DEPTH;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// App whose backend records every query it receives.
    fn app_with(keying: ExpandKeying) -> (AiSearch, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let seen = calls.clone();
        let backend = Arc::new(move |query: String| {
            seen.lock().unwrap().push(query.clone());
            async move { Ok::<_, SearchError>(json!({ "query": query })) }
        });
        (AiSearch::with_settings(backend, keying, DEFAULT_MAX_DEPTH), calls)
    }

    fn submit(app: &mut AiSearch, query: &str) {
        let _ = app.update(Message::QueryChanged(query.to_string()));
        let _ = app.update(Message::Submit);
    }

    fn finish(app: &mut AiSearch, result: Result<Value, SearchError>) {
        let ticket = app.session().latest().unwrap();
        let _ = app.update(Message::SearchFinished(ticket, result));
    }

    fn path(segments: &[&str]) -> NodePath {
        segments.iter().copied().collect()
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let (mut app, calls) = app_with(ExpandKeying::Path);
        for blank in ["", "   ", "\t"] {
            submit(&mut app, blank);
        }
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(app.session().outcome(), &SearchOutcome::Idle);

        submit(&mut app, "x");
        finish(&mut app, Err(SearchError::Backend("down".into())));
        submit(&mut app, "  ");
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert!(app.session().error().is_some());
    }

    #[test]
    fn test_submit_sends_raw_query_and_loads() {
        let (mut app, calls) = app_with(ExpandKeying::Path);
        submit(&mut app, "  rust  ");
        assert_eq!(*calls.lock().unwrap(), vec!["  rust  ".to_string()]);
        assert!(app.session().is_loading());
    }

    #[test]
    fn test_success_then_failure_then_retry() {
        let (mut app, _calls) = app_with(ExpandKeying::Path);

        submit(&mut app, "one");
        finish(&mut app, Ok(json!({"a": {"b": 1}, "c": 2})));
        assert_eq!(app.session().result(), Some(&json!({"a": {"b": 1}, "c": 2})));
        assert!(app.session().error().is_none());

        submit(&mut app, "two");
        finish(&mut app, Err(SearchError::Status { status: 500, body: String::new() }));
        assert!(app.session().result().is_none());
        assert_eq!(app.session().error().unwrap().user_message(), SEARCH_FAILED_MESSAGE);
        assert!(app.rows().is_empty());

        submit(&mut app, "three");
        assert!(app.session().is_loading());
        assert!(app.session().error().is_none());
    }

    #[test]
    fn test_toggle_updates_rows() {
        let (mut app, _calls) = app_with(ExpandKeying::Path);
        submit(&mut app, "q");
        finish(&mut app, Ok(json!({"a": {"b": 1}, "c": 2})));

        let keys = |app: &AiSearch| -> Vec<String> {
            app.rows()
                .iter()
                .map(|row| match row {
                    TreeRow::Field { path, .. } => path.to_string(),
                    TreeRow::Literal { text, .. } => format!("={text}"),
                    TreeRow::Truncated { .. } => "…".to_string(),
                })
                .collect()
        };
        assert_eq!(keys(&app), ["a", "c"]);

        let _ = app.update(Message::Toggle(path(&["a"])));
        assert_eq!(keys(&app), ["a", "a.b", "c"]);

        let _ = app.update(Message::Toggle(path(&["c"])));
        assert_eq!(keys(&app), ["a", "a.b", "c", "=2"]);

        let _ = app.update(Message::Toggle(path(&["a"])));
        assert_eq!(keys(&app), ["a", "c", "=2"]);
    }

    #[test]
    fn test_expand_state_survives_new_search() {
        let (mut app, _calls) = app_with(ExpandKeying::FieldName);
        submit(&mut app, "first");
        finish(&mut app, Ok(json!({"meta": {"id": 1}})));
        let _ = app.update(Message::Toggle(path(&["meta"])));

        submit(&mut app, "second");
        finish(&mut app, Ok(json!({"other": {"meta": {"id": 2}}})));
        let _ = app.update(Message::Toggle(path(&["other"])));

        let rows = app.rows();
        assert!(rows.contains(&TreeRow::Field {
            depth: 1,
            path: path(&["other", "meta"]),
            expanded: true,
        }));
        assert_eq!(app.expanded().len(), 2);
    }

    #[test]
    fn test_previous_result_shown_while_loading() {
        let (mut app, _calls) = app_with(ExpandKeying::Path);
        submit(&mut app, "first");
        finish(&mut app, Ok(json!({"a": 1})));
        submit(&mut app, "second");
        assert!(app.session().is_loading());
        assert_eq!(app.rows().len(), 1);
    }

    #[test]
    fn test_null_result_hides_results() {
        let (mut app, _calls) = app_with(ExpandKeying::Path);
        submit(&mut app, "nothing");
        finish(&mut app, Ok(Value::Null));
        assert_eq!(app.session().outcome(), &SearchOutcome::Success(Value::Null));
        assert!(app.rows().is_empty());
    }

    #[test]
    fn test_view_builds_in_every_state() {
        let (mut app, _calls) = app_with(ExpandKeying::Path);
        let _ = app.view();
        submit(&mut app, "q");
        let _ = app.view();
        finish(&mut app, Ok(json!({"a": [1, {"b": null}]})));
        let _ = app.update(Message::Toggle(path(&["a"])));
        let _ = app.view();
        submit(&mut app, "q");
        finish(&mut app, Err(SearchError::Request("refused".into())));
        let _ = app.view();
    }

    #[test]
    fn test_overlapping_searches_reach_backend() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let backend = Arc::new(move |_query: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, SearchError>(Value::Bool(true)) }
        });
        let mut app = AiSearch::with_settings(backend, ExpandKeying::Path, DEFAULT_MAX_DEPTH);

        let _ = app.update(Message::QueryChanged("q".into()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submit);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(app.session().is_loading());
    }
}
