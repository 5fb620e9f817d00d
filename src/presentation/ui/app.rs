//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::{ConfirmError, ConfirmSelectionUseCase, FetchDispatcher};
use crate::domain::entities::{Navigation, SelectionEvent};
use crate::domain::ports::{GeoDataPort, NavigationPort};
use crate::domain::{Notification, NotificationLevel};
use crate::infrastructure::search::FuzzySearcher;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{HomeAction, HomeScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Selecting,
    Exiting,
}

/// Main application.
pub struct App {
    state: AppState,
    screen: HomeScreen,
    dispatcher: FetchDispatcher,
    confirm_selection: ConfirmSelectionUseCase,
    selection_rx: mpsc::UnboundedReceiver<SelectionEvent>,
    navigation_rx: mpsc::UnboundedReceiver<Navigation>,
    navigation: Option<Navigation>,
}

impl App {
    /// Creates new application.
    ///
    /// `navigation_rx` must receive whatever `navigator` forwards; the session
    /// ends on the first navigation.
    #[must_use]
    pub fn new(
        geo_port: Arc<dyn GeoDataPort>,
        navigator: Arc<dyn NavigationPort>,
        navigation_rx: mpsc::UnboundedReceiver<Navigation>,
        theme: Theme,
        searcher: FuzzySearcher,
    ) -> Self {
        let (selection_tx, selection_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Selecting,
            screen: HomeScreen::new(theme, searcher),
            dispatcher: FetchDispatcher::new(geo_port, selection_tx),
            confirm_selection: ConfirmSelectionUseCase::new(navigator),
            selection_rx,
            navigation_rx,
            navigation: None,
        }
    }

    /// Runs the application until the user quits or a navigation happens.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
    ) -> color_eyre::Result<Option<Navigation>> {
        self.handle_selection_event(SelectionEvent::Initialize);
        self.run_event_loop(terminal).await?;

        info!(navigated = self.navigation.is_some(), "Application exiting normally");
        Ok(self.navigation)
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(navigation) = self.navigation_rx.recv() => {
                    self.handle_navigation(navigation);
                }

                Some(event) = self.selection_rx.recv() => {
                    self.handle_selection_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(event) = terminal_event => {
                    match event {
                        Ok(event) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Err(e) => {
                            warn!(error = %e, "Terminal event error");
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_selection_event(&mut self, event: SelectionEvent) {
        if let Some(effect) = self.screen.apply(event) {
            debug!(?effect, "Dispatching fetch");
            self.dispatcher.dispatch(effect);
        }
    }

    fn handle_navigation(&mut self, navigation: Navigation) {
        info!(route = %navigation.route, "Leaving selection screen");
        self.navigation = Some(navigation);
        self.state = AppState::Exiting;
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key) {
            HomeAction::None => EventResult::Consumed,
            HomeAction::Quit => EventResult::Exit,
            HomeAction::Select(event) => {
                self.handle_selection_event(event);
                EventResult::Consumed
            }
            HomeAction::Confirm => {
                self.confirm();
                EventResult::Consumed
            }
        }
    }

    fn confirm(&mut self) {
        match self.confirm_selection.execute(self.screen.state()) {
            Ok(navigation) => {
                debug!(params = ?navigation.params, "Selection confirmed");
            }
            Err(ConfirmError::Selection(e)) => {
                self.screen.show_alert(e.notice());
            }
            Err(ConfirmError::Navigation(e)) => {
                error!(error = %e, "Could not leave selection screen");
                self.screen.show_alert(Notification::new(
                    NotificationLevel::Error,
                    "Erro",
                    e.to_string(),
                ));
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::domain::entities::{LocalityName, RegionCode, Route};
    use crate::domain::errors::SELECTION_REQUIRED_MESSAGE;
    use crate::domain::ports::mocks::MockGeoData;
    use crate::infrastructure::ChannelNavigator;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn new_app() -> App {
        let port = Arc::new(
            MockGeoData::new(&["SP", "RJ"]).with_localities("SP", &["São Paulo", "Campinas"]),
        );
        let (navigator, navigation_rx) = ChannelNavigator::new();
        App::new(
            port,
            Arc::new(navigator),
            navigation_rx,
            Theme::default(),
            FuzzySearcher::default(),
        )
    }

    async fn settle(app: &mut App) {
        let event = app.selection_rx.recv().await.unwrap();
        app.handle_selection_event(event);
    }

    #[tokio::test]
    async fn test_full_selection_navigates_to_points() {
        let mut app = new_app();
        app.handle_selection_event(SelectionEvent::Initialize);
        settle(&mut app).await;

        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "SP");
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app).await;

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "Campinas");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Consumed);

        let navigation = app.navigation_rx.recv().await.unwrap();
        assert_eq!(navigation.route, Route::Points);
        assert_eq!(navigation.params.selected_uf, RegionCode::new("SP").unwrap());
        assert_eq!(
            navigation.params.selected_city,
            LocalityName::new("Campinas").unwrap()
        );

        app.handle_navigation(navigation);
        assert_eq!(app.state, AppState::Exiting);
        assert!(app.navigation.is_some());
    }

    #[tokio::test]
    async fn test_confirm_without_selection_shows_alert() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::BackTab));

        app.handle_key(key(KeyCode::Enter));

        let alert = app.screen.alert().unwrap();
        assert_eq!(alert.message, SELECTION_REQUIRED_MESSAGE);
        assert!(app.navigation_rx.try_recv().is_err());
        assert_eq!(app.state, AppState::Selecting);
    }

    #[tokio::test]
    async fn test_quit_key_exits() {
        let mut app = new_app();
        assert_eq!(
            app.handle_terminal_event(Event::Key(key(KeyCode::Char('q')))),
            EventResult::Exit
        );
    }
}
