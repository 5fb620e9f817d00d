//! Region and locality selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::Notification;
use crate::domain::entities::{FetchTarget, SelectionEffect, SelectionEvent, SelectionState};
use crate::infrastructure::search::FuzzySearcher;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::NotificationPopup;
use crate::presentation::widgets::{
    Selector, SelectorAction, SelectorDropdown, SelectorWidget, StatusBar, StatusLevel,
};

const TITLE: &str = "Seu marketplace de coleta de resíduos";
const DESCRIPTION: &str = "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente";
const REGION_PLACEHOLDER: &str = "Selecione sua UF";
const LOCALITY_PLACEHOLDER: &str = "Selecione sua cidade";
const BUTTON_LABEL: &str = "Entrar";
const CONTENT_WIDTH: u16 = 64;
const DROPDOWN_HEIGHT: u16 = 12;

/// Focusable element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    /// UF picker.
    Region,
    /// City picker.
    Locality,
    /// "Entrar" button.
    Button,
}

impl HomeFocus {
    const fn next(self) -> Self {
        match self {
            Self::Region => Self::Locality,
            Self::Locality => Self::Button,
            Self::Button => Self::Region,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Region => Self::Button,
            Self::Locality => Self::Region,
            Self::Button => Self::Locality,
        }
    }
}

/// What the app loop must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Key handled locally.
    None,
    /// Leave without navigating.
    Quit,
    /// Feed this event to [`HomeScreen::apply`].
    Select(SelectionEvent),
    /// "Entrar" pressed.
    Confirm,
}

/// Welcome screen with the UF and city pickers.
pub struct HomeScreen {
    state: SelectionState,
    region_selector: Selector,
    locality_selector: Selector,
    focus: HomeFocus,
    alert: Option<Notification>,
    theme: Theme,
}

impl HomeScreen {
    /// Creates screen with the UF picker focused.
    #[must_use]
    pub fn new(theme: Theme, searcher: FuzzySearcher) -> Self {
        let mut region_selector =
            Selector::new(REGION_PLACEHOLDER).with_searcher(searcher.clone());
        region_selector.set_focused(true);
        let locality_selector = Selector::new(LOCALITY_PLACEHOLDER).with_searcher(searcher);

        Self {
            state: SelectionState::new(),
            region_selector,
            locality_selector,
            focus: HomeFocus::Region,
            alert: None,
            theme,
        }
    }

    /// Current selection.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Focused element.
    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    /// Alert awaiting dismissal.
    #[must_use]
    pub const fn alert(&self) -> Option<&Notification> {
        self.alert.as_ref()
    }

    /// Shows a blocking alert; the next key press dismisses it.
    pub fn show_alert(&mut self, notification: Notification) {
        self.region_selector.close();
        self.locality_selector.close();
        self.alert = Some(notification);
    }

    /// Applies a selection event and refreshes the pickers from the new state.
    pub fn apply(&mut self, event: SelectionEvent) -> Option<SelectionEffect> {
        let effect = self.state.apply(event);
        self.sync_selectors();
        effect
    }

    fn sync_selectors(&mut self) {
        let regions: Vec<&str> = self.state.regions().iter().map(|r| r.as_str()).collect();
        if self.region_selector.options() != regions.as_slice() {
            self.region_selector.set_options(&regions);
        }
        self.region_selector
            .set_value(self.state.selected_region().map(|r| r.as_str()));
        self.region_selector
            .set_loading(self.state.is_loading(FetchTarget::Regions));

        let localities: Vec<&str> = self
            .state
            .localities()
            .iter()
            .map(|l| l.as_str())
            .collect();
        if self.locality_selector.options() != localities.as_slice() {
            self.locality_selector.set_options(&localities);
        }
        self.locality_selector
            .set_value(self.state.selected_locality().map(|l| l.as_str()));
        self.locality_selector
            .set_loading(self.state.is_loading(FetchTarget::Localities));
    }

    fn set_focus(&mut self, focus: HomeFocus) {
        self.focus = focus;
        self.region_selector.set_focused(focus == HomeFocus::Region);
        self.locality_selector
            .set_focused(focus == HomeFocus::Locality);
    }

    fn focused_selector(&mut self) -> Option<&mut Selector> {
        match self.focus {
            HomeFocus::Region => Some(&mut self.region_selector),
            HomeFocus::Locality => Some(&mut self.locality_selector),
            HomeFocus::Button => None,
        }
    }

    fn open_selector(&self) -> Option<&Selector> {
        [&self.region_selector, &self.locality_selector]
            .into_iter()
            .find(|s| s.is_open())
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if EventHandler::is_force_quit_event(&key) {
            return HomeAction::Quit;
        }

        if self.alert.take().is_some() {
            return HomeAction::None;
        }

        let focus = self.focus;
        if let Some(selector) = self.focused_selector()
            && selector.is_open()
        {
            return match selector.handle_key(key) {
                SelectorAction::Commit(value) => HomeAction::Select(match focus {
                    HomeFocus::Locality => SelectionEvent::locality(&value),
                    _ => SelectionEvent::region(&value),
                }),
                SelectorAction::None | SelectorAction::Opened | SelectorAction::Closed => {
                    HomeAction::None
                }
            };
        }

        if EventHandler::is_focus_next_event(&key) {
            self.set_focus(self.focus.next());
            return HomeAction::None;
        }
        if EventHandler::is_focus_previous_event(&key) {
            self.set_focus(self.focus.previous());
            return HomeAction::None;
        }
        if EventHandler::is_quit_event(&key) {
            return HomeAction::Quit;
        }

        match self.focused_selector() {
            Some(selector) => {
                selector.handle_key(key);
                HomeAction::None
            }
            None if EventHandler::is_submit_event(&key) || key.code == KeyCode::Char(' ') => {
                HomeAction::Confirm
            }
            None => HomeAction::None,
        }
    }

    fn status_bar(&self) -> StatusBar {
        let bar = StatusBar::new()
            .hint("Tab", "próximo campo")
            .hint("Enter", "abrir/entrar")
            .hint("Esc", "sair");

        if let Some(failure) = self.state.failure() {
            bar.message(failure.message.as_str(), StatusLevel::Error)
        } else if self.state.is_loading(FetchTarget::Regions)
            || self.state.is_loading(FetchTarget::Localities)
        {
            bar.message("Carregando...", StatusLevel::Info)
        } else {
            bar
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(CONTENT_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(main_area);

        let [
            logo_area,
            _,
            title_area,
            description_area,
            _,
            region_area,
            locality_area,
            _,
            button_area,
            _,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(column);

        let logo = Line::from(vec![
            Span::styled("♻ ", Style::default().fg(self.theme.accent)),
            Span::styled("Ecoleta", self.theme.title_style),
        ]);
        Paragraph::new(logo).render(logo_area, buf);

        Paragraph::new(TITLE)
            .style(self.theme.title_style)
            .wrap(Wrap { trim: true })
            .render(title_area, buf);
        Paragraph::new(DESCRIPTION)
            .style(self.theme.description_style)
            .wrap(Wrap { trim: true })
            .render(description_area, buf);

        SelectorWidget::new(&self.region_selector, &self.theme).render(region_area, buf);
        SelectorWidget::new(&self.locality_selector, &self.theme).render(locality_area, buf);

        self.render_button(button_area, buf);
        (&self.status_bar()).render(status_area, buf);

        if let Some(selector) = self.open_selector() {
            let anchor = if self.locality_selector.is_open() {
                locality_area
            } else {
                region_area
            };
            let top = anchor.bottom();
            let height = DROPDOWN_HEIGHT.min(area.bottom().saturating_sub(top));
            let dropdown_area = Rect::new(anchor.x, top, anchor.width, height);
            if dropdown_area.area() > 0 {
                SelectorDropdown::new(selector, &self.theme).render(dropdown_area, buf);
            }
        }

        if let Some(alert) = &self.alert {
            NotificationPopup::new(alert, &self.theme).render(area, buf);
        }
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == HomeFocus::Button;
        let mut style = Style::default()
            .bg(self.theme.accent)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(style);
        Paragraph::new(Line::from(vec![
            Span::raw(BUTTON_LABEL),
            Span::raw("  →"),
        ]))
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
