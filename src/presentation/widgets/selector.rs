//! Dropdown picker bound to a list of string options.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
};

use crate::infrastructure::search::FuzzySearcher;
use crate::presentation::theme::Theme;

/// Outcome of a key press on a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    /// Nothing changed that the owner must react to.
    None,
    /// Dropdown opened.
    Opened,
    /// Dropdown closed without choosing.
    Closed,
    /// User chose a value.
    Commit(String),
}

/// Picker state: options, chosen value, and the open dropdown's filter.
pub struct Selector {
    placeholder: String,
    options: Vec<String>,
    value: Option<String>,
    query: String,
    visible: Vec<usize>,
    list_state: ListState,
    open: bool,
    focused: bool,
    loading: bool,
    searcher: FuzzySearcher,
}

impl Selector {
    /// Creates empty selector.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            options: Vec::new(),
            value: None,
            query: String::new(),
            visible: Vec::new(),
            list_state: ListState::default(),
            open: false,
            focused: false,
            loading: false,
            searcher: FuzzySearcher::default(),
        }
    }

    /// Sets the option filter.
    #[must_use]
    pub fn with_searcher(mut self, searcher: FuzzySearcher) -> Self {
        self.searcher = searcher;
        self
    }

    /// Replaces options wholesale. An open dropdown keeps its filter.
    pub fn set_options<S: AsRef<str>>(&mut self, options: &[S]) {
        self.options = options.iter().map(|o| o.as_ref().to_string()).collect();
        if !self.open {
            self.query.clear();
        }
        self.refilter();
    }

    /// All options in service order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options matching the current filter, best first.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&str> {
        self.visible
            .iter()
            .filter_map(|&i| self.options.get(i).map(String::as_str))
            .collect()
    }

    /// Sets the displayed value.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.value = value.map(ToString::to_string);
    }

    /// Displayed value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current filter text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Highlighted option.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i))
            .and_then(|&i| self.options.get(i))
            .map(String::as_str)
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close();
        }
    }

    /// Returns focus state.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Marks the options as being fetched.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Opens the dropdown with an empty filter.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.refilter();
        if let Some(current) = &self.value
            && let Some(pos) = self
                .visible
                .iter()
                .position(|&i| self.options.get(i) == Some(current))
        {
            self.list_state.select(Some(pos));
        }
    }

    /// Closes the dropdown and discards the filter.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorAction {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open();
                    SelectorAction::Opened
                }
                _ => SelectorAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                SelectorAction::Closed
            }
            KeyCode::Enter => {
                let choice = self
                    .highlighted()
                    .map(ToString::to_string)
                    .or_else(|| Some(self.query.trim().to_string()).filter(|q| !q.is_empty()));
                self.close();
                choice.map_or(SelectorAction::Closed, SelectorAction::Commit)
            }
            KeyCode::Up => {
                self.select_previous();
                SelectorAction::None
            }
            KeyCode::Down => {
                self.select_next();
                SelectorAction::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
                SelectorAction::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                self.refilter();
                SelectorAction::None
            }
            _ => SelectorAction::None,
        }
    }

    fn refilter(&mut self) {
        self.visible = self.searcher.rank(&self.options, &self.query);
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

/// Collapsed selector box.
pub struct SelectorWidget<'a> {
    selector: &'a Selector,
    theme: &'a Theme,
}

impl<'a> SelectorWidget<'a> {
    /// Wraps `selector` for rendering.
    #[must_use]
    pub fn new(selector: &'a Selector, theme: &'a Theme) -> Self {
        Self { selector, theme }
    }
}

impl Widget for SelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selector = self.selector;
        let border_style =
            Style::default().fg(self.theme.selector_border(selector.value.is_some()));
        let border_type = if selector.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let text = match (&selector.value, selector.loading) {
            (Some(value), _) => Span::raw(value.as_str()),
            (None, true) => Span::styled("Carregando...", self.theme.dimmed_style),
            (None, false) => Span::styled(selector.placeholder.as_str(), self.theme.dimmed_style),
        };
        let arrow = if selector.open { "▴" } else { "▾" };

        let [text_area, arrow_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(2)]).areas(inner);
        Paragraph::new(Line::from(text)).render(text_area, buf);
        Paragraph::new(arrow)
            .style(Style::default().fg(self.theme.accent))
            .render(arrow_area, buf);
    }
}

/// Open dropdown list with its filter line.
pub struct SelectorDropdown<'a> {
    selector: &'a Selector,
    theme: &'a Theme,
}

impl<'a> SelectorDropdown<'a> {
    /// Wraps `selector` for rendering.
    #[must_use]
    pub fn new(selector: &'a Selector, theme: &'a Theme) -> Self {
        Self { selector, theme }
    }
}

impl Widget for SelectorDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(format!(" {} ", self.selector.placeholder));
        let inner = block.inner(area);
        block.render(area, buf);

        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let filter = Line::from(vec![
            Span::styled(" Filtro ", self.theme.selection_style),
            Span::raw(" "),
            Span::raw(self.selector.query.as_str()),
        ]);
        Paragraph::new(filter).render(filter_area, buf);

        let items: Vec<ListItem> = if self.selector.visible.is_empty() {
            let message = if self.selector.loading {
                "Carregando..."
            } else if self.selector.query.is_empty() {
                "Nenhuma opção disponível"
            } else {
                "Nenhum resultado, Enter usa o texto digitado"
            };
            vec![ListItem::new(Span::styled(message, self.theme.dimmed_style))]
        } else {
            self.selector
                .visible_options()
                .into_iter()
                .map(|option| {
                    let marker = if self.selector.value.as_deref() == Some(option) {
                        "● "
                    } else {
                        "  "
                    };
                    ListItem::new(Line::from(format!("{marker}{option}")))
                })
                .collect()
        };

        let list = List::new(items)
            .highlight_style(self.theme.selection_style.add_modifier(Modifier::BOLD));

        let mut state = self.selector.list_state;
        StatefulWidget::render(list, list_area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_selector(options: &[&str]) -> Selector {
        let mut selector = Selector::new("Selecione sua UF");
        selector.set_options(options);
        assert_eq!(selector.handle_key(key(KeyCode::Enter)), SelectorAction::Opened);
        selector
    }

    #[test]
    fn test_set_options_replaces_wholesale() {
        let mut selector = Selector::new("Selecione sua cidade");
        selector.set_options(&["São Paulo", "Campinas"]);
        selector.set_options(&["Niterói"]);

        assert_eq!(selector.options(), &["Niterói".to_string()]);
        assert_eq!(selector.visible_options(), vec!["Niterói"]);
    }

    #[test]
    fn test_options_arriving_while_open_keep_filter() {
        let mut selector = open_selector(&[]);
        for c in "Camp".chars() {
            selector.handle_key(key(KeyCode::Char(c)));
        }

        selector.set_options(&["São Paulo", "Campinas"]);

        assert!(selector.is_open());
        assert_eq!(selector.query(), "Camp");
        assert_eq!(selector.highlighted(), Some("Campinas"));
        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            SelectorAction::Commit("Campinas".to_string())
        );
    }

    #[test]
    fn test_closed_selector_ignores_typing() {
        let mut selector = Selector::new("Selecione sua UF");
        selector.set_options(&["SP"]);

        assert_eq!(selector.handle_key(key(KeyCode::Char('s'))), SelectorAction::None);
        assert!(!selector.is_open());
        assert!(selector.query().is_empty());
    }

    #[test]
    fn test_enter_commits_highlighted_option() {
        let mut selector = open_selector(&["SP", "RJ"]);
        selector.handle_key(key(KeyCode::Down));

        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            SelectorAction::Commit("RJ".to_string())
        );
        assert!(!selector.is_open());
    }

    #[test]
    fn test_typing_filters_options() {
        let mut selector = open_selector(&["SP", "RJ", "RS"]);
        selector.handle_key(key(KeyCode::Char('r')));
        selector.handle_key(key(KeyCode::Char('j')));

        assert_eq!(selector.visible_options(), vec!["RJ"]);
        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            SelectorAction::Commit("RJ".to_string())
        );
    }

    #[test]
    fn test_unmatched_query_is_committed_verbatim() {
        let mut selector = open_selector(&["SP"]);
        for c in "XX".chars() {
            selector.handle_key(key(KeyCode::Char(c)));
        }

        assert!(selector.visible_options().is_empty());
        assert_eq!(
            selector.handle_key(key(KeyCode::Enter)),
            SelectorAction::Commit("XX".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_list_just_closes() {
        let mut selector = open_selector(&[]);
        assert_eq!(selector.handle_key(key(KeyCode::Enter)), SelectorAction::Closed);
    }

    #[test]
    fn test_escape_closes_and_clears_filter() {
        let mut selector = open_selector(&["SP"]);
        selector.handle_key(key(KeyCode::Char('s')));

        assert_eq!(selector.handle_key(key(KeyCode::Esc)), SelectorAction::Closed);
        assert!(selector.query().is_empty());
        assert!(!selector.is_open());
    }

    #[test]
    fn test_opening_highlights_current_value() {
        let mut selector = Selector::new("Selecione sua UF");
        selector.set_options(&["SP", "RJ", "MG"]);
        selector.set_value(Some("MG"));

        selector.handle_key(key(KeyCode::Enter));

        assert_eq!(selector.highlighted(), Some("MG"));
    }

    #[test_case(KeyCode::Down, 0, 1 ; "down_from_0")]
    #[test_case(KeyCode::Down, 2, 0 ; "down_wrap_around")]
    #[test_case(KeyCode::Up, 0, 2 ; "up_wrap_around")]
    #[test_case(KeyCode::Up, 2, 1 ; "up_from_2")]
    fn test_highlight_navigation(code: KeyCode, start: usize, expected: usize) {
        let mut selector = open_selector(&["SP", "RJ", "MG"]);
        selector.list_state.select(Some(start));

        selector.handle_key(key(code));

        assert_eq!(selector.list_state.selected(), Some(expected));
    }

    #[test]
    fn test_losing_focus_closes_dropdown() {
        let mut selector = open_selector(&["SP"]);
        selector.set_focused(true);
        selector.set_focused(false);
        assert!(!selector.is_open());
    }
}
