use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{info, warn};

use crate::clipboard::ClipboardSink;
use crate::db::Store;
use crate::models::{Board, BoardId};

use super::helpers::{
    column_count, columns_that_fit, delete_marker_area, first_visible_column, grid_cells,
    input_tail, preview, tile_position, DELETE_MARKER, TILE_ROWS,
};

/// Height of the page header with the navigation buttons.
const HEADER_HEIGHT: u16 = 3;
/// Height of the bordered input line.
const INPUT_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Characters of a note echoed back in status messages.
const STATUS_PREVIEW_CHARS: usize = 32;
const PREVIOUS_LABEL: &str = "< Previous";
const NEXT_LABEL: &str = "Next >";
const ADD_LABEL: &str = "[ Add ]";

/// Whether keystrokes drive the board or go into the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Editing,
}

/// Something on screen that reacts to a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Note(usize),
    DeleteNote(usize),
    Previous,
    Next,
    Input,
    Add,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// State of the running board: the store, the notes on screen and the bits
/// of UI state the event loop mutates. Every user action is a method call on
/// this struct.
pub struct App {
    store: Store,
    board: Board,
    clipboard: Box<dyn ClipboardSink>,
    input: String,
    mode: Mode,
    selected: usize,
    saved_boards: Vec<BoardId>,
    status: Option<StatusMessage>,
    hits: Vec<(Rect, HitTarget)>,
}

impl App {
    /// Load the first board from `store` and build the initial state.
    pub fn new(store: Store, clipboard: Box<dyn ClipboardSink>) -> Result<Self> {
        let notes = store.load(BoardId::FIRST)?;
        let saved_boards = store.board_ids()?;
        Ok(Self {
            store,
            board: Board::new(BoardId::FIRST, notes),
            clipboard,
            input: String::new(),
            mode: Mode::Normal,
            selected: 0,
            saved_boards,
            status: None,
            hits: Vec::new(),
        })
    }

    pub fn current_board(&self) -> BoardId {
        self.board.id()
    }

    pub fn notes(&self) -> &[String] {
        self.board.notes()
    }

    /// Index of the highlighted note, if the board has any.
    pub fn selected(&self) -> Option<usize> {
        (!self.board.is_empty()).then_some(self.selected)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a note to the current board. Blank text is ignored. Nothing is
    /// written to the store until the board changes or the app closes.
    pub fn add_note(&mut self, text: &str) -> bool {
        match self.board.add(text) {
            Some(index) => {
                self.selected = index;
                self.set_status(
                    format!("Added note to page {}.", self.board.id()),
                    StatusKind::Info,
                );
                true
            }
            None => false,
        }
    }

    /// Add whatever is typed in the input line and clear it on success.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        if !self.add_note(&text) {
            self.input = text;
            self.set_status("Type some text before adding a note.", StatusKind::Error);
        }
    }

    /// Remove the note at `index`. Out of range indices are ignored.
    pub fn delete_note(&mut self, index: usize) -> bool {
        match self.board.delete(index) {
            Some(removed) => {
                self.clamp_selection();
                self.set_status(
                    format!("Deleted \"{}\".", preview(&removed, STATUS_PREVIEW_CHARS)),
                    StatusKind::Info,
                );
                true
            }
            None => false,
        }
    }

    /// Copy the note at `index` to the clipboard.
    pub fn copy_note(&mut self, index: usize) -> bool {
        match self.board.get(index).map(str::to_string) {
            Some(text) => self.copy_text(&text),
            None => false,
        }
    }

    /// Put `text` on the clipboard. Failures end up in the status line; the
    /// board keeps running.
    pub fn copy_text(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.set_status(
                    format!("Copied \"{}\".", preview(text, STATUS_PREVIEW_CHARS)),
                    StatusKind::Info,
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "copy failed");
                self.set_status(err.to_string(), StatusKind::Error);
                false
            }
        }
    }

    /// Write the current board to the store, replacing what was saved for it.
    pub fn save(&mut self) -> Result<()> {
        self.store.replace(self.board.id(), self.board.notes())?;
        self.saved_boards = self.store.board_ids()?;
        Ok(())
    }

    /// Save the current board, move `delta` boards (never below the first)
    /// and load the new board's notes.
    pub fn navigate(&mut self, delta: i64) -> Result<()> {
        self.save()?;
        let target = self.board.id().offset(delta);
        let notes = self.store.load(target)?;
        info!(from = self.board.id().get(), to = target.get(), "changed board");
        self.board = Board::new(target, notes);
        self.selected = 0;
        self.clear_status();
        Ok(())
    }

    /// Flush the current board and release the store.
    pub fn close(mut self) -> Result<()> {
        self.save()?;
        info!(board = self.board.id().get(), "closing");
        self.store.close()
    }

    /// Dispatch a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Editing => {
                self.handle_editing_key(code);
                Ok(false)
            }
        }
    }

    /// Dispatch a key press with its modifiers. Ctrl or Alt chords on
    /// character keys are ignored so they never end up typed into a note;
    /// Ctrl+Alt together is AltGr on some layouts and still types.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
        if matches!(key.code, KeyCode::Char(_))
            && key.modifiers.intersects(chord)
            && !key.modifiers.contains(chord)
        {
            return Ok(false);
        }
        self.handle_key(key.code)
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
                self.mode = Mode::Editing;
                self.clear_status();
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Left => self.move_selection(-(TILE_ROWS as isize)),
            KeyCode::Right => self.move_selection(TILE_ROWS as isize),
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('c') => {
                if self.board.is_empty() {
                    self.set_status("No note selected.", StatusKind::Error);
                } else {
                    self.copy_note(self.selected);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.board.is_empty() {
                    self.set_status("No note selected.", StatusKind::Error);
                } else {
                    self.delete_note(self.selected);
                }
            }
            KeyCode::Char('[') | KeyCode::Char('p') | KeyCode::PageUp => self.navigate(-1)?,
            KeyCode::Char(']') | KeyCode::Char('n') | KeyCode::PageDown => self.navigate(1)?,
            _ => {}
        }
        Ok(false)
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => self.mode = Mode::Normal,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(ch) => self.input.push(ch),
            _ => {}
        }
    }

    /// React to a click on whatever was drawn under the pointer in the last
    /// frame. Both mouse buttons copy a note; buttons respond to the left one.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Result<()> {
        let button = match event.kind {
            MouseEventKind::Down(button) => button,
            _ => return Ok(()),
        };
        let Some(target) = self.hit_at(event.column, event.row) else {
            return Ok(());
        };

        match (target, button) {
            (HitTarget::Note(index), MouseButton::Left | MouseButton::Right) => {
                self.selected = index;
                self.copy_note(index);
            }
            (_, MouseButton::Left) => match target {
                HitTarget::DeleteNote(index) => {
                    self.delete_note(index);
                }
                HitTarget::Previous => self.navigate(-1)?,
                HitTarget::Next => self.navigate(1)?,
                HitTarget::Input => self.mode = Mode::Editing,
                HitTarget::Add => self.submit_input(),
                HitTarget::Note(_) => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn hit_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        self.hits.clear();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_tiles(frame, chunks[1]);
        self.draw_input(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Clipboard Boards ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PREVIOUS_LABEL.len() as u16),
                Constraint::Min(0),
                Constraint::Length(NEXT_LABEL.len() as u16),
            ])
            .split(inner);

        let button_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(PREVIOUS_LABEL).style(button_style), parts[0]);
        frame.render_widget(
            Paragraph::new(NEXT_LABEL)
                .style(button_style)
                .alignment(Alignment::Right),
            parts[2],
        );

        let mut page = vec![Span::styled(
            format!("Page: {}", self.board.id()),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.saved_boards.is_empty() {
            let saved = self
                .saved_boards
                .iter()
                .map(BoardId::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            page.push(Span::styled(
                format!("   saved: {saved}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(page)).alignment(Alignment::Center),
            parts[1],
        );

        self.hits.push((parts[0], HitTarget::Previous));
        self.hits.push((parts[2], HitTarget::Next));
    }

    fn draw_tiles(&mut self, frame: &mut Frame, area: Rect) {
        if self.board.is_empty() {
            let message = Paragraph::new("No notes on this page. Press 'a' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        let columns = column_count(self.board.len());
        let visible = columns.min(columns_that_fit(area.width));
        let (_, selected_column) = tile_position(self.selected);
        let first = first_visible_column(selected_column, visible);
        let cells = grid_cells(area, TILE_ROWS, visible);

        for (index, note) in self.board.notes().iter().enumerate() {
            let (row, column) = tile_position(index);
            if column < first || column >= first + visible {
                continue;
            }
            let tile = cells[row][column - first];

            let mut block = Block::default()
                .borders(Borders::ALL)
                .title(format!("#{}", index + 1))
                .title_top(Line::from(DELETE_MARKER).right_aligned());
            if index == self.selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }
            let paragraph = Paragraph::new(note.as_str())
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, tile);

            self.hits.push((tile, HitTarget::Note(index)));
            if let Some(marker) = delete_marker_area(tile) {
                self.hits.push((marker, HitTarget::DeleteNote(index)));
            }
        }
    }

    fn draw_input(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default().borders(Borders::ALL).title("New note");
        if self.mode == Mode::Editing {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ADD_LABEL.len() as u16),
            ])
            .split(inner);

        // Keep the tail of long input visible next to the cursor.
        let (visible, visible_width) =
            input_tail(&self.input, parts[0].width.saturating_sub(1) as usize);
        frame.render_widget(Paragraph::new(visible), parts[0]);
        frame.render_widget(
            Paragraph::new(ADD_LABEL).style(Style::default().fg(Color::Cyan)),
            parts[1],
        );

        if self.mode == Mode::Editing {
            let cursor_x = parts[0].x + visible_width as u16;
            frame.set_cursor_position((cursor_x, parts[0].y));
        }

        self.hits.push((parts[0], HitTarget::Input));
        self.hits.push((parts[1], HitTarget::Add));
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::Editing => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Add   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Done"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[a]", key_style),
                Span::raw(" New   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Copy   "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[ [ ] ]", key_style),
                Span::raw(" Page   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn move_selection(&mut self, offset: isize) {
        if self.board.is_empty() {
            return;
        }
        let last = self.board.len() - 1;
        let target = self.selected as isize + offset;
        self.selected = target.clamp(0, last as isize) as usize;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.board.len().saturating_sub(1));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let store = Store::open_in_memory().unwrap();
        let app = App::new(store, Box::new(clipboard.clone())).unwrap();
        (app, clipboard)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn click(app: &mut App, area: Rect, button: MouseButton) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column: area.x,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    fn hit_area(app: &App, target: HitTarget) -> Rect {
        app.hits
            .iter()
            .find(|(_, hit)| *hit == target)
            .map(|(area, _)| *area)
            .unwrap()
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }
    }

    #[test]
    fn starts_on_first_board() {
        let (app, _) = app();
        assert_eq!(app.current_board(), BoardId::FIRST);
        assert!(app.notes().is_empty());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn switching_boards_keeps_each_boards_notes() {
        let (mut app, _) = app();
        app.add_note("alpha");
        app.add_note("beta");
        app.navigate(1).unwrap();
        assert_eq!(app.current_board().get(), 2);
        assert!(app.notes().is_empty());

        app.add_note("gamma");
        app.navigate(-1).unwrap();
        assert_eq!(app.notes(), ["alpha", "beta"]);
        app.navigate(1).unwrap();
        assert_eq!(app.notes(), ["gamma"]);
    }

    #[test]
    fn previous_from_first_board_stays_put() {
        let (mut app, _) = app();
        app.add_note("keep me");
        for _ in 0..3 {
            app.navigate(-1).unwrap();
        }
        assert_eq!(app.current_board(), BoardId::FIRST);
        assert_eq!(app.notes(), ["keep me"]);
    }

    #[test]
    fn typed_input_is_added_and_cleared() {
        let (mut app, _) = app();
        app.handle_key(KeyCode::Char('a')).unwrap();
        type_text(&mut app, "  hello  ");
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.notes(), ["hello"]);
        assert_eq!(app.input(), "");
    }

    #[test]
    fn blank_input_is_not_added() {
        let (mut app, _) = app();
        app.handle_key(KeyCode::Tab).unwrap();
        type_text(&mut app, "   ");
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(app.notes().is_empty());
        assert_eq!(app.input(), "   ");
    }

    #[test]
    fn quit_keys_only_apply_outside_the_input() {
        let (mut app, _) = app();
        app.handle_key(KeyCode::Char('i')).unwrap();
        assert!(!app.handle_key(KeyCode::Char('q')).unwrap());
        assert_eq!(app.input(), "q");

        app.handle_key(KeyCode::Esc).unwrap();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn ctrl_and_alt_chords_are_not_typed() {
        let (mut app, _) = app();
        app.handle_key(KeyCode::Char('a')).unwrap();
        let typed = |code, modifiers| KeyEvent::new(code, modifiers);

        app.handle_key_event(typed(KeyCode::Char('n'), KeyModifiers::NONE))
            .unwrap();
        app.handle_key_event(typed(KeyCode::Char('a'), KeyModifiers::CONTROL))
            .unwrap();
        app.handle_key_event(typed(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        app.handle_key_event(typed(KeyCode::Char('O'), KeyModifiers::SHIFT))
            .unwrap();
        app.handle_key_event(typed(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ))
        .unwrap();

        assert_eq!(app.input(), "nO@");
    }

    #[test]
    fn ctrl_chords_do_not_trigger_board_shortcuts() {
        let (mut app, _) = app();
        app.add_note("kept");
        let quit = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(!quit);
        assert_eq!(app.notes(), ["kept"]);
    }

    #[test]
    fn cursor_follows_display_width_of_wide_input() {
        let (mut app, _) = app();
        app.handle_key(KeyCode::Char('a')).unwrap();
        type_text(&mut app, "日本");

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let input = hit_area(&app, HitTarget::Input);
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(input.x + 4, input.y)
        );
    }

    #[test]
    fn delete_key_removes_selected_note() {
        let (mut app, _) = app();
        for note in ["a", "b", "c"] {
            app.add_note(note);
        }
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Char('d')).unwrap();

        assert_eq!(app.notes(), ["a", "c"]);
        assert_eq!(app.selected(), Some(1));
    }

    #[test]
    fn deleting_last_note_moves_selection_back() {
        let (mut app, _) = app();
        app.add_note("a");
        app.add_note("b");
        app.handle_key(KeyCode::Delete).unwrap();
        assert_eq!(app.selected(), Some(0));
        assert!(!app.delete_note(5));
        assert_eq!(app.notes(), ["a"]);
    }

    #[test]
    fn enter_copies_selected_note() {
        let (mut app, clipboard) = app();
        app.add_note("first");
        app.add_note("second");
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("first"));
        assert_eq!(app.notes(), ["first", "second"]);
    }

    #[test]
    fn clipboard_failure_is_reported_not_fatal() {
        let store = Store::open_in_memory().unwrap();
        let mut app = App::new(store, Box::new(BrokenClipboard)).unwrap();
        app.add_note("text");

        assert!(!app.copy_note(0));
        let status = app.status.as_ref().unwrap();
        assert!(matches!(status.kind, StatusKind::Error));
        assert!(status.text.contains("no display"));
    }

    #[test]
    fn horizontal_moves_jump_a_column() {
        let (mut app, _) = app();
        for n in 0..8 {
            app.add_note(&format!("note {n}"));
        }
        app.handle_key(KeyCode::Left).unwrap();
        assert_eq!(app.selected(), Some(2));
        app.handle_key(KeyCode::Right).unwrap();
        assert_eq!(app.selected(), Some(7));
        app.handle_key(KeyCode::Left).unwrap();
        app.handle_key(KeyCode::Left).unwrap();
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn page_keys_navigate_and_save() {
        let (mut app, _) = app();
        app.add_note("saved on leave");
        app.handle_key(KeyCode::Char(']')).unwrap();
        assert_eq!(app.current_board().get(), 2);
        assert_eq!(app.saved_boards, vec![BoardId::FIRST]);

        app.handle_key(KeyCode::PageUp).unwrap();
        assert_eq!(app.notes(), ["saved on leave"]);
    }

    #[test]
    fn render_shows_page_and_notes() {
        let (mut app, _) = app();
        app.add_note("alpha");
        app.add_note("beta");
        let screen = render(&mut app);

        assert!(screen.contains("Page: 1"));
        assert!(screen.contains("alpha"));
        assert!(screen.contains("beta"));
        assert!(screen.contains(DELETE_MARKER));
    }

    #[test]
    fn render_empty_board_shows_hint() {
        let (mut app, _) = app();
        app.navigate(4).unwrap();
        let screen = render(&mut app);
        assert!(screen.contains("Page: 5"));
        assert!(screen.contains("No notes on this page"));
    }

    #[test]
    fn either_mouse_button_copies_a_tile() {
        let (mut app, clipboard) = app();
        app.add_note("left");
        app.add_note("right");
        render(&mut app);

        let first = hit_area(&app, HitTarget::Note(0));
        let second = hit_area(&app, HitTarget::Note(1));
        click(&mut app, Rect { y: first.y + 1, ..first }, MouseButton::Left);
        click(&mut app, Rect { y: second.y + 1, ..second }, MouseButton::Right);

        assert_eq!(clipboard.history(), vec!["left", "right"]);
        assert_eq!(app.notes(), ["left", "right"]);
    }

    #[test]
    fn clicking_delete_marker_removes_the_note() {
        let (mut app, clipboard) = app();
        app.add_note("doomed");
        app.add_note("survivor");
        render(&mut app);

        let marker = hit_area(&app, HitTarget::DeleteNote(0));
        click(&mut app, marker, MouseButton::Left);

        assert_eq!(app.notes(), ["survivor"]);
        assert!(clipboard.history().is_empty());
    }

    #[test]
    fn clicking_navigation_buttons_changes_page() {
        let (mut app, _) = app();
        render(&mut app);
        let next = hit_area(&app, HitTarget::Next);
        click(&mut app, next, MouseButton::Left);
        assert_eq!(app.current_board().get(), 2);

        render(&mut app);
        let previous = hit_area(&app, HitTarget::Previous);
        click(&mut app, previous, MouseButton::Left);
        click(&mut app, previous, MouseButton::Left);
        assert_eq!(app.current_board(), BoardId::FIRST);
    }

    #[test]
    fn clicking_add_submits_the_input() {
        let (mut app, _) = app();
        render(&mut app);
        let input = hit_area(&app, HitTarget::Input);
        let add = hit_area(&app, HitTarget::Add);
        click(&mut app, input, MouseButton::Left);
        type_text(&mut app, "from mouse");
        click(&mut app, add, MouseButton::Left);
        assert_eq!(app.notes(), ["from mouse"]);
    }
}
