//! Terminal front end: raw-mode guard, event loop, and screen drawing.
//!
//! Three screens, one per assignment relation, each showing the available
//! and assigned panes side by side. Keyboard drives selection and
//! transfer; the mouse additionally supports click-select and
//! drag-and-drop between panes.

use std::collections::HashSet;
use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use log::{debug, error};
use picklist::prelude::*;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::records::{Location, SapCode, UserAccount};
use crate::session::{AssignmentSession, MemorySavePort};
use crate::store::{Catalog, SLICE_COUNT, StagedLoader, StoreError};

/// Puts the terminal into raw mode for the duration of the program.
///
/// Restores the terminal on drop and from the panic hook, so a crash in
/// the event loop does not leave the shell in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    execute!(
        io::stdout(),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
struct Rect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl Rect {
    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x + self.width
            && row >= self.y
            && row < self.y + self.height
    }
}

/// Where the two panes landed in the last frame, for mouse hit tests.
#[derive(Debug, Clone, Copy, Default)]
struct PanesLayout {
    source: Rect,
    picked: Rect,
}

impl PanesLayout {
    /// The pane under the pointer, and the row within it if the pointer
    /// is below the pane header.
    fn hit(&self, column: u16, row: u16) -> Option<(ListSide, Option<usize>)> {
        let panes = [
            (ListSide::Source, self.source),
            (ListSide::Picked, self.picked),
        ];
        for (side, rect) in panes {
            if rect.contains(column, row) {
                let row_index = (row > rect.y).then(|| (row - rect.y - 1) as usize);
                return Some((side, row_index));
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    RoleMembers,
    ProjectLocations,
    JobCodes,
}

impl Screen {
    fn title(&self) -> &'static str {
        match self {
            Self::RoleMembers => "Role members",
            Self::ProjectLocations => "Project locations",
            Self::JobCodes => "Job SAP codes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Filter,
}

/// Which pane has keyboard focus, plus a cursor per pane.
///
/// Cursors index into the visible rows of their pane, not the backing
/// partition.
#[derive(Debug, Clone, Copy)]
struct PaneFocus {
    side: ListSide,
    cursor_source: usize,
    cursor_picked: usize,
}

impl PaneFocus {
    fn new() -> Self {
        Self {
            side: ListSide::Source,
            cursor_source: 0,
            cursor_picked: 0,
        }
    }

    fn cursor(&self, side: ListSide) -> usize {
        match side {
            ListSide::Source => self.cursor_source,
            ListSide::Picked => self.cursor_picked,
        }
    }

    fn cursor_mut(&mut self, side: ListSide) -> &mut usize {
        match side {
            ListSide::Source => &mut self.cursor_source,
            ListSide::Picked => &mut self.cursor_picked,
        }
    }

    /// Pull both cursors back inside their pane's visible rows.
    fn clamp<T: PickItem>(&mut self, list: &DualList<T>) {
        for side in [ListSide::Source, ListSide::Picked] {
            let rows = list.visible_indices(side).len();
            let cursor = self.cursor_mut(side);
            if rows == 0 {
                *cursor = 0;
            } else if *cursor >= rows {
                *cursor = rows - 1;
            }
        }
    }
}

/// One editing session per relation, built once the catalog is ready.
struct Sessions {
    role_members: AssignmentSession<UserAccount>,
    project_locations: AssignmentSession<Location>,
    job_codes: AssignmentSession<SapCode>,
}

impl Sessions {
    fn from_catalog(catalog: &Catalog) -> Result<Self, StoreError> {
        let incomplete = || StoreError::new("catalog incomplete");
        let users = catalog.users.as_ready().ok_or_else(incomplete)?.clone();
        let locations = catalog.locations.as_ready().ok_or_else(incomplete)?.clone();
        let codes = catalog.sap_codes.as_ready().ok_or_else(incomplete)?.clone();
        let role = catalog
            .roles
            .as_ready()
            .and_then(|roles| roles.first())
            .ok_or_else(incomplete)?;
        let project = catalog
            .projects
            .as_ready()
            .and_then(|projects| projects.first())
            .ok_or_else(incomplete)?;
        let job = catalog
            .jobs
            .as_ready()
            .and_then(|jobs| jobs.first())
            .ok_or_else(incomplete)?;

        // Baseline assignments the backend would normally hand back.
        let members: HashSet<String> = ["afischer".to_string(), "bkeller".to_string()].into();
        let sites: HashSet<String> = ["MUC".to_string()].into();
        let postings: HashSet<String> = HashSet::new();

        let build = |e: PickError| StoreError::new(e.to_string());
        Ok(Self {
            role_members: AssignmentSession::new("role-members", role.name.clone(), users, &members)
                .map_err(build)?,
            project_locations: AssignmentSession::new(
                "project-locations",
                project.name.clone(),
                locations,
                &sites,
            )
            .map_err(build)?,
            job_codes: AssignmentSession::new("job-sap-codes", job.name.clone(), codes, &postings)
                .map_err(build)?,
        })
    }
}

/// Top-level console state driving the event loop.
struct ConsoleApp {
    catalog: Catalog,
    loader: StagedLoader,
    load_error: Option<StoreError>,
    sessions: Option<Sessions>,
    save_port: MemorySavePort,
    screen: Screen,
    focus: PaneFocus,
    mode: InputMode,
    drag_hover: Option<ListSide>,
    layout: PanesLayout,
    status: String,
    should_quit: bool,
}

impl ConsoleApp {
    fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            loader: StagedLoader::new(),
            load_error: None,
            sessions: None,
            save_port: MemorySavePort::new(),
            screen: Screen::RoleMembers,
            focus: PaneFocus::new(),
            mode: InputMode::Normal,
            drag_hover: None,
            layout: PanesLayout::default(),
            status: String::from("Loading catalog..."),
            should_quit: false,
        }
    }

    /// Advance the staged loader; build the sessions once every slice
    /// has settled.
    fn tick(&mut self) {
        if self.sessions.is_some() || self.load_error.is_some() {
            return;
        }
        if self.loader.advance(&mut self.catalog) {
            return;
        }
        if !self.catalog.all_ready() {
            let err = self
                .catalog
                .first_error()
                .cloned()
                .unwrap_or_else(|| StoreError::new("catalog incomplete"));
            self.status = format!("Load failed: {}", err);
            self.load_error = Some(err);
            return;
        }
        match Sessions::from_catalog(&self.catalog) {
            Ok(sessions) => {
                self.sessions = Some(sessions);
                self.status = String::from("Catalog loaded");
            }
            Err(err) => {
                error!("building sessions: {}", err);
                self.status = format!("Load failed: {}", err);
                self.load_error = Some(err);
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => {}
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.mode == InputMode::Filter {
            self.handle_filter_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('1') => {
                self.switch_screen(Screen::RoleMembers);
                return;
            }
            KeyCode::Char('2') => {
                self.switch_screen(Screen::ProjectLocations);
                return;
            }
            KeyCode::Char('3') => {
                self.switch_screen(Screen::JobCodes);
                return;
            }
            KeyCode::Tab => {
                self.focus.side = self.focus.side.opposite();
                return;
            }
            _ => {}
        }
        let Some(sessions) = self.sessions.as_mut() else {
            return;
        };
        match self.screen {
            Screen::RoleMembers => Self::session_key(
                &mut sessions.role_members,
                &mut self.save_port,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
            Screen::ProjectLocations => Self::session_key(
                &mut sessions.project_locations,
                &mut self.save_port,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
            Screen::JobCodes => Self::session_key(
                &mut sessions.job_codes,
                &mut self.save_port,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.focus = PaneFocus::new();
            self.drag_hover = None;
            self.status = screen.title().to_string();
        }
    }

    fn session_key<T: PickItem + Serialize>(
        session: &mut AssignmentSession<T>,
        port: &mut MemorySavePort,
        focus: &mut PaneFocus,
        mode: &mut InputMode,
        status: &mut String,
        key: KeyEvent,
    ) {
        let side = focus.side;
        let cursor = focus.cursor(side);
        match key.code {
            KeyCode::Up => {
                let cursor = focus.cursor_mut(side);
                *cursor = cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let rows = session.list.visible_indices(side).len();
                let cursor = focus.cursor_mut(side);
                if rows > 0 && *cursor + 1 < rows {
                    *cursor += 1;
                }
            }
            KeyCode::Char(' ') => match session.list.handle_click(side, cursor, true, false) {
                Ok(_) => *status = format!("{} selected", session.list.selected_count()),
                Err(e) => Self::report(status, e),
            },
            KeyCode::Char('v') => match session.list.handle_click(side, cursor, false, true) {
                Ok(_) => *status = format!("{} selected", session.list.selected_count()),
                Err(e) => Self::report(status, e),
            },
            KeyCode::Enter => match session.list.handle_activate(side, cursor) {
                Ok((_, events)) => {
                    if let Some(transfer) = events.transfer {
                        *status =
                            format!("Moved {} to {}", transfer.ids.len(), pane_name(transfer.to));
                    }
                }
                Err(e) => Self::report(status, e),
            },
            KeyCode::Left => {
                let (_, events) = session.list.handle_move_selected(ListSide::Source);
                if let Some(transfer) = events.transfer {
                    *status = format!("Moved {} to {}", transfer.ids.len(), pane_name(transfer.to));
                }
            }
            KeyCode::Right => {
                let (_, events) = session.list.handle_move_selected(ListSide::Picked);
                if let Some(transfer) = events.transfer {
                    *status = format!("Moved {} to {}", transfer.ids.len(), pane_name(transfer.to));
                }
            }
            KeyCode::Char('a') => {
                session.list.select_all(side);
                *status = format!("{} selected", session.list.selected_count());
            }
            KeyCode::Esc => {
                if session.list.is_dragging() {
                    session.list.cancel_drag();
                    *status = String::from("Drag cancelled");
                } else {
                    session.list.clear_selection();
                    *status = String::from("Selection cleared");
                }
            }
            KeyCode::Char('[') => {
                Self::reorder_row(session, focus, status, -1);
            }
            KeyCode::Char(']') => {
                Self::reorder_row(session, focus, status, 1);
            }
            KeyCode::Char('/') => {
                *mode = InputMode::Filter;
                *status = format!("Filtering {}", pane_name(side));
            }
            KeyCode::Char('s') => match session.save(port) {
                Ok(()) => {
                    let assigned = session.last_saved().map_or(0, |r| r.shown.len());
                    *status = format!("Saved '{}' ({} assigned)", session.relation(), assigned);
                    debug!("{} submission(s) recorded this run", port.submissions().len());
                }
                Err(e) => Self::report(status, e),
            },
            _ => {}
        }
        focus.clamp(&session.list);
    }

    /// Swap the row under the cursor with its visible neighbor.
    fn reorder_row<T: PickItem>(
        session: &mut AssignmentSession<T>,
        focus: &mut PaneFocus,
        status: &mut String,
        direction: i64,
    ) {
        let side = focus.side;
        let cursor = focus.cursor(side);
        let visible = session.list.visible_indices(side);
        let neighbor = if direction < 0 {
            let Some(up) = cursor.checked_sub(1) else {
                return;
            };
            up
        } else {
            let down = cursor + 1;
            if down >= visible.len() {
                return;
            }
            down
        };
        let (Some(&from), Some(&to)) = (visible.get(cursor), visible.get(neighbor)) else {
            return;
        };
        match session.list.handle_reorder(side, from, to) {
            Ok((result, _)) => {
                if result.is_handled() {
                    *focus.cursor_mut(side) = neighbor;
                    *status = String::from("Reordered");
                }
            }
            Err(e) => Self::report(status, e),
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let Some(sessions) = self.sessions.as_mut() else {
            self.mode = InputMode::Normal;
            return;
        };
        match self.screen {
            Screen::RoleMembers => Self::filter_key(
                &mut sessions.role_members,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
            Screen::ProjectLocations => Self::filter_key(
                &mut sessions.project_locations,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
            Screen::JobCodes => Self::filter_key(
                &mut sessions.job_codes,
                &mut self.focus,
                &mut self.mode,
                &mut self.status,
                key,
            ),
        }
    }

    /// Filter-mode editing: every keystroke re-applies the filter to the
    /// focused pane.
    fn filter_key<T: PickItem>(
        session: &mut AssignmentSession<T>,
        focus: &mut PaneFocus,
        mode: &mut InputMode,
        status: &mut String,
        key: KeyEvent,
    ) {
        let side = focus.side;
        match key.code {
            KeyCode::Esc => {
                session.list.clear_filter();
                *mode = InputMode::Normal;
                *status = String::from("Filter cleared");
            }
            KeyCode::Enter => {
                *mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                let mut text = session.list.filter_text().to_string();
                text.pop();
                session.list.set_filter(side, text);
            }
            KeyCode::Char(c) => {
                let mut text = session.list.filter_text().to_string();
                text.push(c);
                session.list.set_filter(side, text);
            }
            _ => {}
        }
        focus.clamp(&session.list);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(sessions) = self.sessions.as_mut() else {
            return;
        };
        let layout = self.layout;
        match self.screen {
            Screen::RoleMembers => Self::session_mouse(
                &mut sessions.role_members,
                &mut self.focus,
                &mut self.drag_hover,
                &mut self.status,
                layout,
                mouse,
            ),
            Screen::ProjectLocations => Self::session_mouse(
                &mut sessions.project_locations,
                &mut self.focus,
                &mut self.drag_hover,
                &mut self.status,
                layout,
                mouse,
            ),
            Screen::JobCodes => Self::session_mouse(
                &mut sessions.job_codes,
                &mut self.focus,
                &mut self.drag_hover,
                &mut self.status,
                layout,
                mouse,
            ),
        }
    }

    fn session_mouse<T: PickItem>(
        session: &mut AssignmentSession<T>,
        focus: &mut PaneFocus,
        drag_hover: &mut Option<ListSide>,
        status: &mut String,
        layout: PanesLayout,
        mouse: MouseEvent,
    ) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((side, row)) = layout.hit(mouse.column, mouse.row) else {
                    return;
                };
                focus.side = side;
                let Some(row) = row else {
                    return;
                };
                let ctrl = mouse.modifiers.contains(KeyModifiers::CONTROL);
                let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
                match session.list.handle_click(side, row, ctrl, shift) {
                    Ok((EventResult::StartDrag, _)) => {
                        *focus.cursor_mut(side) = row;
                        if let Some(id) = session.list.visible_id(side, row)
                            && let Err(e) = session.list.begin_drag(&id)
                        {
                            Self::report(status, e);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => Self::report(status, e),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if !session.list.is_dragging() {
                    return;
                }
                *drag_hover = layout.hit(mouse.column, mouse.row).map(|(side, _)| side);
                if drag_hover.is_some() {
                    session.list.drag_enter();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !session.list.is_dragging() {
                    return;
                }
                let target = layout.hit(mouse.column, mouse.row).map(|(side, _)| side);
                *drag_hover = None;
                match target {
                    Some(side) => match session.list.handle_drop(side) {
                        Ok((_, events)) => {
                            if let Some(transfer) = events.transfer {
                                *status = format!(
                                    "Dropped {} into {}",
                                    transfer.ids.len(),
                                    pane_name(transfer.to)
                                );
                            }
                        }
                        Err(e) => Self::report(status, e),
                    },
                    None => session.list.cancel_drag(),
                }
                focus.clamp(&session.list);
            }
            _ => {}
        }
    }

    fn report(status: &mut String, err: impl std::fmt::Display) {
        error!("{}", err);
        *status = format!("Error: {}", err);
    }

    // ---- Drawing ----

    fn draw(&mut self, out: &mut Stdout) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(out, Clear(ClearType::All))?;

        self.draw_header(out)?;
        match self.sessions.as_ref() {
            Some(sessions) => {
                self.layout = match self.screen {
                    Screen::RoleMembers => Self::draw_session(
                        out,
                        &sessions.role_members,
                        &self.focus,
                        self.drag_hover,
                        width,
                        height,
                    )?,
                    Screen::ProjectLocations => Self::draw_session(
                        out,
                        &sessions.project_locations,
                        &self.focus,
                        self.drag_hover,
                        width,
                        height,
                    )?,
                    Screen::JobCodes => Self::draw_session(
                        out,
                        &sessions.job_codes,
                        &self.focus,
                        self.drag_hover,
                        width,
                        height,
                    )?,
                };
            }
            None => self.draw_loading(out)?,
        }
        self.draw_footer(out, width, height)?;
        out.flush()
    }

    fn draw_header(&self, out: &mut Stdout) -> io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(1, 0),
            SetAttribute(Attribute::Bold),
            Print("Opsdesk"),
            SetAttribute(Attribute::Reset)
        )?;
        let tabs = [
            ("1", Screen::RoleMembers),
            ("2", Screen::ProjectLocations),
            ("3", Screen::JobCodes),
        ];
        let mut x: u16 = 11;
        for (key, screen) in tabs {
            let tab = format!("[{}] {}", key, screen.title());
            queue!(out, cursor::MoveTo(x, 0))?;
            if screen == self.screen {
                queue!(
                    out,
                    SetForegroundColor(Color::Cyan),
                    SetAttribute(Attribute::Bold),
                    Print(&tab),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            } else {
                queue!(out, SetForegroundColor(Color::DarkGrey), Print(&tab), ResetColor)?;
            }
            x += tab.width() as u16 + 3;
        }
        Ok(())
    }

    fn draw_loading(&self, out: &mut Stdout) -> io::Result<()> {
        let trail = if self.catalog.any_loading() { "..." } else { "" };
        queue!(
            out,
            cursor::MoveTo(1, 2),
            Print(format!(
                "Loading catalog ({}/{}){}",
                self.catalog.ready_count(),
                SLICE_COUNT,
                trail
            ))
        )?;
        for (i, (label, state)) in self.catalog.slice_statuses().into_iter().enumerate() {
            let color = match state {
                "ready" => Color::Green,
                "loading" => Color::Yellow,
                "failed" => Color::Red,
                _ => Color::DarkGrey,
            };
            queue!(
                out,
                cursor::MoveTo(3, 4 + i as u16),
                Print(format!("{:<12}", label)),
                SetForegroundColor(color),
                Print(state),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_session<T: PickItem>(
        out: &mut Stdout,
        session: &AssignmentSession<T>,
        focus: &PaneFocus,
        drag_hover: Option<ListSide>,
        width: u16,
        height: u16,
    ) -> io::Result<PanesLayout> {
        let dirty = if session.is_dirty() { " *" } else { "" };
        queue!(
            out,
            cursor::MoveTo(1, 2),
            SetAttribute(Attribute::Bold),
            Print(format!("{}{}", session.owner_label(), dirty)),
            SetAttribute(Attribute::Reset)
        )?;

        let top: u16 = 4;
        let bottom = height.saturating_sub(3);
        let pane_height = bottom.saturating_sub(top).max(1);
        let pane_width = width.saturating_sub(3) / 2;
        let source = Rect {
            x: 1,
            y: top,
            width: pane_width,
            height: pane_height,
        };
        let picked = Rect {
            x: pane_width + 2,
            y: top,
            width: pane_width,
            height: pane_height,
        };

        Self::draw_pane(out, &session.list, ListSide::Source, source, focus, drag_hover)?;
        Self::draw_pane(out, &session.list, ListSide::Picked, picked, focus, drag_hover)?;
        Ok(PanesLayout { source, picked })
    }

    fn draw_pane<T: PickItem>(
        out: &mut Stdout,
        list: &DualList<T>,
        side: ListSide,
        rect: Rect,
        focus: &PaneFocus,
        drag_hover: Option<ListSide>,
    ) -> io::Result<()> {
        let rows = list.visible_items(side);
        let focused = focus.side == side;
        let drop_target = drag_hover == Some(side) && list.is_drag_over();
        let mut title = format!("{} ({}/{})", pane_name(side), rows.len(), list.len(side));
        if drop_target {
            title.push_str(" [drop]");
        }

        queue!(out, cursor::MoveTo(rect.x, rect.y))?;
        if focused {
            queue!(out, SetForegroundColor(Color::Cyan), SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            Print(fit(&title, rect.width as usize)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        let max_rows = rect.height.saturating_sub(1) as usize;
        for (row, item) in rows.iter().enumerate().take(max_rows) {
            let selected = list.is_selected(item.id());
            let marker = if selected { '*' } else { ' ' };
            let label = fit(item.label(), rect.width.saturating_sub(2) as usize);
            queue!(out, cursor::MoveTo(rect.x, rect.y + 1 + row as u16))?;
            if focused && row == focus.cursor(side) {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            if selected {
                queue!(out, SetForegroundColor(Color::Yellow))?;
            }
            queue!(
                out,
                Print(format!("{} {}", marker, label)),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_footer(&self, out: &mut Stdout, width: u16, height: u16) -> io::Result<()> {
        if height < 5 {
            return Ok(());
        }
        if let Some(sessions) = self.sessions.as_ref() {
            let list_filter = match self.screen {
                Screen::RoleMembers => (
                    sessions.role_members.list.filter_text(),
                    sessions.role_members.list.filter_side(),
                ),
                Screen::ProjectLocations => (
                    sessions.project_locations.list.filter_text(),
                    sessions.project_locations.list.filter_side(),
                ),
                Screen::JobCodes => (
                    sessions.job_codes.list.filter_text(),
                    sessions.job_codes.list.filter_side(),
                ),
            };
            let (text, side) = list_filter;
            if self.mode == InputMode::Filter || !text.is_empty() {
                let tail = if self.mode == InputMode::Filter { "_" } else { "" };
                queue!(
                    out,
                    cursor::MoveTo(1, height - 3),
                    Print(format!("Filter [{}]: {}{}", pane_name(side), text, tail))
                )?;
            }
        }

        queue!(
            out,
            cursor::MoveTo(1, height - 2),
            Print(fit(&self.status, width.saturating_sub(2) as usize))
        )?;

        let help = match self.mode {
            InputMode::Normal => {
                "tab panes | up/down move | space select | v range | enter transfer | \
                 left/right move selected | [ ] reorder | / filter | s save | 1-3 screens | q quit"
            }
            InputMode::Filter => "type to narrow | backspace erase | enter keep | esc clear",
        };
        queue!(
            out,
            cursor::MoveTo(1, height - 1),
            SetForegroundColor(Color::DarkGrey),
            Print(fit(help, width.saturating_sub(2) as usize)),
            ResetColor
        )?;
        Ok(())
    }
}

fn pane_name(side: ListSide) -> &'static str {
    match side {
        ListSide::Source => "Available",
        ListSide::Picked => "Assigned",
    }
}

/// Truncate to `width` terminal columns, appending `…` when cut.
fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Run the console until the user quits.
pub fn run() -> io::Result<()> {
    let _guard = TerminalGuard::new()?;
    let mut out = io::stdout();
    let mut app = ConsoleApp::new();

    debug!("console started");
    while !app.should_quit {
        app.tick();
        app.draw(&mut out)?;
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
            // Drain any additional pending events before redrawing
            while event::poll(Duration::ZERO)? {
                app.handle_event(event::read()?);
            }
        }
    }
    debug!("console exiting");
    Ok(())
}
