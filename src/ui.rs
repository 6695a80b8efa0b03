use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use crossterm::{ExecutableCommand, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::{Listing, PaletteColor, Task, TaskControl, format_time};
use crate::navigation::{BarButton, EditorOption, Navigator, Screen, SettingsMode};
use crate::store::{Store, StoreError};

const FOCUSED_BORDER_COLOR: Color = Color::Yellow;
const INACTIVE_BORDER_COLOR: Color = Color::DarkGray;
const HIGHLIGHT_BACKGROUND_COLOR: Color = Color::Rgb(42, 45, 52);
const PLACEHOLDER_COLOR: Color = Color::DarkGray;
const GAUGE_WIDTH: usize = 20;

pub fn run_dashboard(config: &AppConfig) -> Result<(), Box<dyn Error>> {
	enable_raw_mode()?;
	let mut stdout = io::stdout();
	stdout.execute(EnterAlternateScreen)?;
	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let mut app = App::new(Store::new(config.default_minutes, config.default_color), Local::now());
	info!(tick_millis = config.tick_millis, "dashboard started");
	let result = run_event_loop(&mut terminal, &mut app, config.tick_interval());
	info!(
		tasks = app.store.tasks().len(),
		listings = app.store.listings().len(),
		"dashboard stopped"
	);

	disable_raw_mode()?;
	execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
	terminal.show_cursor()?;

	result
}

/// Input and ticks are drained from one loop, so the store never sees two
/// mutations at once.
fn run_event_loop(
	terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
	app: &mut App,
	tick_interval: Duration,
) -> Result<(), Box<dyn Error>> {
	let mut next_tick = Instant::now() + tick_interval;

	loop {
		app.clamp_selection();
		terminal.draw(|frame| draw_dashboard(frame, &*app, Local::now()))?;

		let timeout = next_tick.saturating_duration_since(Instant::now());
		if event::poll(timeout)? {
			if let CEvent::Key(key) = event::read()? {
				if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
					break;
				}
			}
		}

		let now = Instant::now();
		while now >= next_tick {
			app.store.tick();
			next_tick += tick_interval;
		}
	}

	Ok(())
}

fn draw_dashboard(frame: &mut Frame, app: &App, now: DateTime<Local>) {
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Min(6),
			Constraint::Length(3),
			Constraint::Length(4),
		])
		.split(frame.area());

	render_header(frame, layout[0], app);
	match app.nav.screen() {
		Screen::Tasks => render_tasks(frame, layout[1], app),
		Screen::Listings => render_listings(frame, layout[1], app),
		Screen::About => render_about(frame, layout[1], app, now),
		Screen::Settings => render_editor(frame, layout[1], app),
	}
	render_button_bar(frame, layout[2], app);
	render_footer(frame, layout[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
	let heading = Line::from(Span::styled(
		app.nav.title(),
		Style::default().add_modifier(Modifier::BOLD),
	))
	.centered();
	let header = Paragraph::new(heading).block(
		Block::default()
			.borders(Borders::ALL)
			.title("Procos")
			.border_style(Style::default().fg(FOCUSED_BORDER_COLOR)),
	);
	frame.render_widget(header, area);
}

fn render_tasks(frame: &mut Frame, area: Rect, app: &App) {
	let tasks = app.store.tasks();
	let items = if tasks.is_empty() {
		vec![ListItem::new("(no tasks yet, press n to add one)")]
	} else {
		tasks.iter().map(task_item).collect::<Vec<_>>()
	};

	let mut state = ListState::default();
	if !tasks.is_empty() {
		state.select(Some(app.selected_task));
	}

	let list = List::new(items)
		.block(panel_block("Tasks"))
		.highlight_style(Style::default().bg(HIGHLIGHT_BACKGROUND_COLOR).add_modifier(Modifier::BOLD));
	frame.render_stateful_widget(list, area, &mut state);
}

fn task_item(task: &Task) -> ListItem<'static> {
	let style = palette_style(task.color);
	let control = match task.control() {
		TaskControl::Start => "[start]",
		TaskControl::Pause => "[pause]",
		TaskControl::Done => "[done] ",
	};

	ListItem::new(vec![
		Line::from(vec![
			Span::styled(format!("{control} "), style.add_modifier(Modifier::BOLD)),
			Span::styled(task.title.clone(), style),
		]),
		Line::from(vec![
			Span::raw(format!("        {} ", progress_bar(task.progress_ratio(), GAUGE_WIDTH))),
			Span::styled(format_time(task.progress, true), Style::default().add_modifier(Modifier::BOLD)),
			Span::raw(format!(" | Out of {}", format_time(task.duration, false))),
		]),
	])
}

fn render_listings(frame: &mut Frame, area: Rect, app: &App) {
	let listings = app.store.listings();
	let items = if listings.is_empty() {
		vec![ListItem::new("(nothing to do, press n to add a listing)")]
	} else {
		listings.iter().map(listing_item).collect::<Vec<_>>()
	};

	let mut state = ListState::default();
	if !listings.is_empty() {
		state.select(Some(app.selected_listing));
	}

	let list = List::new(items)
		.block(panel_block("To-do"))
		.highlight_style(Style::default().bg(HIGHLIGHT_BACKGROUND_COLOR).add_modifier(Modifier::BOLD));
	frame.render_stateful_widget(list, area, &mut state);
}

fn listing_item(listing: &Listing) -> ListItem<'static> {
	let check = if listing.complete { "[x] " } else { "[ ] " };
	let style = palette_style(listing.color);
	let title_style = if listing.complete {
		style.add_modifier(Modifier::CROSSED_OUT)
	} else {
		style
	};
	ListItem::new(Line::from(vec![
		Span::styled(check, style.add_modifier(Modifier::BOLD)),
		Span::styled(listing.title.clone(), title_style),
	]))
}

fn render_about(frame: &mut Frame, area: Rect, app: &App, now: DateTime<Local>) {
	let uptime = (now - app.started_at).num_seconds().max(0) as u64;
	let lines = vec![
		Line::from(format!("Procos {}", env!("CARGO_PKG_VERSION"))),
		Line::from("Countdown tasks and a to-do list in one place."),
		Line::from(""),
		Line::from(format!("Session started: {}", app.started_at.format("%Y-%m-%d %H:%M:%S"))),
		Line::from(format!("Uptime: {}", format_time(uptime, true))),
		Line::from(format!(
			"Tasks: {} | Listings: {}",
			app.store.tasks().len(),
			app.store.listings().len()
		)),
	];
	frame.render_widget(Paragraph::new(lines).block(panel_block("About")), area);
}

fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
	let Some(mode) = app.nav.mode() else {
		return;
	};
	let draft = app.store.draft();
	let options = mode.options();

	let items = options
		.iter()
		.map(|option| {
			let line = match option {
				EditorOption::Title => text_field_line(option.label(), &draft.title, mode.title_placeholder()),
				EditorOption::Duration => text_field_line("Duration (min)", &draft.duration_text, "60"),
				EditorOption::Color => color_field_line(draft.color),
				EditorOption::DeleteTask | EditorOption::DeleteListing => Line::from(Span::styled(
					format!("[ {} ]", option.label()),
					Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
				)),
				EditorOption::ResetTask => Line::from(Span::styled(
					format!("[ {} ]", option.label()),
					Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
				)),
			};
			ListItem::new(line)
		})
		.collect::<Vec<_>>();

	let mut state = ListState::default();
	if !options.is_empty() {
		state.select(Some(app.editor_focus.min(options.len() - 1)));
	}

	let list = List::new(items)
		.block(panel_block("Editor"))
		.highlight_symbol(">> ")
		.highlight_style(Style::default().bg(HIGHLIGHT_BACKGROUND_COLOR));
	frame.render_stateful_widget(list, area, &mut state);
}

fn text_field_line(label: &str, value: &str, placeholder: &str) -> Line<'static> {
	let value = if value.is_empty() {
		Span::styled(placeholder.to_string(), Style::default().fg(PLACEHOLDER_COLOR))
	} else {
		Span::raw(value.to_string())
	};
	Line::from(vec![Span::raw(format!("{label}: ")), value])
}

fn color_field_line(selected: PaletteColor) -> Line<'static> {
	let mut spans = vec![Span::raw("Color: ")];
	for color in PaletteColor::ALL {
		let swatch = if color == selected { "[##]" } else { " ## " };
		spans.push(Span::styled(swatch, palette_style(color)));
	}
	spans.push(Span::raw(format!(" {}", selected.name())));
	Line::from(spans)
}

fn render_button_bar(frame: &mut Frame, area: Rect, app: &App) {
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage(33),
			Constraint::Percentage(34),
			Constraint::Percentage(33),
		])
		.split(area);

	let screen = app.nav.screen();
	for (button, column) in app.nav.buttons().into_iter().zip(columns.iter()) {
		if button == BarButton::None {
			continue;
		}
		let label = Line::from(format!("{} {}", button_key(button, screen), button_label(button, screen))).centered();
		let style = if button == BarButton::Plus {
			Style::default().fg(FOCUSED_BORDER_COLOR).add_modifier(Modifier::BOLD)
		} else {
			Style::default().fg(INACTIVE_BORDER_COLOR)
		};
		let widget = Paragraph::new(label).block(Block::default().borders(Borders::ALL).border_style(style));
		frame.render_widget(widget, *column);
	}
}

fn button_key(button: BarButton, screen: Screen) -> &'static str {
	match (button, screen) {
		(BarButton::Plus, Screen::Settings) => "[Enter]",
		(BarButton::Plus, _) => "[n]",
		(BarButton::List, _) => "[l]",
		(BarButton::Tasks, _) => "[t]",
		(BarButton::Reset, _) => "[r]",
		(BarButton::None, _) => "",
	}
}

fn button_label(button: BarButton, screen: Screen) -> &'static str {
	if button == BarButton::Plus && screen == Screen::Settings {
		"Save"
	} else {
		button.label()
	}
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
	let hint = match app.nav.screen() {
		Screen::Tasks => "j/k move | space start/pause | e edit | a about | s settings | q quit",
		Screen::Listings => "j/k move | space check | e edit | a about | s settings | q quit",
		Screen::About => "t tasks | l list | q quit",
		Screen::Settings => "Tab/arrows field | type to edit | left/right color | Enter save/run | Esc cancel",
	};
	let footer = Paragraph::new(vec![Line::from(hint), Line::from(app.status.clone())])
		.block(Block::default().borders(Borders::ALL).title("Shortcuts"));
	frame.render_widget(footer, area);
}

fn panel_block(title: &str) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.title(title.to_string())
		.border_style(Style::default().fg(INACTIVE_BORDER_COLOR))
}

fn progress_bar(ratio: f64, width: usize) -> String {
	let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
	format!("[{}{}]", "=".repeat(filled), "-".repeat(width - filled))
}

fn palette_style(color: PaletteColor) -> Style {
	Style::default().fg(terminal_color(color))
}

fn terminal_color(color: PaletteColor) -> Color {
	match color {
		PaletteColor::Red => Color::Red,
		PaletteColor::Orange => Color::Rgb(255, 165, 0),
		PaletteColor::Yellow => Color::Yellow,
		PaletteColor::Green => Color::Green,
		PaletteColor::Cyan => Color::Cyan,
		PaletteColor::Blue => Color::Blue,
		PaletteColor::Purple => Color::Magenta,
		PaletteColor::Brown => Color::Rgb(150, 75, 0),
		PaletteColor::Gray => Color::Gray,
	}
}

/// Returns `true` when the dashboard should quit.
fn handle_key(app: &mut App, code: KeyCode) -> bool {
	let result = match app.nav.screen() {
		Screen::Settings => handle_editor_key(app, code),
		Screen::Tasks | Screen::Listings | Screen::About => match handle_browse_key(app, code) {
			Some(result) => result,
			None => return true,
		},
	};

	if let Err(err) = result {
		app.status = format!("error: {err}");
	}
	app.clamp_selection();
	false
}

/// `None` asks the caller to quit.
fn handle_browse_key(app: &mut App, code: KeyCode) -> Option<Result<(), StoreError>> {
	let screen = app.nav.screen();
	let result = match code {
		KeyCode::Char('q') | KeyCode::Esc => return None,
		KeyCode::Char('l') => app.press(BarButton::List),
		KeyCode::Char('t') => app.press(BarButton::Tasks),
		KeyCode::Char('n') | KeyCode::Char('+') => app.press(BarButton::Plus),
		KeyCode::Char('r') => {
			let result = app.press(BarButton::Reset);
			if result.is_ok() && screen != Screen::About {
				app.status = "Reset".to_string();
			}
			result
		}
		KeyCode::Char('a') => {
			app.nav.switch_to(Screen::About);
			Ok(())
		}
		KeyCode::Char('s') => {
			app.nav.open_app_settings(&mut app.store);
			app.editor_focus = 0;
			Ok(())
		}
		KeyCode::Up | KeyCode::Char('k') => {
			app.move_selection(-1);
			Ok(())
		}
		KeyCode::Down | KeyCode::Char('j') => {
			app.move_selection(1);
			Ok(())
		}
		KeyCode::Char(' ') => app.toggle_selected(),
		KeyCode::Enter | KeyCode::Char('e') => app.configure_selected(),
		_ => Ok(()),
	};
	Some(result)
}

fn handle_editor_key(app: &mut App, code: KeyCode) -> Result<(), StoreError> {
	let options = app.nav.options();
	let Some(focused) = options.get(app.editor_focus).copied() else {
		app.editor_focus = 0;
		return Ok(());
	};

	match code {
		KeyCode::Esc => {
			app.nav.cancel(&mut app.store);
			app.status = "Edit cancelled".to_string();
		}
		KeyCode::Tab | KeyCode::Down => {
			app.editor_focus = (app.editor_focus + 1) % options.len();
		}
		KeyCode::BackTab | KeyCode::Up => {
			app.editor_focus = (app.editor_focus + options.len() - 1) % options.len();
		}
		KeyCode::Enter if focused.is_action() => {
			app.nav.run_action(focused, &mut app.store)?;
			app.status = format!("{} done", focused.label());
		}
		KeyCode::Enter => {
			let mode = app.nav.mode();
			app.press(BarButton::Plus)?;
			if mode != Some(SettingsMode::ConfigureApp) {
				app.status = "Saved".to_string();
			}
		}
		KeyCode::Left if focused == EditorOption::Color => {
			let draft = app.store.draft_mut();
			draft.color = draft.color.cycle(-1);
		}
		KeyCode::Right if focused == EditorOption::Color => {
			let draft = app.store.draft_mut();
			draft.color = draft.color.cycle(1);
		}
		KeyCode::Backspace => match focused {
			EditorOption::Title => {
				app.store.draft_mut().title.pop();
			}
			EditorOption::Duration => {
				app.store.draft_mut().duration_text.pop();
			}
			_ => {}
		},
		KeyCode::Char(value) => match focused {
			EditorOption::Title => app.store.draft_mut().title.push(value),
			EditorOption::Duration => {
				if !app.store.draft_mut().push_duration_char(value) {
					debug!(%value, "dropped non-digit duration input");
				}
			}
			_ => {}
		},
		_ => {}
	}

	if app.nav.screen() != Screen::Settings {
		app.editor_focus = 0;
	}
	Ok(())
}

struct App {
	store: Store,
	nav: Navigator,
	selected_task: usize,
	selected_listing: usize,
	editor_focus: usize,
	status: String,
	started_at: DateTime<Local>,
}

impl App {
	fn new(store: Store, started_at: DateTime<Local>) -> Self {
		Self {
			store,
			nav: Navigator::default(),
			selected_task: 0,
			selected_listing: 0,
			editor_focus: 0,
			status: "Ready".to_string(),
			started_at,
		}
	}

	fn press(&mut self, button: BarButton) -> Result<(), StoreError> {
		self.editor_focus = 0;
		self.nav.press(button, &mut self.store)
	}

	fn clamp_selection(&mut self) {
		self.selected_task = clamp_index(self.selected_task, self.store.tasks().len());
		self.selected_listing = clamp_index(self.selected_listing, self.store.listings().len());
	}

	fn move_selection(&mut self, delta: i32) {
		let (selected, len) = match self.nav.screen() {
			Screen::Tasks => (&mut self.selected_task, self.store.tasks().len()),
			Screen::Listings => (&mut self.selected_listing, self.store.listings().len()),
			Screen::About | Screen::Settings => return,
		};

		if len == 0 {
			*selected = 0;
			return;
		}

		if delta > 0 {
			*selected = (*selected + delta as usize).min(len - 1);
		} else {
			*selected = selected.saturating_sub(delta.unsigned_abs() as usize);
		}
	}

	fn toggle_selected(&mut self) -> Result<(), StoreError> {
		match self.nav.screen() {
			Screen::Tasks if !self.store.tasks().is_empty() => {
				let active = self.store.toggle_task_active(self.selected_task)?;
				let task = &self.store.tasks()[self.selected_task];
				self.status = if task.is_complete() {
					format!("{} is done", task.title)
				} else if active {
					format!("started {}", task.title)
				} else {
					format!("paused {}", task.title)
				};
			}
			Screen::Listings if !self.store.listings().is_empty() => {
				self.store.toggle_listing_complete(self.selected_listing)?;
			}
			_ => {}
		}
		Ok(())
	}

	fn configure_selected(&mut self) -> Result<(), StoreError> {
		self.editor_focus = 0;
		match self.nav.screen() {
			Screen::Tasks if !self.store.tasks().is_empty() => {
				self.nav.open_configure_task(&mut self.store, self.selected_task)
			}
			Screen::Listings if !self.store.listings().is_empty() => {
				self.nav.open_configure_listing(&mut self.store, self.selected_listing)
			}
			_ => Ok(()),
		}
	}
}

fn clamp_index(index: usize, len: usize) -> usize {
	if len == 0 { 0 } else { index.min(len - 1) }
}

#[cfg(test)]
mod tests {
	use chrono::{Local, TimeZone};
	use crossterm::event::KeyCode;
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use crate::domain::PaletteColor;
	use crate::navigation::Screen;
	use crate::store::Store;

	use super::{App, draw_dashboard, handle_key, progress_bar};

	fn app() -> App {
		let started_at = Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
		App::new(Store::default(), started_at)
	}

	fn type_text(app: &mut App, text: &str) {
		for value in text.chars() {
			handle_key(app, KeyCode::Char(value));
		}
	}

	fn render(app: &App) -> String {
		let backend = TestBackend::new(90, 24);
		let mut terminal = Terminal::new(backend).unwrap();
		let now = Local.with_ymd_and_hms(2026, 1, 1, 10, 1, 1).unwrap();
		terminal.draw(|frame| draw_dashboard(frame, app, now)).unwrap();

		let buffer = terminal.backend().buffer().clone();
		let width = buffer.area.width as usize;
		buffer
			.content
			.chunks(width)
			.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}

	fn add_task(app: &mut App, title: &str, minutes: &str) {
		handle_key(app, KeyCode::Char('n'));
		type_text(app, title);
		handle_key(app, KeyCode::Tab);
		type_text(app, minutes);
		handle_key(app, KeyCode::Enter);
	}

	#[test]
	fn creates_task_through_editor_keys() {
		let mut app = app();
		add_task(&mut app, "Deep work", "2x5");

		assert_eq!(app.nav.screen(), Screen::Tasks);
		let task = &app.store.tasks()[0];
		assert_eq!(task.title, "Deep work");
		assert_eq!(task.duration, 25 * 60);
		assert_eq!(app.status, "Saved");
	}

	#[test]
	fn color_field_cycles_palette() {
		let mut app = app();
		handle_key(&mut app, KeyCode::Char('n'));
		handle_key(&mut app, KeyCode::Tab);
		handle_key(&mut app, KeyCode::Tab);
		handle_key(&mut app, KeyCode::Right);
		handle_key(&mut app, KeyCode::Right);
		handle_key(&mut app, KeyCode::Enter);

		let task = &app.store.tasks()[0];
		assert_eq!(task.title, "New task");
		assert_eq!(task.color, PaletteColor::Purple);
	}

	#[test]
	fn space_toggles_and_tick_advances() {
		let mut app = app();
		add_task(&mut app, "Read", "1");
		handle_key(&mut app, KeyCode::Char(' '));
		assert!(app.store.tasks()[0].active);
		assert_eq!(app.status, "started Read");

		app.store.tick();
		app.store.tick();
		assert_eq!(app.store.tasks()[0].progress, 2);

		handle_key(&mut app, KeyCode::Char(' '));
		assert!(!app.store.tasks()[0].active);
	}

	#[test]
	fn delete_from_editor_keeps_selection_in_range() {
		let mut app = app();
		add_task(&mut app, "a", "1");
		add_task(&mut app, "b", "1");
		handle_key(&mut app, KeyCode::Down);
		assert_eq!(app.selected_task, 1);

		handle_key(&mut app, KeyCode::Char('e'));
		assert_eq!(app.store.draft().index, 1);
		for _ in 0..3 {
			handle_key(&mut app, KeyCode::Tab);
		}
		handle_key(&mut app, KeyCode::Enter);

		assert_eq!(app.nav.screen(), Screen::Tasks);
		assert_eq!(app.store.tasks().len(), 1);
		assert_eq!(app.selected_task, 0);
	}

	#[test]
	fn escape_cancels_editor_and_quits_elsewhere() {
		let mut app = app();
		handle_key(&mut app, KeyCode::Char('n'));
		type_text(&mut app, "draft");
		assert!(!handle_key(&mut app, KeyCode::Esc));
		assert_eq!(app.nav.screen(), Screen::Tasks);
		assert!(app.store.tasks().is_empty());
		assert!(app.store.draft().title.is_empty());

		assert!(handle_key(&mut app, KeyCode::Esc));
	}

	#[test]
	fn listing_check_and_reset() {
		let mut app = app();
		handle_key(&mut app, KeyCode::Char('l'));
		handle_key(&mut app, KeyCode::Char('n'));
		type_text(&mut app, "milk");
		handle_key(&mut app, KeyCode::Enter);
		assert_eq!(app.nav.screen(), Screen::Listings);

		handle_key(&mut app, KeyCode::Char(' '));
		assert!(app.store.listings()[0].complete);
		handle_key(&mut app, KeyCode::Char('r'));
		assert!(!app.store.listings()[0].complete);
	}

	#[test]
	fn renders_task_rows() {
		let mut app = app();
		add_task(&mut app, "Stretch", "2");
		handle_key(&mut app, KeyCode::Char(' '));
		for _ in 0..90 {
			app.store.tick();
		}

		let screen = render(&app);
		assert!(screen.contains("TIME TASKS"));
		assert!(screen.contains("[pause] Stretch"));
		assert!(screen.contains("1m 30s | Out of 2m"));
		assert!(screen.contains("[l] List"));
		assert!(screen.contains("[r] Reset"));
	}

	#[test]
	fn renders_editor_placeholders() {
		let mut app = app();
		handle_key(&mut app, KeyCode::Char('n'));

		let screen = render(&app);
		assert!(screen.contains("NEW TASK"));
		assert!(screen.contains("Title: New task"));
		assert!(screen.contains("Duration (min): 60"));
		assert!(screen.contains("[Enter] Save"));
		assert!(!screen.contains("[l] List"));
	}

	#[test]
	fn renders_about_uptime() {
		let mut app = app();
		handle_key(&mut app, KeyCode::Char('a'));

		let screen = render(&app);
		assert!(screen.contains("ABOUT"));
		assert!(screen.contains("Uptime: 1h 1m 1s"));
		assert!(screen.contains("[t] Tasks"));
	}

	#[test]
	fn progress_bar_fills_proportionally() {
		assert_eq!(progress_bar(0.0, 4), "[----]");
		assert_eq!(progress_bar(0.5, 4), "[==--]");
		assert_eq!(progress_bar(1.0, 4), "[====]");
	}
}
