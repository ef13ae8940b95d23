use swatch::app::{App, Focus, WidgetInstance};
use swatch::cli::{parse_args, run_list, CliCommand};
use swatch::registry::{parse_path, Registry};
use swatch::ui;
use swatch::ui::interaction::ClickAction;

use color_eyre::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle non-TUI commands before any terminal setup
    let startup_path = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("swatch {}", VERSION);
            return Ok(());
        }
        CliCommand::List { json } => {
            let registry = Registry::builtin();
            print!("{}", run_list(&registry, json)?);
            return Ok(());
        }
        CliCommand::RunTui { path } => path,
    };

    color_eyre::install()?;
    swatch::logging::init()?;

    // Build app state before touching the terminal so a bad startup path
    // fails with a plain error message
    let mut app = App::new(Registry::builtin());
    if let Some(path) = startup_path {
        let route = match parse_path(&path) {
            Ok(route) => route,
            Err(e) => {
                eprintln!("swatch: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = app.open_route(route) {
            eprintln!("swatch: {}", e);
            std::process::exit(1);
        }
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the fade animation smooth while staying idle-cheap
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(
            swatch::app::TICK_MS,
        ));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();
                            if handle_key(app, key.code, key.modifiers) {
                                return Ok(());
                            }
                        }
                        Event::Mouse(mouse) => {
                            handle_mouse(app, mouse.kind, mouse.column, mouse.row);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle one key press. Returns true when the app should exit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    // Global keybinds (always active)
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return true;
        }
        KeyCode::Tab => {
            app.next_tab();
            return false;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return false;
        }
        _ => {}
    }

    // A focused input field captures typing before anything else
    if let Some(WidgetInstance::Input(field)) = &mut app.widget {
        if field.focused {
            match code {
                KeyCode::Esc => field.blur(),
                KeyCode::Enter => field.blur(),
                KeyCode::Backspace => field.backspace(),
                KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                    field.clear();
                }
                KeyCode::Char(c)
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    field.type_char(c);
                }
                _ => {}
            }
            return false;
        }
    }

    match code {
        KeyCode::Char('q') => {
            app.quit();
            return true;
        }
        KeyCode::Esc => {
            // First close an open menu, then fall back to the sidebar
            if !app.close_open_menu() {
                app.focus = Focus::Sidebar;
            }
        }
        KeyCode::Up => handle_vertical(app, -1),
        KeyCode::Down => handle_vertical(app, 1),
        KeyCode::Enter => handle_enter(app),
        KeyCode::Char(' ') => match &mut app.widget {
            Some(WidgetInstance::Cv(cv)) if app.focus == Focus::Preview => {
                cv.toggle_liked(cv.current_section());
            }
            Some(WidgetInstance::Fade(demo)) => demo.toggle(),
            _ => {}
        },
        KeyCode::Char('[') => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.duration_down();
            }
        }
        KeyCode::Char(']') => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.duration_up();
            }
        }
        KeyCode::Char(',') => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.delay_down();
            }
        }
        KeyCode::Char('.') => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.delay_up();
            }
        }
        _ => {}
    }
    false
}

/// Route Up/Down either to the sidebar cursor or the focused widget.
fn handle_vertical(app: &mut App, direction: i8) {
    if app.focus == Focus::Preview {
        match &mut app.widget {
            Some(WidgetInstance::Dropdown(dropdown)) if dropdown.open => {
                if direction < 0 {
                    dropdown.cursor_up();
                } else {
                    dropdown.cursor_down();
                }
                return;
            }
            Some(WidgetInstance::Cv(cv)) => {
                if direction < 0 {
                    cv.cursor_up();
                } else {
                    cv.cursor_down();
                }
                return;
            }
            _ => {}
        }
    }
    if direction < 0 {
        app.move_up();
    } else {
        app.move_down();
    }
}

/// Enter opens the sidebar selection or activates the focused widget.
fn handle_enter(app: &mut App) {
    if app.focus == Focus::Sidebar {
        app.open_selected();
        return;
    }
    match &mut app.widget {
        Some(WidgetInstance::Dropdown(dropdown)) => {
            if dropdown.open {
                dropdown.select_cursor();
            } else {
                dropdown.toggle_open();
            }
        }
        Some(WidgetInstance::Input(field)) => field.focus(),
        Some(WidgetInstance::Cv(cv)) => {
            cv.toggle_expanded(cv.current_section());
        }
        _ => {}
    }
}

/// Handle mouse clicks and hover movement against the hit area registry.
fn handle_mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.hit_registry.hit_test(column, row) {
                ui::interaction::handle_click_action(app, action);
            } else if app.close_open_menu() {
                // Outside click closes an open menu
                app.mark_dirty();
            }
        }
        MouseEventKind::Moved => {
            if app.hit_registry.update_hover(column, row) {
                app.mark_dirty();
            }
            // The hero card reveals its call-to-action while hovered
            let hero_hovered = matches!(
                app.hit_registry.get_hovered(),
                Some(area) if area.action == ClickAction::HeroHover
            );
            if let Some(WidgetInstance::Hero(card)) = &mut app.widget {
                if card.set_hovered(hero_hovered) {
                    app.mark_dirty();
                }
            }
        }
        _ => {}
    }
}
