use crate::core::{Direction, GameChangeType, GameUpdate, InvariantViolation, PlacementError, Vec2, Warehouse};
use crate::models::{GameRenderState, ViewState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelParseError {
    #[error("level is empty")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected} for a square level")]
    NotSquare { row: usize, expected: usize, found: usize },
    #[error("perimeter tile {0} is not a wall")]
    OpenPerimeter(Vec2),
    #[error("unknown tile {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Vec2 },
    #[error("level has no player")]
    MissingPlayer,
    #[error("level has more than one player")]
    MultiplePlayers,
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("level breaks a warehouse rule: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Reads a square level drawn top row first, as seen from the player: the top
/// line is `y = N-1` and the leftmost column is `x = N-1`.
/// `#` wall, `I` pillar, `$` box, `.` destination, `*` box on destination,
/// `@` player, `+` player on destination, space for floor.
///
/// The level must hold as many destinations as boxes.
pub fn parse_level(s: &str) -> Result<(Warehouse, Vec2), LevelParseError> {
    let rows: Vec<Vec<char>> = s
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().collect())
        .collect();
    if rows.is_empty() {
        return Err(LevelParseError::Empty);
    }

    let size = rows.len();
    let mut warehouse = Warehouse::new(size as i32);
    let bounds = warehouse.bounds();
    let mut player = None;

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(LevelParseError::NotSquare { row: row_index, expected: size, found: row.len() });
        }
        let y = (size - 1 - row_index) as i32;
        for (column, &ch) in row.iter().enumerate() {
            let pos = Vec2 { x: (size - 1 - column) as i32, y };
            if bounds.is_perimeter(&pos) {
                if ch != '#' {
                    return Err(LevelParseError::OpenPerimeter(pos));
                }
                continue;
            }
            match ch {
                ' ' => {}
                '#' => warehouse.place_wall(pos)?,
                'I' => warehouse.place_pillar(pos)?,
                '$' => warehouse.place_box(pos)?,
                '.' => warehouse.place_destination(pos)?,
                '*' => {
                    warehouse.place_box(pos)?;
                    warehouse.place_destination(pos)?;
                }
                '@' | '+' => {
                    if player.replace(pos).is_some() {
                        return Err(LevelParseError::MultiplePlayers);
                    }
                    if ch == '+' {
                        warehouse.place_destination(pos)?;
                    }
                }
                glyph => return Err(LevelParseError::UnknownGlyph { glyph, pos }),
            }
        }
    }

    let player = player.ok_or(LevelParseError::MissingPlayer)?;
    warehouse.check_invariants()?;
    Ok((warehouse, player))
}

pub fn render_game_to_string(warehouse: &Warehouse, player: Vec2) -> String {
    let size = warehouse.size();
    let mut result = String::new();
    for y in (0..size).rev() {
        for x in (0..size).rev() {
            let pos = Vec2 { x, y };
            let tile = warehouse.tile(pos);
            let has_player = pos == player;
            let ch = if tile.has_obstacle() {
                '#'
            } else if tile.has_pillar() {
                'I'
            } else if tile.has_box_destination() {
                if has_player { '+' } else if tile.has_box() { '*' } else { '.' }
            } else if has_player {
                '@'
            } else if tile.has_box() {
                '$'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let session = state.session;
        let game_text = render_game_to_string(session.warehouse(), session.player());
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Warehouse"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        f.render_widget(status_paragraph(state), chunks[1]);
    })?;
    Ok(())
}

fn status_paragraph<'a>(state: &GameRenderState) -> Paragraph<'a> {
    let session = state.session;
    let warehouse = session.warehouse();
    let mut status = if session.is_won() {
        format!("You won in {} moves! Press any key to quit.", session.move_count())
    } else {
        "Arrows move, A/D rotate, W/S zoom, T textures, Q quits".to_string()
    };

    status.push_str(&format!(
        " | Moves: {} | Boxes: {}/{}",
        session.move_count(),
        warehouse.boxes_on_destinations(),
        warehouse.box_count()
    ));
    status.push_str(&format!(" | {}", state.view.describe()));

    if let Some(update) = &state.last_update {
        let last = match update {
            GameUpdate::Moved(GameChangeType::PlayerMove) => "moved".to_string(),
            GameUpdate::Moved(GameChangeType::PlayerAndBoxMove) => "pushed".to_string(),
            GameUpdate::Blocked(reason) => format!("blocked by {:?}", reason),
        };
        status.push_str(&format!(" | Last: {}", last));
    }

    Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
}

/// Decoded keyboard command. Only `Move` ever reaches the session; the rest
/// belong to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    Move(Direction),
    RotateCamera(f32),
    Zoom(f32),
    ToggleTexture,
    Exit,
}

pub enum ConsoleInput {
    Command(InputCommand),
    Timeout,
    Unknown,
}

pub fn decode_key(code: KeyCode) -> Option<InputCommand> {
    Some(match code {
        KeyCode::Up => InputCommand::Move(Direction::Up),
        KeyCode::Down => InputCommand::Move(Direction::Down),
        KeyCode::Left => InputCommand::Move(Direction::Left),
        KeyCode::Right => InputCommand::Move(Direction::Right),
        KeyCode::Char('w') | KeyCode::Char('W') => InputCommand::Zoom(-1.0),
        KeyCode::Char('s') | KeyCode::Char('S') => InputCommand::Zoom(1.0),
        KeyCode::Char('a') | KeyCode::Char('A') => InputCommand::RotateCamera(-5.0),
        KeyCode::Char('d') | KeyCode::Char('D') => InputCommand::RotateCamera(5.0),
        KeyCode::Char('t') | KeyCode::Char('T') => InputCommand::ToggleTexture,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputCommand::Exit,
        _ => return None,
    })
}

pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) = event::read()?
        {
            return Ok(match decode_key(code) {
                Some(command) => ConsoleInput::Command(command),
                None => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

impl ViewState {
    /// Applies a non-move command. Returns false for commands the view ignores.
    pub fn apply(&mut self, command: InputCommand) -> bool {
        match command {
            InputCommand::RotateCamera(degrees) => {
                self.rotation_degrees = (self.rotation_degrees + degrees).rem_euclid(360.0);
            }
            InputCommand::Zoom(amount) => {
                self.field_of_view = (self.field_of_view + amount).clamp(ViewState::MIN_FOV, ViewState::MAX_FOV);
            }
            InputCommand::ToggleTexture => self.textures = !self.textures,
            InputCommand::Move(_) | InputCommand::Exit => return false,
        }
        true
    }

    pub fn describe(&self) -> String {
        format!(
            "View: {:.0}deg, fov {:.0}, textures {}",
            self.rotation_degrees,
            self.field_of_view,
            if self.textures { "on" } else { "off" }
        )
    }
}
