// Terminal warehouse puzzle
// Controls: arrow keys push boxes, A/D rotate the view, W/S zoom, T toggles textures, Q quits.
// Tiles: '#' wall, 'I' pillar, '$' box, '.' destination, '*' box on destination, '@' player.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use warehouse_puzzle::console_interface::{
    ConsoleInput, InputCommand, cleanup_terminal, handle_input, render_game, render_game_to_string, setup_terminal,
};
use warehouse_puzzle::core::{Session, WinCheck};
use warehouse_puzzle::export::get_json_data;
use warehouse_puzzle::generation::{GenerationConfig, generate};
use warehouse_puzzle::models::{GameRenderState, ViewState};
use warehouse_puzzle::state_graph::{get_graph_info, solve_with_graph};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Print the generated warehouse and its JSON snapshot
    Generate,
    /// Generate, then search for a solution
    Solve,
}

#[derive(Parser, Debug)]
#[command(about = "Push every box onto a destination")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Play)]
    mode: Mode,
    /// Seed for warehouse generation; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file with generation settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    size: Option<i32>,
    #[arg(long)]
    pillars: Option<usize>,
    #[arg(long)]
    boxes: Option<usize>,
    /// Defaults to the box count
    #[arg(long)]
    destinations: Option<usize>,
    /// Drop the pillar spacing and box spreading rules
    #[arg(long)]
    unconstrained: bool,
    /// Only accept layouts the solver can finish
    #[arg(long)]
    require_solvable: bool,
    /// Log file used in play mode
    #[arg(long, default_value = "warehouse.log")]
    log_file: PathBuf,
}

impl Args {
    fn generation_config(&self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GenerationConfig::default(),
        };
        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if let Some(pillars) = self.pillars {
            config.pillar_count = pillars;
        }
        if let Some(boxes) = self.boxes {
            config.box_count = boxes;
            config.destination_count = boxes;
        }
        if let Some(destinations) = self.destinations {
            config.destination_count = destinations;
        }
        if self.unconstrained {
            config.spaced_pillars = false;
            config.spread_boxes = false;
        }
        if self.require_solvable {
            config.require_solvable = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.generation_config()?;
    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!(seed, ?config, "generating warehouse");

    let mut rng = StdRng::seed_from_u64(seed);
    let generated = generate(&config, &mut rng).context("generating warehouse")?;

    match args.mode {
        Mode::Play => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(generated.into_session(), &mut terminal);
            cleanup_terminal()?;
            let session = result?;
            if session.is_won() {
                println!("Won game with {} moves!", session.move_count());
            }
        }
        Mode::Generate => {
            let session = generated.into_session();
            println!("seed: {}", seed);
            print!("{}", render_game_to_string(session.warehouse(), session.player()));
            println!("{}", get_json_data(&session)?);
        }
        Mode::Solve => {
            print!("{}", render_game_to_string(&generated.warehouse, generated.player));
            let (solvability, graph) =
                solve_with_graph(&generated.warehouse, generated.player, config.solver_node_budget);
            println!("{}", get_graph_info(&graph, solvability));
        }
    }

    Ok(())
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // the terminal UI owns stdout while playing
    if args.mode == Mode::Play {
        let log_out = File::create(&args.log_file)
            .with_context(|| format!("creating {}", args.log_file.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(log_out)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn run_interactive(
    mut session: Session,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
) -> anyhow::Result<Session> {
    let mut view = ViewState::default();
    let mut last_update = None;

    loop {
        if session.check_win() == WinCheck::JustWon {
            render_game(terminal, &GameRenderState { session: &session, view: &view, last_update })?;
            // Keep showing the win screen until user inputs
            loop {
                match handle_input()? {
                    ConsoleInput::Timeout => {}
                    _ => return Ok(session),
                }
            }
        }
        render_game(terminal, &GameRenderState { session: &session, view: &view, last_update })?;

        match handle_input()? {
            ConsoleInput::Command(InputCommand::Exit) => return Ok(session),
            ConsoleInput::Command(InputCommand::Move(direction)) => {
                last_update = Some(session.apply_move(direction));
            }
            ConsoleInput::Command(command) => {
                view.apply(command);
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
}
