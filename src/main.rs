mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use alien_invasion::config::GameConfig;
use alien_invasion::feedback::{FeedbackSink, QueuedBell, Silent};
use alien_invasion::input::{intent_for_key, DragTracker};
use alien_invasion::session::Session;

use display::Viewport;

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down the descending alien grid before it reaches your ship")]
struct Args {
    /// Board height in tiles
    #[arg(long, default_value_t = alien_invasion::config::BOARD_ROWS)]
    rows: u32,

    /// Board width in tiles
    #[arg(long, default_value_t = alien_invasion::config::BOARD_COLUMNS)]
    columns: u32,

    /// Seed for alien colours (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Disable the terminal bell on shots and hits
    #[arg(long)]
    mute: bool,

    /// Where to write logs; the terminal itself is taken by the game
    #[arg(long, default_value = "alien_invasion.log")]
    log_file: PathBuf,
}

type GameSession = Session<StdRng, Box<dyn FeedbackSink>>;

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Hands the terminal back before the default hook prints the message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = display::restore_terminal(&mut stdout());
        let _ = terminal::disable_raw_mode();
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
        previous(info);
    }));
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input events are applied the moment they are drained, then the frame is
/// simulated and painted.  Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    view: &Viewport,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let mut drag = DragTracker::default();

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    if let Some(intent) = intent_for_key(&key) {
                        session.apply(intent);
                    }
                }
                Event::Mouse(MouseEvent { kind, column, .. }) => {
                    let x = view.board_x(column);
                    let intent = match kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            drag.press(x, session.world.is_game_over())
                        }
                        MouseEventKind::Drag(MouseButton::Left) => drag.drag(x),
                        MouseEventKind::Up(MouseButton::Left) => drag.release(),
                        _ => None,
                    };
                    if let Some(intent) = intent {
                        session.apply(intent);
                    }
                }
                _ => {}
            }
        }

        session.tick();
        display::render(out, view, &session.world)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    if args.fps == 0 {
        bail!("--fps must be greater than zero");
    }
    let config = GameConfig {
        rows: args.rows,
        columns: args.columns,
        ..GameConfig::default()
    };
    if let Err(e) = config.validate() {
        bail!("invalid --rows/--columns: {e}");
    }
    let view = Viewport::new(&config);
    let (need_w, need_h) = view.required_size();
    let (term_w, term_h) = terminal::size().context("failed to query terminal size")?;
    if term_w < need_w || term_h < need_h {
        bail!("terminal is {term_w}x{term_h}, the board needs at least {need_w}x{need_h}");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, rows = config.rows, columns = config.columns, "starting session");

    let feedback: Box<dyn FeedbackSink> = if args.mute {
        Box::new(Silent)
    } else {
        Box::new(QueuedBell::spawn())
    };
    let mut session = Session::new(config, StdRng::seed_from_u64(seed), feedback);

    let mut out = BufWriter::new(stdout());
    install_panic_hook();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Release => {}
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "event read failed");
                break;
            }
        }
    });

    let frame = Duration::from_secs(1) / args.fps;
    let result = game_loop(&mut out, &mut session, &view, &rx, frame);

    // Always restore the terminal
    let _ = display::restore_terminal(&mut out);
    let _ = terminal::disable_raw_mode();

    info!(
        score = session.world.score,
        high_score = session.world.high_score,
        "session ended"
    );
    result.context("game loop failed")
}
