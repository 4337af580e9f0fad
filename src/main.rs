// memheat: Trace-Driven Memory Access Visualizer

mod render;
mod state;
mod trace;
mod ui;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use state::MemoryState;
use trace::TraceLoader;
use ui::App;

// One slot per 16-byte line by default: enough resolution to see structure,
// small enough that a full process trace stays in a handful of blocks
const DEFAULT_IGNORE_BITS: u32 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("memheat");
        eprintln!("Error: No trace file provided");
        eprintln!();
        eprintln!("Usage: {} <trace> [ignore-bits]", program_name);
        eprintln!();
        eprintln!("The trace is lackey-style text, one access per line:");
        eprintln!("  I  0x0023c790,2     instruction fetch");
        eprintln!("   L 0x1000,4         load");
        eprintln!("   S 0x2000,8         store");
        eprintln!("   M 0x3000,4         modify");
        eprintln!();
        eprintln!("Generate one with:");
        eprintln!("  valgrind --tool=lackey --trace-mem=yes <program> 2> mem.trace");
        std::process::exit(1);
    }

    let trace_file = &args[1];

    if !Path::new(trace_file).exists() {
        eprintln!("Error: File '{}' not found", trace_file);
        eprintln!(
            "Usage: {} <trace> [ignore-bits]",
            args.first().map(|s| s.as_str()).unwrap_or("memheat")
        );
        std::process::exit(1);
    }

    let ignore_bits = match args.get(2) {
        Some(text) => match text.parse::<u32>() {
            Ok(bits) => bits,
            Err(_) => {
                eprintln!("Error: ignore-bits must be a small integer, got '{}'", text);
                std::process::exit(1);
            }
        },
        None => DEFAULT_IGNORE_BITS,
    };

    // Replay the trace into the tracking state
    eprintln!("Loading {}...", trace_file);
    let mut memory = MemoryState::new(ignore_bits);
    let mut loader = TraceLoader::new();
    let reader = BufReader::new(File::open(trace_file)?);
    match loader.feed(reader, &mut memory) {
        Ok(records) => {
            eprintln!(
                "Loaded {} accesses ({} lines skipped, {} blocks allocated).",
                records,
                loader.skipped(),
                memory.block_count()
            );
        }
        Err(e) => {
            eprintln!("Trace error: {}", e);
            std::process::exit(1);
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(memory, loader);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
