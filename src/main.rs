// ejs: syntax checker for a minimal embeddable scripting language

use std::fs;
use std::io;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ejs::constants::{Limits, MAX_DEPTH_LIMIT};
use ejs::engine::Engine;
use ejs::ui::App;

const EXIT_OK: u8 = 0;
const EXIT_SYNTAX_ERROR: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_IO_ERROR: u8 = 2;

struct Options {
    view: bool,
    limits: Limits,
    files: Vec<String>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--view] [--max-depth N] <file>...", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --view           Show the last file in the terminal viewer");
    eprintln!(
        "  --max-depth N    Maximum expression nesting (default {}, at most {})",
        Limits::default().max_depth,
        MAX_DEPTH_LIMIT
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        view: false,
        limits: Limits::default(),
        files: Vec::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--view" => options.view = true,
            "--max-depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--max-depth needs a value".to_string())?;
                let depth = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid depth '{}'", value))?;
                if depth == 0 {
                    return Err("Depth must be at least 1".to_string());
                }
                if depth > MAX_DEPTH_LIMIT {
                    return Err(format!("Depth must be at most {}", MAX_DEPTH_LIMIT));
                }
                options.limits = Limits::new(depth);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            file => options.files.push(file.to_string()),
        }
    }

    if options.files.is_empty() {
        return Err("No input file provided".to_string());
    }
    Ok(options)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("ejs");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program_name);
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    // One engine for every file; each check starts from fresh scan state
    let mut engine = Engine::with_limits(options.limits);
    let mut last = None;
    let code = check_files(&mut engine, &options.files, &mut last);

    if options.view && code != EXIT_IO_ERROR {
        if let Some((file, source)) = last {
            run_viewer(file, String::from_utf8_lossy(&source).into_owned(), &engine)?;
        }
    }

    Ok(ExitCode::from(code))
}

/// Check every file with `engine`, keeping the last one read in `last`.
///
/// Stops at the first file that cannot be read.
fn check_files(
    engine: &mut Engine,
    files: &[String],
    last: &mut Option<(String, Vec<u8>)>,
) -> u8 {
    let mut failures = 0;

    for file in files {
        let source = match fs::read(file) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("Error: File '{}' not found", file);
                return EXIT_IO_ERROR;
            }
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", file, e);
                return EXIT_IO_ERROR;
            }
        };

        match engine.check(&source) {
            Ok(()) => eprintln!("{}: ok", file),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", file, e);
                if engine.message_truncated() {
                    eprintln!(
                        "{}: (diagnostic truncated to {} bytes)",
                        file,
                        engine.error_message().len()
                    );
                }
            }
        }
        *last = Some((file.clone(), source));
    }

    if files.len() > 1 {
        eprintln!(
            "Checked {} file(s), {} with errors.",
            files.len(),
            failures
        );
    }

    if failures == 0 {
        EXIT_OK
    } else {
        EXIT_SYNTAX_ERROR
    }
}

fn run_viewer(
    file: String,
    source: String,
    engine: &Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(file, source, engine);
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
