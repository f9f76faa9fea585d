//! Raksha CLI
//!
//! Usage:
//!   raksha --text "your message here"        # Single analysis
//!   raksha --interactive                     # Interactive scan mode
//!   raksha --listen                          # Live watcher simulation
//!   raksha --serve                           # HTTP API server
//!   raksha --text "text" --json              # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use raksha::core::{run_server, MessageAnalyzer, TranscriptWatcher};
use raksha::types::{AnalysisResult, SourceEvent, WatcherState};
use raksha::{SCAM_THRESHOLD, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "raksha",
    version = VERSION,
    about = "Raksha - Score messages for scam signals and watch live call transcripts",
    long_about = "Raksha scores free-form message text against weighted keyword and\n\
                  pattern tables and explains every verdict in plain language.\n\n\
                  Modes:\n  \
                  --interactive  Scan messages line by line\n  \
                  --listen       Treat each line as a live transcript segment\n  \
                  --serve        HTTP API server mode\n\n\
                  Verdicts:\n  \
                  SAFE  - score at or below the threshold\n  \
                  SCAM  - score above the threshold"
)]
struct Args {
    /// Message text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive scan mode - read messages from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Live watcher mode - each stdin line is a final transcript segment
    #[arg(short, long)]
    listen: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show detected evidence breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if args.listen {
        run_listen(&args);
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Run single message analysis
fn run_single(text: &str, args: &Args) {
    let analyzer = MessageAnalyzer::new();
    let result = analyzer.analyze(text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else if args.verbose {
        print_verbose(&result, args.no_color);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
        print_reasons(&result, args.no_color);
    }
}

/// Run interactive scan mode
fn run_interactive(args: &Args) {
    let analyzer = MessageAnalyzer::new();

    print_header("Scan Mode", args.no_color);
    println!("Paste a message and press Enter to score it. Type 'quit' to exit.");
    println!("Verdict: SCAM when the score exceeds {}", SCAM_THRESHOLD);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut scanned = 0u64;

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Messages scanned: {}", scanned);
            break;
        }
        if line.is_empty() {
            continue;
        }

        scanned += 1;
        let result = analyzer.analyze(line);

        if args.json {
            println!("{}", serde_json::to_string(&result).unwrap());
        } else if args.verbose {
            print_verbose(&result, args.no_color);
        } else if args.no_color {
            println!("{}", result.to_parseable_string());
        } else {
            println!("{}", result.to_terminal_string());
            print_reasons(&result, args.no_color);
        }
    }
}

/// Run live watcher simulation - stdin lines are final transcript segments
fn run_listen(args: &Args) {
    let mut watcher = TranscriptWatcher::new();

    print_header("Listen Mode", args.no_color);
    println!("Each line is treated as a finalized transcript segment.");
    println!("Commands: 'stop', 'start', 'reset', 'quit'.");
    println!();

    let output = watcher.start();
    print_watch_output(&output, args);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_listen_prompt(&watcher, args.no_color);
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Events: {}", watcher.event_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let output = match line.to_lowercase().as_str() {
            "stop" => watcher.stop(),
            "start" => watcher.start(),
            "reset" => watcher.reset(),
            _ => watcher.on_event(SourceEvent::Final {
                text: line.to_string(),
            }),
        };

        print_watch_output(&output, args);
        if output.alert_fired {
            print_alert(&output, args.no_color);
        }
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Raksha v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m╔═══════════════════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║           Raksha v{} - {}                 ║\x1b[0m", VERSION, mode);
        println!("\x1b[1m╚═══════════════════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Format listen mode prompt
fn format_listen_prompt(watcher: &TranscriptWatcher, no_color: bool) -> String {
    let state = watcher.state();
    if no_color {
        format!("[{}] > ", state)
    } else {
        format!(
            "{}{} [{}]{} > ",
            state.color_code(),
            state.emoji(),
            state,
            WatcherState::color_reset()
        )
    }
}

/// Print one watcher update
fn print_watch_output(output: &raksha::types::WatchOutput, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string(output).unwrap());
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }

    if let Some(ref error) = output.error {
        eprintln!("Source error: {}", error);
    }
}

/// Print the alert banner on the tripping event
fn print_alert(output: &raksha::types::WatchOutput, no_color: bool) {
    let word = output.alert.word.as_deref().unwrap_or("?");
    if no_color {
        println!("  ! SCAM WORD HEARD: {}", word);
    } else {
        println!("\x1b[31m  ⚠ SCAM WORD HEARD: \"{}\" - do not share codes or card details\x1b[0m", word);
    }
}

/// Print reasons under a verdict line
fn print_reasons(result: &AnalysisResult, no_color: bool) {
    for reason in &result.reasons {
        if no_color {
            println!("  - {}", reason);
        } else {
            println!("\x1b[90m  └─ {}\x1b[0m", reason);
        }
    }
}

/// Print verbose analysis breakdown
fn print_verbose(result: &AnalysisResult, no_color: bool) {
    let color = if no_color { "" } else { result.color_code() };
    let reset = if no_color { "" } else { AnalysisResult::color_reset() };

    println!("{}┌──────────────────────────────────────────┐{}", color, reset);
    println!(
        "{}│ verdict = {}  (score {} / threshold {}){}",
        color,
        result.verdict(),
        result.score,
        result.threshold,
        reset
    );
    println!("{}├──────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Keywords: {:?}{}", color, result.detected_keywords, reset);
    println!("{}│ Patterns: {:?}{}", color, result.detected_patterns, reset);
    println!(
        "{}│ Links: {} | Phone numbers: {}{}",
        color, result.has_links, result.has_phone_numbers, reset
    );
    println!("{}├──────────────────────────────────────────┤{}", color, reset);
    for reason in &result.reasons {
        println!("{}│ • {}{}", color, reason, reset);
    }
    println!("{}└──────────────────────────────────────────┘{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("╔═══════════════════════════════════════════════════╗");
    println!("║  🛡 Raksha API Server                              ║");
    println!("║  Version: {}                                   ║", VERSION);
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
