#![forbid(unsafe_code)]

//! Stdin-driven demo for the accordion controller.
//!
//! Builds a course-outline page with two groups, mounts it, then accepts
//! commands on stdin:
//!
//! - `click <n>` — click the header with id `n`
//! - `show` — print the HTML snapshot of every group
//! - `state` — print which panel is open per group
//! - `quit`
//!
//! Run with `RUST_LOG=concertina=debug` to watch transitions.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use concertina::{Accordion, AccordionController, Handled, HeaderId, Panel};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "concertina-demo", about = "Exercise the accordion controller interactively")]
struct Cli {
    /// Print the initial HTML snapshot and exit without reading stdin.
    #[arg(long)]
    snapshot: bool,
}

fn course_page() -> [Accordion; 2] {
    [
        Accordion::new(vec![
            Panel::titled("Syllabus", "Week-by-week outline of the course."),
            Panel::titled("Grading", "40% labs, 60% final exam."),
            Panel::titled("Reading", "One paper per week, summaries due Friday."),
        ]),
        Accordion::new(vec![
            Panel::titled("Office hours", "Tuesdays 14:00-16:00."),
            Panel::titled("Contact", "Mail the course alias, not individual staff."),
        ]),
    ]
}

fn print_state(page: &AccordionController) {
    for group in 0..page.group_count() {
        let open = page
            .state(group)
            .and_then(|state| state.open())
            .map_or_else(|| "all closed".to_string(), |idx| format!("panel {idx} open"));
        println!("group {group}: {open}");
    }
}

fn print_html(page: &AccordionController) {
    for group in 0..page.group_count() {
        if let Some(html) = page.to_html(group) {
            print!("{html}");
        }
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut builder = AccordionController::builder().on_ready(|| {
        tracing::info!(message = "demo.ready", detail = "sibling hook fired");
    });
    for group in course_page() {
        builder = builder.group(group);
    }
    let mut page = match builder.mount() {
        Ok(page) => page,
        Err(err) => {
            eprintln!("mount failed: {err}");
            return Err(io::Error::other(err.to_string()));
        }
    };

    print_html(&page);
    if cli.snapshot {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    write!(out, "> ")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("click"), Some(raw)) => match raw.parse::<u64>() {
                Ok(n) => match page.click(HeaderId(n)) {
                    Handled::Consumed {
                        group,
                        panel,
                        now_open,
                        ..
                    } => {
                        println!(
                            "group {group} panel {panel} is now {}",
                            if now_open { "open" } else { "closed" }
                        );
                        print_state(&page);
                    }
                    Handled::Ignored => println!("no header with id {n}"),
                },
                Err(_) => println!("usage: click <n>"),
            },
            (Some("show"), None) => print_html(&page),
            (Some("state"), None) => print_state(&page),
            (Some("quit"), None) | (Some("q"), None) => break,
            (None, _) => {}
            _ => println!("commands: click <n> | show | state | quit"),
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
