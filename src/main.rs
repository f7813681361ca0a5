use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use neolingua::config::AppConfig;
use neolingua::database::SqliteStore;
use neolingua::models::classify_mastery;
use neolingua::{FixedClock, Quality, ReviewApp, ReviewItem, SystemClock};

#[derive(Parser)]
#[command(name = "neolingua", version, about = "Vocabulary review scheduler")]
struct Cli {
    /// SQLite database path (overrides NEOLINGUA_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start reviewing a new word
    Add {
        vocab_id: String,
        word: String,
        meaning: String,
        #[arg(long, default_value = "general")]
        lesson: String,
    },
    /// Record an answer for a word (quality 0-5)
    Review { vocab_id: String, quality: u8 },
    /// List words due for review
    Due,
    /// List words falling due soon
    Upcoming {
        /// Look-ahead in days (overrides NEOLINGUA_UPCOMING_DAYS)
        #[arg(long)]
        days: Option<u32>,
    },
    /// List words from one lesson
    Lesson { lesson_id: String },
    /// Show progress statistics
    Stats,
    /// Show recent review sessions
    Sessions,
    /// Review all due words interactively
    Study,
    /// Move the simulated date forward by one day
    NextDay,
    /// Export all review items to a JSON file
    Export { path: PathBuf },
    /// Import review items from a JSON file
    Import { path: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neolingua=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;

    if let Commands::NextDay = cli.command {
        let date = store.advance_day(&SystemClock)?;
        println!("Current date: {}", date.format("%Y-%m-%d"));
        return Ok(());
    }

    let today = store.current_date(&SystemClock)?;
    let app = ReviewApp::new(&store, FixedClock::new(today));

    match cli.command {
        Commands::Add {
            vocab_id,
            word,
            meaning,
            lesson,
        } => {
            let item = app.add_word(&vocab_id, &word, &meaning, &lesson)?;
            println!(
                "Added '{}' (first review {})",
                item.word,
                item.next_review_date.format("%Y-%m-%d")
            );
        }
        Commands::Review { vocab_id, quality } => {
            let item = app.review(&vocab_id, Quality::new(quality))?;
            println!(
                "'{}': next review in {} day(s), ease {:.2}, {}",
                item.word,
                item.interval,
                item.ease_factor,
                classify_mastery(&item)
            );
        }
        Commands::Due => print_items(&app.due()),
        Commands::Upcoming { days } => {
            print_items(&app.upcoming(days.unwrap_or(config.upcoming_days)))
        }
        Commands::Lesson { lesson_id } => print_items(&app.lesson(&lesson_id)),
        Commands::Stats => {
            let stats = app.stats();
            println!("Date:          {}", today.format("%Y-%m-%d"));
            println!("Words:         {}", stats.total);
            println!("  learning:    {}", stats.learning);
            println!("  reviewing:   {}", stats.reviewing);
            println!("  mastered:    {}", stats.mastered);
            println!("Due today:     {}", stats.due_today);
            println!("Due this week: {}", stats.due_this_week);
            println!("Accuracy:      {:.0}%", stats.accuracy * 100.0);
        }
        Commands::Sessions => {
            let sessions = app.sessions();
            if sessions.is_empty() {
                println!("No sessions yet.");
            }
            for session in sessions.iter().rev() {
                println!(
                    "{}  {:>3} reviewed  {:>3}%",
                    session.date.format("%Y-%m-%d %H:%M"),
                    session.items_reviewed,
                    session.accuracy
                );
            }
        }
        Commands::Study => study(&app)?,
        Commands::Export { path } => {
            let count = app.export(&path)?;
            println!("Exported {} word(s) to {}", count, path.display());
        }
        Commands::Import { path } => {
            let count = app
                .import(&path)
                .with_context(|| format!("failed to import {}", path.display()))?;
            println!("Imported {} word(s) from {}", count, path.display());
        }
        Commands::NextDay => unreachable!("handled before the clock is read"),
    }

    Ok(())
}

fn print_items(items: &[ReviewItem]) {
    if items.is_empty() {
        println!("Nothing here.");
        return;
    }
    for item in items {
        println!(
            "{:<16} {:<20} {:<20} due {}  [{}]",
            item.vocab_id,
            item.word,
            item.meaning,
            item.next_review_date.format("%Y-%m-%d"),
            classify_mastery(item)
        );
    }
}

fn study(app: &ReviewApp<&SqliteStore, FixedClock>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut read_line = move || -> Option<String> { lines.next()?.ok() };

    let summary = app.run_session(|item| {
        println!();
        print!("{}  (Enter to reveal) ", item.word);
        io::stdout().flush().ok()?;
        let answer = read_line()?;
        if answer.trim() == "q" {
            return None;
        }
        println!("  -> {}", item.meaning);

        loop {
            print!("Grade 0-5, y/n, or q to stop: ");
            io::stdout().flush().ok()?;
            match parse_grade(&read_line()?) {
                Grade::Quality(quality) => return Some(quality),
                Grade::Quit => return None,
                Grade::Invalid => continue,
            }
        }
    })?;

    println!();
    println!(
        "Session done: {} answer(s), {}% correct",
        summary.items_reviewed, summary.accuracy
    );
    Ok(())
}

enum Grade {
    Quality(Quality),
    Quit,
    Invalid,
}

fn parse_grade(input: &str) -> Grade {
    match input.trim() {
        "q" => Grade::Quit,
        "y" => Grade::Quality(Quality::from_correct(true)),
        "n" => Grade::Quality(Quality::from_correct(false)),
        other => match other.parse::<u8>() {
            Ok(value) if value <= Quality::MAX => Grade::Quality(Quality::new(value)),
            _ => Grade::Invalid,
        },
    }
}
