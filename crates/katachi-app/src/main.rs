use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use katachi_config::{Config, QuizMode, SessionOverrides};
use katachi_config::lexicon::LexiconConfig;
use katachi_lang_japanese::{JapaneseProcessor, Lexicon, LexiconLoader, validate_lexicon};
use katachi_types::{ConjugationType, JlptLevel, WordType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod progress;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::profile::ProfileStore;
use self::state::AppState;

/// Japanese conjugation drills in the terminal
#[derive(Parser, Debug)]
#[command(name = "katachi", version, about, long_about = None)]
struct Cli {
    /// Profile to load and save progress under
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a quiz session
    Practice(PracticeArgs),
    /// Show accuracy, mastered words and weak spots
    Report,
    /// Check every lexicon entry against the conjugation tables
    Verify,
    /// Print the distractors generated for one word and form
    Distractors {
        word_id: String,
        #[arg(value_parser = parse_form)]
        form: ConjugationType,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug, Default)]
struct PracticeArgs {
    /// choice or input
    #[arg(long, value_parser = parse_mode)]
    mode: Option<QuizMode>,

    /// Questions per session (5-30)
    #[arg(long)]
    batch: Option<usize>,

    #[arg(long = "level", value_parser = parse_level, num_args = 1..)]
    levels: Vec<JlptLevel>,

    #[arg(long = "word-type", value_parser = parse_word_type, num_args = 1..)]
    word_types: Vec<WordType>,

    /// Conjugation tags such as te_form or past_plain
    #[arg(long = "form", value_parser = parse_form, num_args = 1..)]
    forms: Vec<ConjugationType>,

    /// Every form the selected word types can take
    #[arg(long, conflicts_with = "forms")]
    all_forms: bool,

    /// Fixed seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

impl PracticeArgs {
    fn overrides(&self) -> SessionOverrides {
        SessionOverrides {
            mode: self.mode,
            batch_size: self.batch,
            levels: self.levels.clone(),
            word_types: self.word_types.clone(),
            categories: self.forms.clone(),
            all_forms: self.all_forms,
        }
    }
}

fn parse_mode(s: &str) -> Result<QuizMode, String> {
    match s.to_lowercase().as_str() {
        "choice" => Ok(QuizMode::Choice),
        "input" => Ok(QuizMode::Input),
        _ => Err(format!("unknown mode '{s}', expected choice or input")),
    }
}

fn parse_level(s: &str) -> Result<JlptLevel, String> {
    JlptLevel::parse(s).ok_or_else(|| format!("unknown level '{s}'"))
}

fn parse_word_type(s: &str) -> Result<WordType, String> {
    WordType::parse(s).ok_or_else(|| format!("unknown word type '{s}'"))
}

fn parse_form(s: &str) -> Result<ConjugationType, String> {
    ConjugationType::parse(s).ok_or_else(|| format!("unknown conjugation type '{s}'"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_processor(config: &LexiconConfig) -> JapaneseProcessor {
    if config.use_builtin {
        return JapaneseProcessor::with_additional_lexicons(&config.additional_paths);
    }

    let lexicon = config
        .additional_paths
        .iter()
        .filter_map(|path| match LexiconLoader::load_from_file(Path::new(path)) {
            Ok(lexicon) => Some(lexicon),
            Err(e) => {
                tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                None
            }
        })
        .fold(Lexicon::new(), LexiconLoader::merge);
    JapaneseProcessor::from_lexicon(lexicon)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = Config::new();
    if let Some(name) = cli.profile {
        config.storage.profile_name = name;
    }

    match cli.command.unwrap_or(Command::Practice(PracticeArgs::default())) {
        Command::Practice(args) => practice(config, args).await,
        Command::Report => report(&config),
        Command::Verify => verify(&config),
        Command::Distractors {
            word_id,
            form,
            seed,
        } => distractors(&config, &word_id, form, seed),
    }
}

async fn practice(mut config: Config, args: PracticeArgs) -> anyhow::Result<()> {
    let store = ProfileStore::new(&config.storage);
    let mut profile = store.load()?;
    profile.progress.check_in(Utc::now());

    // Saved settings, then command-line overrides
    profile.config.apply(&args.overrides());
    config.session = profile.config.clone();

    println!("連続 {} 日目", profile.progress.daily_streak);

    let processor = Arc::new(load_processor(&config.lexicon));
    let state = Arc::new(AppState::new(config, profile, store));
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(processor, seeded_rng(args.seed));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("task exited: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    state.save_profile().await.context("saving progress")?;
    tasks.shutdown().await;
    Ok(())
}

fn report(config: &Config) -> anyhow::Result<()> {
    let profile = ProfileStore::new(&config.storage).load()?;
    let report = profile.progress.report();

    if report.is_empty() {
        println!("データなし: 練習を始めると、ここに記録が表示されます。");
        return Ok(());
    }

    println!("連続日数  {}", report.daily_streak);
    println!("練習数    {}", report.total_answered);
    println!("正答率    {}%", report.accuracy);
    println!("習得済    {}", report.mastered);
    if !report.weakest.is_empty() {
        println!();
        println!("苦手な単語:");
        for weak in &report.weakest {
            println!(
                "  {:<16} {}/{} ({:.0}%)",
                weak.id,
                weak.correct,
                weak.seen,
                weak.rate * 100.0
            );
        }
    }
    Ok(())
}

fn verify(config: &Config) -> anyhow::Result<()> {
    let processor = load_processor(&config.lexicon);
    let report = validate_lexicon(processor.lexicon());

    for (id, issue) in &report.problems {
        println!("{id}: {issue}");
    }
    println!(
        "lexicon {}: {} entries checked, {} with problems",
        processor.lexicon().version(),
        report.entries_checked,
        report.failing_entries()
    );

    if !report.is_clean() {
        anyhow::bail!("lexicon has {} problems", report.problems.len());
    }
    Ok(())
}

fn distractors(
    config: &Config,
    word_id: &str,
    form: ConjugationType,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let processor = load_processor(&config.lexicon);
    let word = processor
        .lexicon()
        .get(word_id)
        .with_context(|| format!("unknown word id '{word_id}'"))?;

    let mut rng = seeded_rng(seed);
    println!(
        "{} ({}) {}",
        word.headword(),
        word.kana(),
        form.label()
    );
    println!("  correct: {}", word.correct_answer(form).unwrap_or("-"));
    for distractor in processor.distractors(word, form, &mut rng) {
        println!("  wrong:   {distractor}");
    }
    Ok(())
}
