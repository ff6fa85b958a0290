//! Command handlers.

use crate::cli::{Cli, Commands, PrefsAction, RunArgs, ToggleTarget};
use crate::render::RendererRegistry;
use crate::state::AppState;
use ag_classifier::classify;
use ag_core::category::TaskCategory;
use ag_core::prefs::Preferences;
use ag_core::task::TaskResult;
use ag_mock::MockGenerator;
use ag_session::TaskRunner;
use anyhow::Context;
use chrono::Local;
use rand::seq::SliceRandom;

const TAGLINES: &[&str] = &[
    "Агенты уже договариваются, кто возьмется за вашу задачу.",
    "Ни один агент не пострадал при выполнении этой задачи.",
    "Мультиагентная система: потому что один агент не может спорить сам с собой.",
    "Подзадачи распределены. Кофе для агентов заказан.",
];

/// Output switches shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

/// Classification and the category list run without opening storage.
pub fn needs_state(command: &Commands) -> bool {
    !matches!(command, Commands::Classify { .. } | Commands::Categories)
}

pub async fn dispatch(cli: Cli, state: Option<&AppState>) -> anyhow::Result<()> {
    let out = Output {
        json: cli.json,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Run(args) => run(args, cli.seed, require(state)?, out).await,
        Commands::Classify { text } => {
            classify_text(&text, out);
            Ok(())
        }
        Commands::Categories => {
            categories(out);
            Ok(())
        }
        Commands::History { limit } => history(require(state)?, limit, out),
        Commands::ClearHistory => {
            require(state)?.history()?.clear()?;
            if !out.quiet {
                println!("История задач очищена.");
            }
            Ok(())
        }
        Commands::Prefs { action } => prefs(require(state)?, action, out),
    }
}

fn require(state: Option<&AppState>) -> anyhow::Result<&AppState> {
    state.context("session store is not open")
}

async fn run(args: RunArgs, seed: Option<u64>, state: &AppState, out: Output) -> anyhow::Result<()> {
    let prefs = state.prefs.load()?;
    let mode = args.mode.unwrap_or(prefs.default_mode);
    let run_prefs = Preferences {
        simulated_delay_ms: if args.no_delay { 0 } else { prefs.simulated_delay_ms },
        ..prefs.clone()
    };

    let generator = match seed {
        Some(seed) => MockGenerator::seeded(seed, Local::now().naive_local()),
        None => MockGenerator::new(),
    };

    let show_progress = !(out.quiet || out.json);
    if show_progress && prefs.show_jokes {
        if let Some(line) = TAGLINES.choose(&mut rand::thread_rng()) {
            eprintln!("{line}");
        }
    }

    let mut runner = TaskRunner::with_generator(generator, run_prefs)
        .with_history(state.history()?)
        .on_status(move |update| {
            if show_progress {
                eprintln!("[{:>3}%] {}", update.progress, update.message);
            }
        });

    let result = runner.submit(&args.text, mode).await?;
    print_result(&result, out)
}

fn print_result(result: &TaskResult, out: Output) -> anyhow::Result<()> {
    if out.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("[{}] {}", result.category, result.category.label());
    println!("{}", result.summary);

    if let Some(payload) = &result.payload {
        let lines = RendererRegistry::with_defaults().render(payload);
        if !lines.is_empty() {
            println!();
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn classify_text(text: &str, out: Output) {
    let category = classify(text);
    if out.json {
        println!(
            "{}",
            serde_json::json!({ "text": text, "category": category.as_str() })
        );
    } else {
        println!("{category}");
    }
}

fn categories(out: Output) {
    if out.json {
        let list: Vec<_> = TaskCategory::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "category": c.as_str(),
                    "label": c.label(),
                    "payload": c.has_payload(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(list));
        return;
    }
    for c in TaskCategory::ALL {
        let marker = if c.has_payload() { "*" } else { " " };
        println!("{marker} {:<20} {}", c.as_str(), c.label());
    }
}

fn history(state: &AppState, limit: Option<usize>, out: Output) -> anyhow::Result<()> {
    let mut entries = state.history()?.list()?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if out.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("История задач пуста.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {:<6} {:<20} {}",
            entry.timestamp.with_timezone(&Local).format("%d.%m.%Y %H:%M"),
            entry.mode,
            entry.category.as_str(),
            entry.task
        );
    }
    Ok(())
}

fn prefs(state: &AppState, action: Option<PrefsAction>, out: Output) -> anyhow::Result<()> {
    match action {
        None => {}
        Some(PrefsAction::Set { key, value }) => {
            state.prefs.set(&key, &value)?;
        }
        Some(PrefsAction::Toggle { target }) => {
            match target {
                ToggleTarget::DarkMode => state.prefs.toggle_dark_mode()?,
                ToggleTarget::ShowJokes => state.prefs.toggle_show_jokes()?,
            };
        }
    }

    let current = state.prefs.load()?;
    if out.json {
        println!("{}", serde_json::to_string_pretty(&current)?);
    } else {
        println!("darkMode          {}", current.dark_mode);
        println!("showJokes         {}", current.show_jokes);
        println!("defaultMode       {}", current.default_mode);
        println!("historyLimit      {}", current.history_limit);
        println!("simulatedDelayMs  {}", current.simulated_delay_ms);
        if !out.quiet {
            println!("dataDir           {}", state.data_dir.display());
        }
    }
    Ok(())
}
