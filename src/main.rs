// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use certsearch::{
    expand, Catalog, Messages, PathBuilder, SearchBar, SearchConfig, SearchEngine, Suggestion,
    Translator,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, SourceArgs};

fn main() {
    // Logs go to stderr so `search --json` stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            limit,
            json,
            source,
        } => run_search(&query, limit, json, &source),
        Commands::Expand { query } => {
            run_expand(&query);
            Ok(())
        }
        Commands::Show { id, source } => run_show(&id, &source),
        Commands::Repl { source } => run_repl(&source),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ENGINE SETUP
// ═══════════════════════════════════════════════════════════════════════════

fn load_catalog(source: &SourceArgs) -> Result<Catalog> {
    match &source.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::bundled().context("loading bundled catalog"),
    }
}

fn load_config(source: &SourceArgs) -> Result<SearchConfig> {
    match &source.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_messages(source: &SourceArgs) -> Result<Messages> {
    match &source.messages {
        Some(path) => Messages::load(source.lang.clone(), path)
            .with_context(|| format!("loading messages {}", path.display())),
        None => Ok(Messages::bundled(&source.lang).unwrap_or_default()),
    }
}

fn build_engine(source: &SourceArgs) -> Result<SearchEngine<Messages>> {
    let catalog = load_catalog(source)?;
    let config = load_config(source)?;
    let messages = load_messages(source)?;
    let paths = PathBuilder::new(source.base_path.clone(), source.lang.clone());
    Ok(SearchEngine::with_parts(catalog, config, paths, messages))
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(query: &str, limit: Option<usize>, json: bool, source: &SourceArgs) -> Result<()> {
    let mut engine = build_engine(source)?;
    if let Some(limit) = limit {
        if limit == 0 {
            bail!("--limit must be at least 1");
        }
        let config = SearchConfig {
            limit,
            ..engine.config().clone()
        };
        engine = engine.with_config(config);
    }

    let run = engine.run(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&run.suggestions)?);
        return Ok(());
    }

    if run.suggestions.is_empty() {
        println!("{}", themed(muted, &[], &no_results(&engine)));
        return Ok(());
    }

    print_suggestions(&run.suggestions, &run.query, None);
    Ok(())
}

fn run_expand(query: &str) {
    let normalized = certsearch::normalize_query(query);
    for term in expand(&normalized) {
        if term == normalized {
            println!("{}", themed(accent, &[BOLD], &term));
        } else {
            println!("{}", term);
        }
    }
}

fn run_show(id: &str, source: &SourceArgs) -> Result<()> {
    let catalog = load_catalog(source)?;
    let Some(record) = catalog.get(id) else {
        bail!("no certification with id {:?}", id);
    };

    section_top(&format!("{} - {}", record.acronym, record.name));
    let level = record.level.map(level_label).unwrap_or_default();
    let kind = record.kind.map(|kind| kind.as_str()).unwrap_or_default();
    row(&format!(" {}  {}", level, themed(muted, &[], kind)));
    for line in wrap(&record.description, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }

    if !record.domains.is_empty() {
        section_mid("DOMAINS");
        for domain in &record.domains {
            let weight = domain
                .weight
                .map(|w| themed(muted, &[], &format!(" ({}%)", w)))
                .unwrap_or_default();
            row(&format!(" {}{}", themed(link, &[BOLD], &domain.name), weight));
            for line in wrap(&domain.topics.join(", "), BOX_WIDTH - 4) {
                row(&format!("   {}", line));
            }
        }
    }

    if !record.resources.is_empty() {
        section_mid("RESOURCES");
        for resource in &record.resources {
            row(&format!(" {} {}", resource_badge(resource.kind), resource.title));
            row(&format!("   {}", themed(muted, &[], &resource.url)));

            let details = &resource.details;
            let mut facts = Vec::new();
            if let Some(difficulty) = details.difficulty {
                facts.push(difficulty.as_str().to_string());
            }
            if let Some(author) = &details.author {
                facts.push(format!("by {}", author));
            }
            if let Some(duration) = &details.duration {
                facts.push(duration.clone());
            }
            if !facts.is_empty() {
                row(&format!("   {}", facts.join(" · ")));
            }
        }
    }

    section_bot();
    Ok(())
}

/// Line-driven search bar. Time is simulated: every typed line advances the
/// clock past the debounce so results show up immediately.
fn run_repl(source: &SourceArgs) -> Result<()> {
    let engine = build_engine(source)?;
    let mut bar = SearchBar::new(engine.config());
    let mut clock = Duration::ZERO;
    let step = engine.config().debounce();

    println!(
        "{}",
        themed(muted, &[], "type to search · :down :up :enter :esc :quit")
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", themed(accent, &[BOLD], "›"));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" | ":q" => break,
            ":down" => bar.arrow_down(),
            ":up" => bar.arrow_up(),
            ":esc" => bar.escape(),
            ":enter" => match bar.enter() {
                Some(navigation) => {
                    println!("→ {}", themed(good, &[BOLD], &navigation.path));
                    continue;
                }
                None => println!("{}", themed(muted, &[], "nothing focused")),
            },
            text => {
                bar.input(text, clock);
                clock += step;
                bar.tick(clock, &engine);
            }
        }

        if bar.suggestions().is_empty() {
            if !bar.text().trim().is_empty() {
                println!("{}", themed(muted, &[], &no_results(&engine)));
            }
        } else {
            print_suggestions(bar.suggestions(), bar.text(), bar.focused());
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

fn no_results<T: Translator>(engine: &SearchEngine<T>) -> String {
    engine.translator().t("search.noResults")
}

fn print_suggestions(suggestions: &[Suggestion], query: &str, focused: Option<usize>) {
    for (i, suggestion) in suggestions.iter().enumerate() {
        let marker = if focused == Some(i) {
            themed(accent, &[BOLD], "▸")
        } else {
            " ".to_string()
        };
        let title = highlight_matches(&suggestion.title, query.trim());
        println!(
            "{} {} {} {}",
            marker,
            score_value(suggestion.score),
            match_type_badge(suggestion.match_type),
            pad_right(&title, 56),
        );

        let mut meta = vec![suggestion.path.clone()];
        if let Some(category) = &suggestion.category {
            meta.push(category.clone());
        }
        if let Some(level) = suggestion.level {
            meta.push(level.as_str().to_string());
        }
        println!("{}", themed(muted, &[], &format!("                  {}", meta.join(" · "))));
    }
}
