//! `vtdocs` - CLI for the Velora Connected Vehicles API documentation
//!
//! This binary builds the static site and exposes its pages, code samples
//! and search from the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vtdocs::cli::actions::{self, CopyOutcome};
use vtdocs::cli::{
    BuildCommand, Cli, Command, ConfigCommand, CopyCommand, RoutesCommand, SearchCommand,
    ShowCommand,
};
use vtdocs::clipboard::{ClipboardService, MemoryClipboard, SystemClipboard};
use vtdocs::render::{build_site, RenderOptions};
use vtdocs::theme::ThemeHandle;
use vtdocs::widgets::WidgetContext;
use vtdocs::{init_logging, search, Config, Site};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Build(cmd) => handle_build(&config, cmd).await,
        Command::Routes(cmd) => handle_routes(&config, &cmd),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Copy(cmd) => handle_copy(&config, cmd).await,
        Command::Search(cmd) => handle_search(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

async fn handle_build(config: &Config, cmd: BuildCommand) -> anyhow::Result<()> {
    let site = Site::new(&config.site.base_path);
    let mut options = RenderOptions::from_config(config);
    if let Some(theme) = cmd.theme {
        options = options.with_theme(theme.into());
    }
    let out = cmd.out.unwrap_or_else(|| config.output_dir());

    let report = build_site(&site, options, &out)
        .await
        .with_context(|| format!("building site into {}", out.display()))?;

    println!(
        "Wrote {} pages ({} code groups, {} bytes) to {}",
        report.pages.len(),
        report.code_groups,
        report.bytes,
        report.out_dir.display()
    );
    Ok(())
}

fn handle_routes(config: &Config, cmd: &RoutesCommand) -> anyhow::Result<()> {
    let site = Site::new(&config.site.base_path);
    let entries = actions::route_entries(&site);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:<24} {}", entry.href, entry.label);
        }
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let site = Site::new(&config.site.base_path);
    let outline = actions::outline(&site, &cmd.path)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!("{}", outline.title);
    println!("{}", "=".repeat(outline.title.len()));
    println!();
    for section in &outline.sections {
        println!("  {section}");
    }
    println!();
    if outline.groups.is_empty() {
        println!("No code samples on this page.");
    }
    for group in &outline.groups {
        let title = group.title.as_deref().unwrap_or("-");
        println!("[{}] {} / {}", group.index, group.section, title);
        println!("    tabs: {}", group.tabs.join(", "));
    }
    Ok(())
}

async fn handle_copy(config: &Config, cmd: CopyCommand) -> anyhow::Result<()> {
    let site = Site::new(&config.site.base_path);
    let clipboard: Arc<dyn ClipboardService> = if cmd.dry_run {
        Arc::new(MemoryClipboard::new())
    } else {
        Arc::new(SystemClipboard::new())
    };
    let ctx = WidgetContext::new(ThemeHandle::fixed(config.theme.default), clipboard)
        .with_copy_revert(config.copy_revert());

    let outcome = actions::copy_example(&site, &cmd.path, cmd.group, cmd.tab.as_deref(), ctx)
        .await
        .with_context(|| format!("copying from {}", cmd.path))?;

    print_copy(&outcome, cmd.dry_run);
    Ok(())
}

fn print_copy(outcome: &CopyOutcome, dry_run: bool) {
    if dry_run {
        println!("{}", outcome.code);
        println!();
    }
    println!(
        "Copied! {} ({}) from {} group {}: {} bytes via {} clipboard, blake3 {}",
        outcome.label,
        outcome.language,
        outcome.route,
        outcome.group,
        outcome.receipt.bytes,
        outcome.receipt.clipboard,
        &outcome.receipt.content_hash[..16]
    );
}

fn handle_search(config: &Config, cmd: &SearchCommand) -> anyhow::Result<()> {
    let site = Site::new(&config.site.base_path);
    let hits = search::search(&site, &cmd.query, cmd.limit);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No results for \"{}\"", cmd.query);
        return Ok(());
    }
    for hit in hits {
        let href = site.routes().href(hit.route);
        match &hit.section {
            Some(section) => println!("{} > {}  ({href})", hit.title, section),
            None => println!("{}  ({href})", hit.title),
        }
        println!("    {}", hit.snippet);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Title:              {}", config.site.title);
                println!("  Base path:          {}", config.site.base_path);
                println!("  Output directory:   {}", config.output_dir().display());
                println!();
                println!("[Theme]");
                println!("  Default:            {}", config.theme.default);
                println!();
                println!("[Widgets]");
                println!("  Copy revert (ms):   {}", config.widgets.copy_revert_ms);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            actions::validate_config(&path)
                .with_context(|| format!("invalid configuration {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
