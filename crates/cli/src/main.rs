use anyhow::{Context as AnyhowContext, Result};
use applet_template::{
    assemble, derive_inputs, extract_rule, render_snippet, walk, AppletMeta, DecisionOracle,
    PlaceholderRegistry, TerminalOracle,
};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "applet-forge")]
#[command(about = "Parameterize an automation rule into a reusable applet template", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the rule JSON document (must carry a top-level "rule" key)
    path: PathBuf,

    /// Applet id, e.g. 'leisureExpenses' (prompted for when omitted)
    #[arg(long)]
    id: Option<String>,

    /// Applet title, e.g. 'Check Leisurely Spending' (prompted for when omitted)
    #[arg(long)]
    title: Option<String>,

    /// Applet icon emoji (prompted for when omitted; empty falls back to 🎉)
    #[arg(long)]
    icon: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_meta(
    flag: Option<String>,
    oracle: &mut dyn DecisionOracle,
    prompt: &str,
) -> Result<String> {
    let value = match flag {
        Some(value) => value,
        None => oracle.ask_text(prompt, "")?,
    };
    Ok(value.trim().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let raw = fs::read_to_string(&cli.path)
        .with_context(|| format!("Failed to read rule document {}", cli.path.display()))?;
    let mut rule = extract_rule(&raw)
        .with_context(|| format!("Invalid rule document {}", cli.path.display()))?;

    // Prompts go to stderr; stdout is reserved for the rendered snippet.
    let stdin = io::stdin();
    let mut oracle = TerminalOracle::new(stdin.lock(), io::stderr());

    let id = resolve_meta(
        cli.id,
        &mut oracle,
        "Enter the new appletId (e.g. 'leisureExpenses')",
    )?;
    let title = resolve_meta(
        cli.title,
        &mut oracle,
        "Enter the applet's title (e.g. 'Check Leisurely Spending')",
    )?;
    let icon = resolve_meta(
        cli.icon,
        &mut oracle,
        "Enter an emoji or icon for the applet (e.g. '🎉')",
    )?;
    let meta = AppletMeta::new(id, title, icon);

    let mut registry = PlaceholderRegistry::new();
    walk(&mut rule, &mut registry, &mut oracle)?;
    log::info!("{} placeholder(s) recorded", registry.len());

    let inputs = derive_inputs(&registry);
    let config = assemble(meta, rule, inputs);
    let snippet = render_snippet(&config)?;

    println!();
    println!("---- Your new applet config ----");
    println!();
    println!("/* Insert into your appletConfigs in AppletConfigs.js */");
    println!("{snippet}");
    println!();
    println!("Done! You can paste the above object into your `appletConfigs`.");

    Ok(())
}
