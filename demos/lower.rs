//! Lowers a gallery of formulas to one or all operator bases.
//!
//! ```bash
//! cargo run --example lower -- --basis nand
//! cargo run --example lower -- --fresh -v
//! ```

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use formula_lowering::basis::Basis;
use formula_lowering::config::{Placeholder, RewriteConfig};
use formula_lowering::formula::Formula;
use formula_lowering::rewriter::Rewriter;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Target {
    NotAndOr,
    NotAnd,
    Nand,
    ImpliesNot,
    ImpliesFalse,
}

impl From<Target> for Basis {
    fn from(target: Target) -> Self {
        match target {
            Target::NotAndOr => Basis::NotAndOr,
            Target::NotAnd => Basis::NotAnd,
            Target::Nand => Basis::Nand,
            Target::ImpliesNot => Basis::ImpliesNot,
            Target::ImpliesFalse => Basis::ImpliesFalse,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Lower propositional formulas to a minimal operator basis")]
struct Cli {
    /// Target basis (all bases if omitted)
    #[arg(short, long, value_enum)]
    basis: Option<Target>,

    /// Pick a placeholder variable not occurring in the formula
    #[arg(long)]
    fresh: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn gallery() -> Vec<Formula> {
    let p = Formula::var("p");
    let q = Formula::var("q");
    let r = Formula::var("r");
    vec![
        p.clone(),
        Formula::tt(),
        p.clone() & q.clone(),
        Formula::implies(p.clone(), q.clone()),
        p.clone() ^ q.clone(),
        Formula::nor(p.clone(), q.clone()),
        Formula::iff(Formula::nand(p.clone(), r.clone()), q.clone() | Formula::ff()),
        !Formula::implies(p & Formula::tt(), Formula::xor(q, r)),
    ]
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = RewriteConfig::default();
    if cli.fresh {
        config = config.with_placeholder(Placeholder::Fresh);
    }
    let rewriter = Rewriter::new(config);

    let bases: Vec<Basis> = match cli.basis {
        Some(target) => vec![target.into()],
        None => Basis::ALL.to_vec(),
    };

    for formula in gallery() {
        println!("{} (size {})", formula, formula.size());
        for &basis in &bases {
            let res = rewriter.reduce(&formula, basis)?;
            println!("  {:>13}: {} (size {})", basis.name(), res, res.size());
        }
    }

    log::info!("Lowered {} formulas to {} bases", gallery().len(), bases.len());

    Ok(())
}
