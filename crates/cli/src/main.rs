use anyhow::{Context, Result};
use catalog::{Catalog, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use principles::{
    use_it, Journal, Machine, MultiFunctionMachine, MultiFunctionPrinter, MyPrinter,
    OldFashionPrinter, PersistenceManager, Person, Photocopier, Printer, Rectangle,
    Relationships, Research, Scanner, Shape, Square,
};
use specification::prelude::*;
use specification::ProductFilter;
use std::path::{Path, PathBuf};

/// solid-demo - SOLID design principles, one subcommand each
#[derive(Parser)]
#[command(name = "solid-demo")]
#[command(about = "Runs small demonstrations of the SOLID design principles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Single Responsibility: journal entries and separate persistence
    Srp {
        /// Where to save the journal
        #[arg(long, default_value = "journal.txt")]
        output: PathBuf,
    },

    /// Open-Closed: filter products with composable specifications
    Ocp {
        /// Catalog file (`name::color::size` per line); the built-in demo catalog if omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Keep products of this color
        #[arg(long)]
        color: Option<Color>,

        /// Keep products of this size
        #[arg(long)]
        size: Option<Size>,

        /// How to join --color and --size (and, or; defaults to and)
        #[arg(long)]
        operator: Option<Operator>,

        /// Print matching products as JSON
        #[arg(long)]
        json: bool,
    },

    /// Liskov Substitution: rectangle versus square
    Lsp,

    /// Interface Segregation: printers and scanners
    Isp,

    /// Dependency Inversion: relationship browsing
    Dip,

    /// Run every demo in order
    All {
        /// Where the SRP demo saves its journal
        #[arg(long, default_value = "journal.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Srp { output } => handle_srp(&output)?,
        Commands::Ocp {
            catalog,
            color,
            size,
            operator,
            json,
        } => handle_ocp(catalog.as_deref(), color, size, operator, json)?,
        Commands::Lsp => handle_lsp(),
        Commands::Isp => handle_isp()?,
        Commands::Dip => handle_dip(),
        Commands::All { output } => {
            handle_srp(&output)?;
            handle_ocp(None, None, None, None, false)?;
            handle_lsp();
            handle_isp()?;
            handle_dip();
        }
    }

    Ok(())
}

fn header(title: &str) {
    println!("{}", format!("== {} ==", title).bold().blue());
}

/// Handle the 'srp' command
fn handle_srp(output: &Path) -> Result<()> {
    header("Single Responsibility");

    let mut journal = Journal::new();
    journal.add_entry("I coded one program");
    journal.add_entry("I ate icecream");
    println!("Journal entries:\n{}", journal);

    PersistenceManager::save_to_file(&journal, output)
        .with_context(|| format!("Failed to save journal to {}", output.display()))?;
    let saved = PersistenceManager::load_from_file(output)
        .with_context(|| format!("Failed to read journal back from {}", output.display()))?;
    println!("{} Saved to {}:\n{}", "✓".green(), output.display(), saved);
    Ok(())
}

/// Handle the 'ocp' command
fn handle_ocp(
    catalog_path: Option<&Path>,
    color: Option<Color>,
    size: Option<Size>,
    operator: Option<Operator>,
    json: bool,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::demo(),
    };

    if let Some(spec) = requested_spec(color, size, operator)? {
        tracing::debug!("Filtering {} products with {}", catalog.len(), spec.name());
        let matches = collect_matches(&catalog, &*spec);
        if json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            header("Open-Closed");
            for product in &matches {
                println!(" - {}", product);
            }
            println!("{} {} of {} products matched", "✓".green(), matches.len(), catalog.len());
        }
        return Ok(());
    }

    header("Open-Closed");
    let products = catalog.products();

    println!("Green products (old):");
    for product in ProductFilter.filter_by_color(products, Color::Green) {
        println!(" - {} is green", product.name);
    }

    println!("Green products (new):");
    let green = ColorSpecification::new(Color::Green);
    for product in collect_matches(&catalog, &green) {
        println!(" - {} is green", product.name);
    }

    println!("Large products (new):");
    let large = SizeSpecification::new(Size::Large);
    for product in collect_matches(&catalog, &large) {
        println!(" - {} is large", product.name);
    }

    println!("Large blue products:");
    let large_blue = large.and(ColorSpecification::new(Color::Blue));
    for product in collect_matches(&catalog, &large_blue) {
        println!(" - {} is large and blue", product.name);
    }

    Ok(())
}

/// Build the specification asked for on the command line.
///
/// `--operator` only joins two specifications; given with fewer it is
/// ignored and a warning is logged.
fn requested_spec(
    color: Option<Color>,
    size: Option<Size>,
    operator: Option<Operator>,
) -> Result<Option<SharedSpec<Product>>> {
    let mut parts: Vec<SharedSpec<Product>> = Vec::new();
    if let Some(color) = color {
        parts.push(ColorSpecification::new(color).shared());
    }
    if let Some(size) = size {
        parts.push(SizeSpecification::new(size).shared());
    }

    if let Some(op) = unused_operator(operator, parts.len()) {
        tracing::warn!(
            "--operator {} has no effect without both --color and --size",
            op
        );
    }

    let requested = match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => {
            let right = parts.pop().context("missing size specification")?;
            let left = parts.pop().context("missing color specification")?;
            let operator = operator.unwrap_or(Operator::And);
            Some(combine(left, right, operator).context("Failed to combine specifications")?)
        }
    };
    Ok(requested)
}

/// The operator the user passed if there is nothing for it to join.
fn unused_operator(operator: Option<Operator>, spec_count: usize) -> Option<Operator> {
    operator.filter(|_| spec_count < 2)
}

/// Run a filter pass, reporting and skipping products that can't be judged.
fn collect_matches<'a>(catalog: &'a Catalog, spec: &'a dyn Specification<Product>) -> Vec<&'a Product> {
    BetterFilter
        .filter(catalog.products(), spec)
        .filter_map(|result| match result {
            Ok(product) => Some(product),
            Err(e) => {
                eprintln!("{} {}", "skipped:".yellow(), e);
                None
            }
        })
        .collect()
}

/// Handle the 'lsp' command
fn handle_lsp() {
    header("Liskov Substitution");

    let mut shapes: Vec<(&str, Box<dyn Shape>)> = vec![
        ("Rectangle(2, 3)", Box::new(Rectangle::new(2, 3))),
        ("Square(5)", Box::new(Square::new(5))),
    ];
    for (label, shape) in shapes.iter_mut() {
        let check = use_it(shape.as_mut());
        let verdict = if check.holds() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "{} {}: expected area {}, got {}",
            verdict, label, check.expected, check.actual
        );
    }
}

/// Handle the 'isp' command
fn handle_isp() -> Result<()> {
    header("Interface Segregation");

    let mut mfp = MultiFunctionPrinter::default();
    Machine::print(&mut mfp, "contract")?;
    mfp.fax("contract")?;
    Machine::scan(&mut mfp, "contract")?;
    println!("MultiFunctionPrinter handled: {}", mfp.jobs.join(", "));

    let mut old = OldFashionPrinter::default();
    Machine::print(&mut old, "memo")?;
    if let Err(e) = old.fax("memo") {
        println!("{} {}", "✗".red(), e);
    }

    let mut machine = MultiFunctionMachine::new(MyPrinter::default(), Photocopier::default());
    Scanner::scan(&mut machine, "report");
    Printer::print(&mut machine, "report");
    println!(
        "{} MultiFunctionMachine printed {:?} and scanned {:?}",
        "✓".green(),
        machine.printer().printed,
        machine.scanner().scanned
    );
    Ok(())
}

/// Handle the 'dip' command
fn handle_dip() {
    header("Dependency Inversion");

    let parent = Person::new("John");
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &Person::new("Chris"));
    relationships.add_parent_and_child(&parent, &Person::new("Matt"));

    let research = Research::new(&relationships, &parent);
    for finding in research.findings() {
        println!(" - {}", finding);
    }
}
