use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, Level};

use querydsl::logger;
use querydsl::mapping::{self, MappingRegistry};
use querydsl::{QueryParser, ParserSettings};


const VERSION: &str = env!("CARGO_PKG_VERSION");


#[derive(Parser, Debug)]
#[command(name = "querydsl")]
#[command(about = "Compiles a query DSL document and prints the resulting tree")]
#[command(version)]
struct Cli {
    /// Mapping document giving the type of each field
    #[arg(long)]
    mapping: Option<PathBuf>,

    /// Parser settings document
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Compile the document as a filter instead of a query
    #[arg(long)]
    filter: bool,

    /// Log each dispatch
    #[arg(short, long)]
    verbose: bool,

    /// Query document, or "-" to read stdin
    input: PathBuf,
}


fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("cannot read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
    }
}


fn load_mappings(path: &Path) -> Result<MappingRegistry> {
    let json = querydsl::json::from_str(&read_input(path)?)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let mappings = mapping::parse::parse(&json)
        .with_context(|| format!("invalid mapping in {}", path.display()))?;

    info!("Loaded {} field mappings from {}", mappings.len(), path.display());
    Ok(mappings)
}


fn load_settings(path: &Path) -> Result<ParserSettings> {
    ParserSettings::from_json(&read_input(path)?)
        .with_context(|| format!("invalid settings in {}", path.display()))
}


fn run(cli: Cli) -> Result<()> {
    let mappings = match cli.mapping {
        Some(ref path) => load_mappings(path)?,
        None => MappingRegistry::new(),
    };

    let settings = match cli.settings {
        Some(ref path) => load_settings(path)?,
        None => ParserSettings::default(),
    };

    let parser = QueryParser::new().with_settings(settings);
    let text = read_input(&cli.input)?;

    if cli.filter {
        let filter = parser.parse_filter_str(&mappings, &text)?;
        println!("{:#?}", filter);
    } else {
        let query = parser.parse_str(&mappings, &text)?;
        println!("{:#?}", query);
    }

    Ok(())
}


fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::Debug } else { Level::Warn };
    if let Err(e) = logger::init(level) {
        eprintln!("cannot set up logging: {}", e);
    }

    info!("querydsl ({})", VERSION);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
