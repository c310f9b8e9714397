mod commands;
mod error;
mod reader;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use error::{exit, menu_exit_code, CliError};
use pizza_core::{Diagnostic, Menu, MenuDocument};
use reader::{find_menu_files, load_menu_file, read_config, resolve_menu_path};

const LOG_ENV: &str = "PIZZA_MENU_LOG";

#[derive(Parser)]
#[command(
    name = "pizza-menu",
    version,
    about = "Pizza menu loader: parse, validate and quote from PizzaMenu files"
)]
struct Cli {
    /// Log loader activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a menu and print its toppings and pizzas
    Parse {
        /// Menu file, or a directory holding PizzaMenu.txt
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate menu files and report diagnostics
    Validate {
        /// Menu file or directory of menus
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Price an order of pizzas picked from a menu
    Quote {
        /// Menu file, or a directory holding PizzaMenu.txt
        path: PathBuf,

        /// Customer name printed on the quote
        #[arg(short, long)]
        customer: Option<String>,

        /// Catalog indexes of the ordered pizzas, starting at 0
        #[arg(required = true)]
        indexes: Vec<usize>,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("{e}");
            process::exit(exit::USAGE);
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            path,
            format,
            output,
        } => match run_parse(&path, format, output.as_deref()) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&e),
        },
        Commands::Validate { path, format } => match run_validate(&path, format) {
            Ok((output, code)) => {
                println!("{output}");
                if code != exit::SUCCESS {
                    process::exit(code);
                }
            }
            Err(e) => fail(&e),
        },
        Commands::Quote {
            path,
            customer,
            indexes,
        } => match commands::quote::run_quote(&path, customer.as_deref(), &indexes) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&e),
        },
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("Error: {err}");
    process::exit(err.exit_code());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_parse(
    input_path: &Path,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<String, CliError> {
    let config = read_config(input_path)?;
    let menu_path = resolve_menu_path(input_path, &config);
    let menu = load_menu_file(&menu_path)?;

    let text = match format {
        OutputFormat::Json => to_pretty_json(&MenuDocument::from(&menu))?,
        OutputFormat::Human => render_menu(&menu, config.shop.as_deref()),
    };

    if let Some(out_path) = output_file {
        std::fs::write(out_path, &text).map_err(|e| CliError::Open {
            path: out_path.display().to_string(),
            source: e,
        })?;
        return Ok(format!("Written to {}", out_path.display()));
    }

    Ok(text)
}

fn render_menu(menu: &Menu, shop: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(shop) = shop {
        lines.push(shop.to_string());
    }

    lines.push(format!("Toppings ({}):", menu.toppings.len()));
    for topping in menu.toppings.all() {
        if topping.is_vegan() {
            lines.push(format!("  {topping} (vegan)"));
        } else {
            lines.push(format!("  {topping}"));
        }
    }

    lines.push(format!("Pizzas ({}):", menu.catalog.len()));
    for (index, pizza) in menu.catalog.iter().enumerate() {
        lines.push(format!("  {index} - {pizza}"));
    }

    lines.join("\n")
}

/// Validate every menu under a path, each with its own registry. Returns the
/// report and the exit code of the first failing file.
fn run_validate(input_path: &Path, format: OutputFormat) -> Result<(String, i32), CliError> {
    let config = read_config(input_path)?;
    let files = find_menu_files(input_path, &config)?;

    if files.is_empty() {
        return Err(CliError::Usage(format!(
            "No menu files found at: {}",
            input_path.display()
        )));
    }

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut passed: Vec<(String, Menu)> = Vec::new();
    let mut code = exit::SUCCESS;

    for path in &files {
        match load_menu_file(path) {
            Ok(menu) => passed.push((path.display().to_string(), menu)),
            Err(CliError::Menu { file, source }) => {
                if code == exit::SUCCESS {
                    code = menu_exit_code(&source);
                }
                diagnostics.push(Diagnostic::from_error(&source, &file));
            }
            Err(e) => return Err(e),
        }
    }

    let error_count = diagnostics.len();
    let file_count = files.len();

    if format == OutputFormat::Json {
        let output = serde_json::json!({
            "diagnostics": diagnostics,
            "summary": {
                "errors": error_count,
                "files": file_count,
            }
        });
        return Ok((to_pretty_json(&output)?, code));
    }

    let mut lines: Vec<String> = Vec::new();

    for (file, menu) in &passed {
        lines.push(format!(
            "{file}: ok ({} toppings, {} pizzas)",
            menu.toppings.len(),
            menu.catalog.len()
        ));
    }
    for d in &diagnostics {
        lines.push(format!(
            "{}:{} error[{}]: {}",
            d.file, d.line, d.code, d.message
        ));
    }

    let error_word = if error_count == 1 { "error" } else { "errors" };
    let file_word = if file_count == 1 { "file" } else { "files" };
    lines.push(format!("{error_count} {error_word} in {file_count} {file_word}."));

    Ok((lines.join("\n"), code))
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Usage(format!("JSON serialization error: {e}")))
}
