use clap::{Parser, Subcommand};
use simple_folio::config::{self, CONFIG_FILENAME};
use simple_folio::export::ExportedFile;
use simple_folio::fields::{FieldId, Form};
use simple_folio::output;
use simple_folio::session::Session;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// File name of the live preview written by the `preview` command.
const PREVIEW_FILENAME: &str = "preview.html";

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Single-page portfolio generator")]
#[command(long_about = "\
Single-page portfolio generator

Fill in your profile in folio.toml (or with --set), and get back one
self-contained HTML page with embedded styling and a scroll-reveal
animation.

Profile fields (all optional, empty fields show a placeholder):

  name, title, bio
  skills                 comma-separated: \"Rust, SQL, Public Speaking\"
  project_title, project_desc, project_link
  email, linkedin, github
  image_url              ignored when --image is given

Examples:

  simple-folio gen-config > folio.toml
  simple-folio --set name=\"Ada Lovelace\" --image me.png export
  simple-folio preview --watch

Run 'simple-folio gen-config' to generate a documented folio.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing folio.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Set a profile field, overriding folio.toml (repeatable)
    #[arg(
        long = "set",
        value_name = "FIELD=VALUE",
        value_parser = Form::parse_assignment,
        global = true
    )]
    set: Vec<(FieldId, String)>,

    /// Profile image file; takes precedence over image_url
    #[arg(long, global = true)]
    image: Option<PathBuf>,

    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rendered portfolio fragment
    Render,
    /// Write the standalone <name>-portfolio.html
    Export,
    /// Write preview.html, optionally re-rendering on every change
    Preview {
        /// Keep running and re-render when folio.toml or the image changes
        #[arg(long)]
        watch: bool,
        /// Polling interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval: u64,
    },
    /// Load the profile and show what will be rendered
    Check {
        /// Print the profile fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Render => {
            let session = load_session(&cli)?;
            println!("{}", session.preview().fragment());
        }
        Command::Export => {
            let session = load_session(&cli)?;
            let file = session.export();
            let path = file.save(&cli.output)?;
            output::print_export(&file, &path);
        }
        Command::Preview { watch, interval } => {
            let session = load_session(&cli)?;
            write_preview(&session, &cli.output, 1)?;
            if *watch {
                watch_inputs(&cli, Duration::from_millis(*interval));
            }
        }
        Command::Check { json } => {
            let session = load_session(&cli)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&session.fields())?);
            } else {
                output::print_profile(&session.fields(), session.image());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "simple_folio=debug"
    } else {
        "simple_folio=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build a session from folio.toml, then apply `--set` edits and `--image`.
fn load_session(cli: &Cli) -> Result<Session, Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.source)?;
    let mut session = Session::new(config);
    for (field, value) in &cli.set {
        session.edit(*field, value.clone());
    }
    if let Some(image) = &cli.image {
        session.upload_blocking(image)?;
    }
    Ok(session)
}

fn write_preview(
    session: &Session,
    dir: &Path,
    generation: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = ExportedFile {
        filename: PREVIEW_FILENAME.to_string(),
        ..session.export()
    };
    let path = file.save(dir)?;
    output::print_preview(&path, generation);
    Ok(())
}

/// Modification times of every input the preview depends on.
fn input_stamps(cli: &Cli) -> Vec<Option<SystemTime>> {
    let mut inputs = vec![cli.source.join(CONFIG_FILENAME)];
    inputs.extend(cli.image.clone());
    inputs
        .iter()
        .map(|path| std::fs::metadata(path).and_then(|m| m.modified()).ok())
        .collect()
}

/// Poll the inputs and rewrite the preview whenever one changes.
///
/// Errors while reloading are reported and the previous preview is kept;
/// watching only stops when the process is interrupted.
fn watch_inputs(cli: &Cli, interval: Duration) {
    println!(
        "Watching {} (Ctrl-C to stop)",
        cli.source.join(CONFIG_FILENAME).display()
    );
    let mut last = input_stamps(cli);
    let mut generation = 1;
    loop {
        std::thread::sleep(interval);
        let current = input_stamps(cli);
        if current == last {
            continue;
        }
        last = current;
        generation += 1;
        let result =
            load_session(cli).and_then(|session| write_preview(&session, &cli.output, generation));
        if let Err(err) = result {
            eprintln!("Error: {err}");
        }
    }
}
