use serde::Serialize;
use std::io::{Read, Write};
use strata::{
    DependencyRecord, Layering, Layout, LayoutOptions, Orientation, PositionScope,
    UnresolvedPolicy,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STRATA_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Strata(strata::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Strata(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<strata::Error> for CliError {
    fn from(value: strata::Error) -> Self {
        Self::Strata(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Validate,
}

#[derive(Debug, Clone, Copy)]
enum Preset {
    DependentDepth,
    ForwardFixedPoint,
}

/// Command-line overrides applied on top of the base options.
#[derive(Debug, Default)]
struct Overrides {
    layering: Option<Layering>,
    orientation: Option<Orientation>,
    positions: Option<PositionScope>,
    layer_base: Option<i32>,
    position_base: Option<i32>,
    append_unresolved: bool,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    preset: Option<Preset>,
    nodes: Option<String>,
    overrides: Overrides,
    out: Option<String>,
}

fn usage() -> &'static str {
    "strata\n\
\n\
USAGE:\n\
  strata [layout] [--pretty] [--config <path> | --preset depth|fixed-point] [--layering depth|fixed-point] [--orientation leaves-first|roots-first] [--positions layer|group] [--layer-base <n>] [--position-base <n>] [--append-unresolved] [--nodes <path>] [--out <path>] [<path>|-]\n\
  strata validate [--config <path> | --preset depth|fixed-point] [--layering depth|fixed-point] [--orientation leaves-first|roots-first] [--nodes <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON array of records: {\"component_name\", \"dependency_name\"} or {\"component\", \"group\", \"dependency\"}.\n\
  - --config reads a JSON layout options document; flags given on the command line override it.\n\
  - --nodes reads a JSON array of node names; records may only reference those names.\n\
  - layout prints the layout as JSON to stdout by default; use --out to write a file.\n\
  - Set STRATA_LOG (e.g. STRATA_LOG=debug) to control diagnostics on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a str, CliError> {
    it.next()
        .map(String::as_str)
        .ok_or(CliError::Usage(usage()))
}

fn parse_flag<T: std::str::FromStr>(value: &str) -> Result<T, CliError> {
    value.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "validate" => args.command = Command::Validate,
            "--pretty" => args.pretty = true,
            "--config" => args.config = Some(next_value(&mut it)?.to_string()),
            "--preset" => {
                args.preset = Some(match next_value(&mut it)? {
                    "depth" | "dependent-depth" => Preset::DependentDepth,
                    "fixed-point" | "forward-fixed-point" => Preset::ForwardFixedPoint,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--layering" => args.overrides.layering = Some(parse_flag(next_value(&mut it)?)?),
            "--orientation" => {
                args.overrides.orientation = Some(parse_flag(next_value(&mut it)?)?);
            }
            "--positions" => args.overrides.positions = Some(parse_flag(next_value(&mut it)?)?),
            "--layer-base" => args.overrides.layer_base = Some(parse_flag(next_value(&mut it)?)?),
            "--position-base" => {
                args.overrides.position_base = Some(parse_flag(next_value(&mut it)?)?);
            }
            "--append-unresolved" => args.overrides.append_unresolved = true,
            "--nodes" => args.nodes = Some(next_value(&mut it)?.to_string()),
            "--out" => args.out = Some(next_value(&mut it)?.to_string()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.config.is_some() && args.preset.is_some() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => std::io::stdout().lock().write_all(text.as_bytes())?,
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

fn resolve_options(args: &Args) -> Result<LayoutOptions, CliError> {
    let mut options = match (&args.config, args.preset) {
        (Some(path), _) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        (None, Some(Preset::DependentDepth)) => LayoutOptions::dependent_depth(),
        (None, Some(Preset::ForwardFixedPoint)) => LayoutOptions::forward_fixed_point(),
        (None, None) => LayoutOptions::default(),
    };

    let o = &args.overrides;
    if let Some(layering) = o.layering {
        options.layering = layering;
    }
    if let Some(orientation) = o.orientation {
        options.orientation = orientation;
    }
    if let Some(positions) = o.positions {
        options.positions = positions;
    }
    if let Some(base) = o.layer_base {
        options.layer_base = base;
    }
    if let Some(base) = o.position_base {
        options.position_base = base;
    }
    if o.append_unresolved {
        options.unresolved = UnresolvedPolicy::AppendLevels;
    }
    Ok(options)
}

fn compute(
    args: &Args,
    records: &[DependencyRecord],
    options: &LayoutOptions,
) -> Result<Layout, CliError> {
    let out = match args.nodes.as_deref() {
        Some(path) => {
            let names: Vec<String> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            strata::layout_with_node_set(names.as_slice(), records, options)?
        }
        None => strata::layout(records, options)?,
    };
    Ok(out)
}

fn run(args: Args) -> Result<(), CliError> {
    let options = resolve_options(&args)?;
    let text = read_input(args.input.as_deref())?;
    let records: Vec<DependencyRecord> = serde_json::from_str(&text)?;
    tracing::debug!(records = records.len(), ?options, "read input");

    match args.command {
        Command::Layout => {
            let out = compute(&args, &records, &options)?;
            write_json(&out, args.pretty, args.out.as_deref())
        }
        Command::Validate => match compute(&args, &records, &options) {
            Ok(out) => {
                println!(
                    "ok: {} nodes, {} edges, {} layers",
                    out.nodes.len(),
                    out.edges.len(),
                    out.layer_count()
                );
                Ok(())
            }
            Err(CliError::Strata(err @ strata::Error::CycleDetected { .. })) => {
                // Report every cycle, not only the first one the layering ran into.
                for cycle in strata::find_cycles(&records)? {
                    eprintln!("cycle: {}", cycle.join(", "));
                }
                Err(err.into())
            }
            Err(err) => Err(err),
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
