//! fsset - Set a field by path in YAML resources.
//!
//! Reads multi-document YAML from a file or stdin, applies one field spec
//! (after the built-in replica defaults) to resources matching the target
//! name, and writes the mutated documents to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fieldspec_filter::{
    value, DefaultCatalog, ErrorPolicy, FieldSpec, FsSlice, Gvk, Node, ResId, Resource, SetFilter,
};

#[derive(Debug, Parser)]
#[command(name = "fsset", version, about = "Set a field by path in YAML resources")]
struct Cli {
    /// Name of the target resource (metadata.name)
    #[arg(short, long)]
    name: String,

    /// Restrict the target to one kind
    #[arg(short, long)]
    kind: Option<String>,

    /// Restrict the target to one apiVersion
    #[arg(long = "api-version")]
    api_version: Option<String>,

    /// Field path to set, segments separated by '/' ('*' fans out over lists)
    #[arg(short, long)]
    path: String,

    /// Create missing intermediate mappings and the leaf field
    #[arg(short, long)]
    create: bool,

    /// Value to set, parsed as YAML (42, true, and "x" keep their types)
    #[arg(short, long)]
    value: String,

    /// Keep going on errors and report them all at the end
    #[arg(long)]
    collect_errors: bool,

    /// Input file with one or more YAML documents (defaults to stdin)
    file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut resources = input
        .split("\n---")
        .filter(|doc| !doc.trim().is_empty())
        .map(Resource::from_yaml)
        .collect::<Result<Vec<_>, _>>()?;

    let mut gvk = match &cli.api_version {
        Some(av) => Gvk::from_api_version(av),
        None => Gvk::default(),
    };
    gvk.kind = cli.kind.clone();
    let target = ResId::new(cli.name, gvk);

    let value: Node = value::from_yaml(&cli.value)?;
    let user_specs = FsSlice::from(vec![FieldSpec::new(cli.path, cli.create)]);
    let specs = DefaultCatalog::get().replicas_with(&user_specs);

    let policy = if cli.collect_errors {
        ErrorPolicy::CollectAll
    } else {
        ErrorPolicy::FailFast
    };
    SetFilter::new(value, target, specs)
        .with_error_policy(policy)
        .apply(&mut resources)?;

    for (i, resource) in resources.iter().enumerate() {
        if i > 0 {
            println!("---");
        }
        print!("{}", resource.to_yaml()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fsset: {err}");
            ExitCode::FAILURE
        }
    }
}
