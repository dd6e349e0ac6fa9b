use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use nwscript_actions::{ActionDefinition, Divergence, Registry, Revision};

#[derive(Parser)]
#[command(name = "nwactions")]
#[command(about = "Inspect NWScript engine action tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every action in ordinal order
    List {
        #[arg(short, long, default_value = "nwn2", help = "Engine revision (nwn1, nwn2)")]
        revision: Revision,

        #[arg(long, help = "Emit JSON")]
        json: bool,
    },
    /// Show one action by ordinal or name
    Show {
        #[arg(help = "Action ordinal or name")]
        action: String,

        #[arg(short, long, default_value = "nwn2", help = "Engine revision (nwn1, nwn2)")]
        revision: Revision,

        #[arg(long, help = "Emit JSON")]
        json: bool,
    },
    /// Stack layout of a call supplying a given number of arguments
    Layout {
        #[arg(help = "Action ordinal or name")]
        action: String,

        #[arg(short, long, help = "Number of arguments supplied at the call site")]
        args: usize,

        #[arg(short, long, default_value = "nwn2", help = "Engine revision (nwn1, nwn2)")]
        revision: Revision,
    },
    /// Validate both action tables
    Check,
    /// Ordinals whose definition differs between NWN1 and NWN2
    Diff {
        #[arg(long, help = "Emit JSON")]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { revision, json } => {
            let registry = revision.registry();
            if json {
                let actions: Vec<Value> = registry.iter().map(action_json).collect();
                println!("{}", serde_json::to_string_pretty(&actions)?);
            } else {
                for action in registry {
                    println!("{}", summary(action));
                }
            }
        }
        Commands::Show {
            action,
            revision,
            json,
        } => {
            let action = find_action(revision.registry(), &action)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&action_json(action))?);
            } else {
                print_action(action);
            }
        }
        Commands::Layout {
            action,
            args,
            revision,
        } => {
            let action = find_action(revision.registry(), &action)?;
            action
                .check_argument_count(args)
                .with_context(|| format!("Cannot call {}", label(action)))?;

            println!("{}", summary(action));
            for (index, ty) in action.parameter_types().iter().take(args).enumerate() {
                let offset = action.argument_offset(index).unwrap_or_default();
                println!("  arg {index:>2}  {ty:<12} sp{offset:+}");
            }
            println!("  unwind      {} bytes", action.arguments_size(args)?);
            println!("  stack delta {:+} bytes", action.stack_delta(args)?);
        }
        Commands::Check => {
            for revision in Revision::ALL {
                let registry = revision.registry();
                registry
                    .validate()
                    .with_context(|| format!("{revision} action table is invalid"))?;
                println!("{revision}: {} actions OK", registry.count());
            }
        }
        Commands::Diff { json } => {
            let divergences = nwscript_actions::compare(Registry::nwn1(), Registry::nwn2());
            if json {
                let entries: Vec<Value> = divergences.iter().map(divergence_json).collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for divergence in &divergences {
                    println!("{}", describe(divergence));
                }
                println!("{} divergent ordinals", divergences.len());
            }
        }
    }

    Ok(())
}

/// Resolve an ordinal (`79`) or an action name (`EffectDamage`).
fn find_action(registry: &Registry, key: &str) -> Result<&'static ActionDefinition> {
    let action = match key.parse::<i64>() {
        Ok(ordinal) => registry.at(ordinal)?,
        Err(_) => registry.lookup(key)?,
    };
    tracing::debug!(ordinal = action.ordinal(), key, "resolved action");
    Ok(action)
}

fn label(action: &ActionDefinition) -> String {
    match action.name() {
        "" => format!("#{}", action.ordinal()),
        name => format!("#{} {name}", action.ordinal()),
    }
}

fn summary(action: &ActionDefinition) -> String {
    let params: Vec<String> = action
        .parameter_types()
        .iter()
        .enumerate()
        .map(|(index, ty)| {
            if index < action.min_parameters() {
                ty.to_string()
            } else {
                format!("[{ty}]")
            }
        })
        .collect();
    format!(
        "{:>5}  {} {}({})",
        action.ordinal(),
        action.return_type(),
        action.name(),
        params.join(", ")
    )
}

fn print_action(action: &ActionDefinition) {
    println!("{}", summary(action));
    if !action.prototype().is_empty() {
        println!("       {}", action.prototype());
    }
    println!(
        "       parameters {}..={}, returns {} bytes",
        action.min_parameters(),
        action.max_parameters(),
        action.return_size()
    );
    for (index, (ty, size)) in action
        .parameter_types()
        .iter()
        .zip(action.parameter_cumulative_sizes())
        .enumerate()
    {
        println!("       {index:>2}  {ty:<12} cumulative {size}");
    }
}

fn action_json(action: &ActionDefinition) -> Value {
    json!({
        "ordinal": action.ordinal(),
        "name": action.name(),
        "prototype": action.prototype(),
        "min_parameters": action.min_parameters(),
        "max_parameters": action.max_parameters(),
        "return_type": action.return_type().keyword(),
        "parameter_types": action
            .parameter_types()
            .iter()
            .map(|ty| ty.keyword())
            .collect::<Vec<_>>(),
        "parameter_cumulative_sizes": action.parameter_cumulative_sizes(),
    })
}

fn describe(divergence: &Divergence) -> String {
    match divergence {
        Divergence::OnlyLeft(action) => format!("nwn1 only  {}", summary(action)),
        Divergence::OnlyRight(action) => format!("nwn2 only  {}", summary(action)),
        Divergence::Renamed { left, right } | Divergence::Signature { left, right } => {
            format!("nwn1       {}\nnwn2       {}", summary(left), summary(right))
        }
    }
}

fn divergence_json(divergence: &Divergence) -> Value {
    match divergence {
        Divergence::OnlyLeft(action) => json!({ "kind": "nwn1_only", "nwn1": action_json(action) }),
        Divergence::OnlyRight(action) => json!({ "kind": "nwn2_only", "nwn2": action_json(action) }),
        Divergence::Renamed { left, right } => json!({
            "kind": "renamed",
            "nwn1": action_json(left),
            "nwn2": action_json(right),
        }),
        Divergence::Signature { left, right } => json!({
            "kind": "signature",
            "nwn1": action_json(left),
            "nwn2": action_json(right),
        }),
    }
}
