use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use colored::Colorize;
use gil_contract::{ContractConfig, GoodsInspectionContract};
use gil_server::{GilServer, ServerConfig};
use gil_store::InMemoryKvStore;

use crate::cli::*;
use crate::script::{run_script, Outcome};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    if args.strict {
        config.contract = ContractConfig::strict();
    }

    println!(
        "{} GIL development host on {} ({})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        mode_label(&config.contract)
    );
    let server = GilServer::new(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let file = File::open(&args.script)
        .with_context(|| format!("cannot open script {}", args.script.display()))?;
    let config = if args.strict {
        ContractConfig::strict()
    } else {
        ContractConfig::default()
    };

    tracing::debug!(script = %args.script.display(), ?config, "running invocation script");
    let contract = GoodsInspectionContract::with_config(InMemoryKvStore::new(), config);
    contract.init::<&str>(&[])?;
    let report = run_script(&contract, BufReader::new(file))?;

    for outcome in &report.outcomes {
        print_outcome(outcome);
    }

    let failed = report.failed();
    if failed > 0 {
        anyhow::bail!("{failed} of {} invocations failed", report.total());
    }
    println!("{} {} invocations succeeded", "✓".green().bold(), report.total());
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    let label = match &outcome.invocation {
        Some(inv) => format!("{} {}", inv.function, inv.args.join(" ")),
        None => format!("line {}", outcome.line),
    };
    match &outcome.result {
        Ok(Some(payload)) => {
            println!("{} {}", "✓".green(), label);
            println!("  {}", String::from_utf8_lossy(payload).cyan());
        }
        Ok(None) => println!("{} {}", "✓".green(), label),
        Err(message) => println!("{} {}: {}", "✗".red(), label, message.red()),
    }
}

fn mode_label(config: &ContractConfig) -> colored::ColoredString {
    if config.is_permissive() {
        "permissive".yellow()
    } else {
        "strict".cyan()
    }
}
