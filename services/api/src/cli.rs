use crate::demo::{run_aggregate, run_demo, AggregateArgs, DemoArgs};
use crate::server;
use admission_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admission Aggregate Advisor",
    about = "Calculate admission aggregates and plan program preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate exam results and print the aggregate breakdown
    Aggregate(AggregateArgs),
    /// Walk the sample catalog through every scoring component
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Aggregate(args) => run_aggregate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["admission-ai-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn aggregate_requires_a_curriculum() {
        assert!(Cli::try_parse_from(["admission-ai-api", "aggregate", "--net", "150"]).is_err());
        assert!(Cli::try_parse_from([
            "admission-ai-api",
            "aggregate",
            "--net",
            "150",
            "--hssc",
            "85",
            "--equivalence",
            "80",
        ])
        .is_err());
    }

    #[test]
    fn aggregate_accepts_local_results() {
        let cli = Cli::try_parse_from([
            "admission-ai-api",
            "aggregate",
            "--net",
            "150",
            "--hssc",
            "85",
            "--ssc",
            "90",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Aggregate(args)) => {
                assert_eq!(args.net, 150.0);
                assert_eq!(args.hssc, Some(85.0));
                assert_eq!(args.equivalence, None);
            }
            other => panic!("expected aggregate command, got {other:?}"),
        }
    }
}
