use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::app::ProjectBoardApp;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::logging;
use crate::seed::SeedFile;

#[derive(Debug, Parser)]
#[command(
    name = "projboard",
    about = "Terminal project board with live Active/Finished lists",
    version
)]
pub struct Cli {
    /// Log filter directive (overrides PROJBOARD_LOG).
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Panel width in terminal cells.
    #[arg(long, global = true, value_name = "COLS")]
    pub width: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive session reading commands from stdin (default).
    Run(RunArgs),

    /// Render a seeded board once and exit.
    Render(RenderArgs),
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// JSON file with projects to start from.
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file with the projects to render.
    #[arg(long)]
    pub seed: PathBuf,

    /// Print the views as JSON instead of text panels.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply the flags on top of `base`.
    #[must_use]
    pub fn config(&self, base: BoardConfig) -> BoardConfig {
        let mut config = base;
        if let Some(filter) = &self.log_level {
            config.log_filter = filter.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = cli.config(BoardConfig::from_env());
    logging::init(&config.log_filter)?;

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let stdout = io::stdout();
            config.clear_screen = stdout.is_terminal();
            config.color &= stdout.is_terminal();
            let mut app = ProjectBoardApp::new(config);
            if let Some(path) = args.seed {
                app.load_seed(SeedFile::load(&path)?)?;
            }
            info!("interactive session started");
            app.run(io::stdin().lock(), &mut stdout.lock())
        }
        Commands::Render(args) => {
            config.color &= io::stdout().is_terminal();
            let app = ProjectBoardApp::new(config);
            app.load_seed(SeedFile::load(&args.seed)?)?;
            let mut out = io::stdout().lock();
            if args.json {
                app.write_json(&mut out)
            } else {
                app.draw(&mut out, false)
            }
        }
    }
}
