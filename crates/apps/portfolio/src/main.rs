use anyhow::Context;
use app::cli::CommonArgs;
use clap::Parser;
use portfolio::{Portfolio, PortfolioConfig, Script};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless runner for the portfolio world
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Input timeline to play (file path, or inline with --inline)
    #[arg(long, short = 's', value_name = "TIMELINE")]
    script: Option<String>,

    /// Treat --script as the timeline text itself
    #[arg(long)]
    inline: bool,

    /// Section to select once loading ends
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Start with the camera trailing the avatar
    #[arg(long)]
    follow: bool,

    /// Skip the loading screen
    #[arg(long)]
    skip_loading: bool,

    /// Seconds per simulated frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.common.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match cli.common.config_path() {
        Some(path) => PortfolioConfig::from_file(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => PortfolioConfig::builtin(),
    };
    if let Some(section) = &cli.section {
        config.session.initial_section = section.as_str().into();
    }

    let mut portfolio = Portfolio::new(config.scene, config.session);
    if cli.skip_loading {
        portfolio.finish_loading();
    }
    if cli.follow {
        portfolio.set_follow(true);
    }

    if let Some(script) = &cli.script {
        let source = if cli.inline {
            script.clone()
        } else {
            let path = PathBuf::from(script);
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading timeline {}", path.display()))?
        };
        let script = Script::parse(&source)?;
        let outcome = script.run(&mut portfolio, cli.dt)?;
        tracing::info!(
            frames = outcome.frames,
            interactions = outcome.interactions.len(),
            "timeline finished"
        );
    }

    app::run_headless(&mut portfolio, cli.common.frames, cli.dt);

    let snapshot = portfolio.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let avatar = snapshot.world.avatar_position;
        println!("phase:    {:?}", snapshot.phase);
        println!("frames:   {}", snapshot.frame);
        println!("section:  {}", snapshot.active_section);
        println!("avatar:   ({:.2}, {:.2}, {:.2})", avatar.x, avatar.y, avatar.z);
        println!(
            "camera:   ({:.2}, {:.2}, {:.2})",
            snapshot.camera.x, snapshot.camera.y, snapshot.camera.z
        );
        println!("hotspots: {}", snapshot.world.objects.len());
        if let Some(info) = &snapshot.info {
            println!("info:     {}", info.title);
        }
    }

    Ok(())
}
