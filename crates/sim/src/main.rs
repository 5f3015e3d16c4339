use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tilecraft_sim::config::SimConfig;
use tilecraft_sim::render;
use tilecraft_sim::simulation::Simulation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path: Option<PathBuf> = std::env::args()
        .skip_while(|a| a != "--config")
        .nth(1)
        .map(PathBuf::from);
    let tick_override: Option<u64> = std::env::args()
        .skip_while(|a| a != "--ticks")
        .nth(1)
        .and_then(|s| s.parse().ok());
    let ascii = std::env::args().any(|a| a == "--ascii");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = match &config_path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if tick_override.is_some() {
        config.max_ticks = tick_override;
    }

    tracing::info!("Tilecraft -- headless tile world simulation");
    let mut sim = Simulation::new(&config).context("starting simulation")?;

    let dt = config.dt();
    let mut interval = tokio::time::interval(Duration::from_secs_f64(dt));
    let report_every = u64::from(config.ticks_per_second);

    loop {
        if config.max_ticks.is_some_and(|max| sim.ticks() >= max) {
            tracing::info!("Reached {} ticks", sim.ticks());
            break;
        }

        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl+C received, shutting down...");
                break;
            }
        }

        sim.tick(dt);

        if sim.ticks() % report_every == 0 {
            if let Some(player) = sim.player() {
                let (vx, vy) = player.velocity();
                tracing::info!(
                    tick = sim.ticks(),
                    x = player.x,
                    y = player.y,
                    vx,
                    vy,
                    on_ground = player.on_ground(),
                    "player"
                );
            }
            if ascii {
                print!("{}", render::ascii(sim.world(), &sim.view()));
            }
        }
    }

    sim.shutdown();
    Ok(())
}
