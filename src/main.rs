use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use log::{debug, info};
use stardust_core::utils::TimeEstimation;
use stardust_core::{
    Decision, ManeuverLayer, ManeuverRequest, ManeuverStatus, SimpleDriveEta, SimpleStrikeOracle,
    TacticalConfig, TacticalEngine, WorldSnapshot,
};
use stardust_data::{ConfigLoader, ScenarioLoader, WorldGenerator};
use std::collections::BTreeMap;
use std::{env, fs};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_SCENARIO: &str = "kickoff";
const DEFAULT_TICKS: u32 = 120;
const MANEUVER_TICKS: u32 = 30;

/// Stands in for vehicle control: every maneuver runs for a fixed number of ticks.
struct ScriptedLayer {
    budget: u32,
    elapsed: u32,
    running: Option<&'static str>,
}

impl ScriptedLayer {
    fn new(budget: u32) -> Self {
        ScriptedLayer {
            budget,
            elapsed: 0,
            running: None,
        }
    }
}

impl ManeuverLayer for ScriptedLayer {
    fn step(&mut self, request: &ManeuverRequest, _world: &WorldSnapshot) -> ManeuverStatus {
        let name = request.maneuver().name();

        if self.running != Some(name) {
            self.running = Some(name);
            self.elapsed = 0;
        }

        self.elapsed += 1;

        if self.elapsed >= self.budget {
            self.running = None;
            return ManeuverStatus::done();
        }

        request.status()
    }
}

fn load_config() -> color_eyre::Result<TacticalConfig> {
    match env::var("CONFIG") {
        Ok(path) => {
            let json = fs::read_to_string(&path).wrap_err_with(|| format!("reading {}", path))?;
            ConfigLoader::from_json(&json).wrap_err_with(|| format!("parsing {}", path))
        }
        Err(_) => ConfigLoader::load().wrap_err("parsing bundled config"),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let scenario_name = env::var("SCENARIO").unwrap_or_else(|_| String::from(DEFAULT_SCENARIO));
    let ticks = match env::var("TICKS") {
        Ok(value) => value
            .parse::<u32>()
            .wrap_err_with(|| format!("TICKS={}", value))?,
        Err(_) => DEFAULT_TICKS,
    };

    let config = load_config()?;

    let (scenarios, estimated) = TimeEstimation::estimate(ScenarioLoader::load);
    let scenarios = scenarios.wrap_err("parsing bundled scenarios")?;

    info!("scenarios loaded: {} ms", estimated);

    let scenario = ScenarioLoader::find(&scenarios, &scenario_name)
        .ok_or_else(|| eyre!("unknown scenario {}", scenario_name))?;

    let world = WorldGenerator::generate(scenario).map_err(|error| eyre!(error))?;

    info!(
        "scenario {}: {} agents, controlling {}",
        scenario.name,
        world.agents().len(),
        world.me().id
    );

    let mut engine = TacticalEngine::new(
        config,
        SimpleDriveEta,
        SimpleStrikeOracle::new(SimpleDriveEta),
    );
    let mut layer = ScriptedLayer::new(MANEUVER_TICKS);
    let mut decisions: BTreeMap<String, u32> = BTreeMap::new();

    let (_, estimated) = TimeEstimation::estimate_micros(|| {
        for tick in 0..ticks {
            let decision = engine.tick(&world);

            debug!("tick {}: {:?}", tick, decision);

            let key = match decision {
                Decision::Commit(reason) => format!("commit ({})", reason),
                other => format!("{:?}", other).to_lowercase(),
            };
            *decisions.entry(key).or_default() += 1;

            engine.step(&world, &mut layer);
        }
    });

    info!(
        "{} ticks in {} us, playstyle {}",
        ticks,
        estimated,
        engine.playstyle()
    );

    for (decision, count) in &decisions {
        info!("  {}: {}", decision, count);
    }

    Ok(())
}
