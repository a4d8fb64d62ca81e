mod report;
mod settings;

use color_eyre::eyre::Result;
use env_logger::Env;
use fpl_core::utils::TimeEstimation;
use fpl_core::{
    FplSquadRules, SeededRandom, ThreadRandom, TransferRandom, TransferSelector,
    TransferWishlistBuilder, named_transfers,
};
use fpl_database::{SnapshotGenerator, SnapshotLoader};
use log::{debug, info};
use report::SelectionReport;
use settings::{AppSettings, OutputFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = AppSettings::from_env()?;

    let (entity, estimated) = TimeEstimation::estimate(|| match &settings.snapshot {
        Some(path) => SnapshotLoader::load_from(path),
        None => SnapshotLoader::load(),
    });
    let snapshot = SnapshotGenerator::generate(&entity?)?;

    info!(
        "snapshot loaded: {} ms, squad value {}, in bank {}",
        estimated,
        snapshot.squad.total_cost(),
        snapshot.in_bank
    );

    let selector = TransferSelector::with(
        TransferWishlistBuilder,
        FplSquadRules::new(settings.rules),
        settings.selector,
    );

    let ranked = selector.rank_transfers(&snapshot.squad, &snapshot.pool, snapshot.in_bank)?;
    let shortlist: Vec<_> = named_transfers(&ranked)
        .into_iter()
        .take(selector.settings().selection_window)
        .collect();
    for (rank, named) in shortlist.iter().enumerate() {
        debug!("shortlist #{}: {}", rank + 1, named);
    }

    let mut random: Box<dyn TransferRandom> = match settings.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let transfer = selector.select_transfer(
        &snapshot.squad,
        &snapshot.pool,
        snapshot.in_bank,
        settings.transfers,
        random.as_mut(),
    )?;

    info!("selected transfer: {}", transfer);

    if settings.output == OutputFormat::Json {
        println!("{}", SelectionReport::new(&transfer, shortlist).to_json()?);
    }

    Ok(())
}
