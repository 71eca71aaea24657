use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use cardlister::args::Args;
use cardlister::config::ConfigStore;
use cardlister::logging::init_tracing;
use cardlister::scope::TaskScope;
use cardlister::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("cardlister: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut store = ConfigStore::open(args.config.clone()).context("failed to load config")?;
    args.apply(store.get_mut())
        .context("invalid command-line override")?;
    tracing::info!(path = %store.path().display(), base_url = %store.get().api.base_url, "starting");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let scope = TaskScope::new();
    let result = {
        let _enter = rt.enter();
        let result = runtime::run(store.get(), scope.clone());
        scope.cancel();
        result
    };
    rt.shutdown_timeout(Duration::from_millis(500));

    result.context("terminal UI failed")
}
