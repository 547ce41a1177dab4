// SPDX-License-Identifier: MPL-2.0
//! Headless banner demo.
//!
//! Shows a burst of banners on an overlay driven by the timed animation
//! driver and logs every lifecycle event until all of them are gone.

use iced_banners::config;
use iced_banners::coordinator::{Coordinator, LifecycleEvent, Settings};
use iced_banners::domain::banner::{Category, ExitType, Position};
use iced_banners::error::{Error, Result};
use iced_banners::surface::HostSurface;
use iced_banners::Banner;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_banners demo

USAGE:
  iced_banners [OPTIONS]

OPTIONS:
  --position P   top-center, bottom-center, top-left, top-right, bottom-left, bottom-right
  --count N      number of banners to show [default: 3]
  --seconds S    seconds each banner stays visible [default: from config]
  --exit E       dequeue, pop or slide [default: from config]
  --force        force-hide everything once the burst is on screen
  --config PATH  read settings from PATH instead of the user config
  -h, --help     print this help
";

const CATEGORIES: [Category; 4] = [
    Category::Info,
    Category::Success,
    Category::Warning,
    Category::Error,
];

struct Args {
    position: Option<Position>,
    count: usize,
    seconds: Option<Duration>,
    exit: Option<ExitType>,
    force: bool,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        position: args.opt_value_from_str("--position")?,
        count: args.opt_value_from_str("--count")?.unwrap_or(3),
        seconds: args
            .opt_value_from_str::<_, f32>("--seconds")?
            .map(seconds_arg)
            .transpose()?,
        exit: args.opt_value_from_str("--exit")?,
        force: args.contains("--force"),
        config: args.opt_value_from_str("--config")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Arguments(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(parsed))
}

fn seconds_arg(seconds: f32) -> Result<Duration> {
    Duration::try_from_secs_f32(seconds)
        .map_err(|_| Error::Arguments(format!("invalid --seconds value: {seconds}")))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_banners=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let coordinator = Coordinator::new(Settings::from_config(&config))?;
    let overlay = coordinator.overlay()?;
    let mut events = coordinator.subscribe();

    let mut options = coordinator.default_options();
    if let Some(position) = args.position {
        options = options.with_position(position);
    }
    if let Some(exit) = args.exit {
        options = options.with_exit_type(exit);
    }
    if let Some(seconds) = args.seconds {
        options = options.with_seconds_to_show(seconds);
    }

    let mut shown = 0;
    for index in 0..args.count {
        let category = CATEGORIES[index % CATEGORIES.len()];
        let banner = Banner::create(
            &coordinator,
            format!("Banner {}", index + 1),
            format!("A {category} notification"),
            Some(category),
            options.clone(),
        )?;
        if banner.show().await {
            shown += 1;
        }
    }
    tracing::info!(shown, position = %options.position(), "banners requested");

    if args.force {
        let coordinator = coordinator.clone();
        let surface = overlay.id();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let hidden = coordinator.force_hide_all_notifications(surface).await;
            tracing::info!(hidden, "forced hide");
        });
    }

    let mut gone = 0;
    while gone < shown {
        match events.recv().await {
            Ok(event) => {
                tracing::info!(?event, "lifecycle");
                if matches!(
                    event,
                    LifecycleEvent::DidHide { .. } | LifecycleEvent::Dropped { .. }
                ) {
                    gone += 1;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "lifecycle events skipped");
            }
            Err(RecvError::Closed) => break,
        }
    }

    tracing::info!("all banners hidden");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_arg_accepts_plain_values() {
        assert!(matches!(seconds_arg(2.5), Ok(d) if d == Duration::from_millis(2500)));
    }

    #[test]
    fn seconds_arg_rejects_unrepresentable_values() {
        for value in [1e30, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(seconds_arg(value), Err(Error::Arguments(_))));
        }
    }
}
