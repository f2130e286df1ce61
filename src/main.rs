use std::path::PathBuf;
use std::time::{Duration, Instant};

use cosmoscape::backdrop::Backdrop;
use cosmoscape::core::{logging, Error};
use cosmoscape::render::AnsiCanvas;
use cosmoscape::scheduler::{DeviceClass, TickScheduler};
use cosmoscape::site::{CosmicLoader, LoaderPhase, Route};
use cosmoscape::sky::{ClockSample, SkyConfig, SkySystem};

const CANVAS_WIDTH: usize = 100;
const CANVAS_HEIGHT: usize = 40;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    log::info!("Cosmoscape starting...");

    let args: Vec<String> = std::env::args().collect();
    let device = parse_device_arg(&args);
    let config_path = parse_config_arg(&args);
    let snapshot_hour = parse_hour_arg(&args);
    let once = snapshot_hour.is_some() || args.iter().any(|a| a == "--once");

    let config = match config_path {
        Some(ref path) => {
            log::info!("Loading sky config from: {}", path.display());
            SkyConfig::load(path)?
        }
        None => SkyConfig::default(),
    };

    log::info!("Device class: {:?}", device);

    if let Some(route) = parse_page_arg(&args) {
        print_page(route)?;
    }

    let mut sky = SkySystem::new(config.clone());
    let backdrop = Backdrop::new(config, device);
    let mut canvas = AnsiCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    if once {
        let clock = match snapshot_hour {
            Some(hour) => ClockSample::new(hour, 0),
            None => ClockSample::now(),
        };
        let state = sky.sample(clock);
        canvas.draw(&backdrop.compose(state, 0.0));
        print!("{}", canvas.render());
        return Ok(());
    }

    run_loader(device).await;

    let start = Instant::now();
    let scheduler = TickScheduler::spawn(device, move |clock| {
        let state = sky.sample(clock);
        let frame = backdrop.compose(state, start.elapsed().as_secs_f32());
        canvas.draw(&frame);
        // Home the cursor instead of clearing so the frame swap doesn't flicker
        print!("\x1b[H{}", canvas.render());
        log::debug!(
            "tick at {:02}:{:02}, sun visible: {}",
            clock.hour(),
            clock.minute(),
            state.sun.visible
        );
    });

    tokio::signal::ctrl_c().await?;
    log::info!("Shutting down");
    scheduler.shutdown().await;

    Ok(())
}

/// Drive the entry loader to completion, printing each phase label once.
async fn run_loader(device: DeviceClass) {
    let mut loader = CosmicLoader::new(device);
    let step = Duration::from_millis(150);
    let mut last_label = "";
    while loader.phase() != LoaderPhase::Hidden {
        loader.advance(step);
        let label = loader.label();
        if !label.is_empty() && label != last_label {
            println!("{} {:>3.0}%", label, loader.progress());
            last_label = label;
        }
        tokio::time::sleep(step).await;
    }
}

fn print_page(route: Route) -> Result<(), Error> {
    let page = route.page();
    println!("# {}", page.title());
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

/// Parse --device argument (full, reduced, minimal)
fn parse_device_arg(args: &[String]) -> DeviceClass {
    for i in 0..args.len() {
        if args[i] == "--device" || args[i] == "-d" {
            if let Some(name) = args.get(i + 1) {
                if let Some(device) = DeviceClass::from_arg(name) {
                    return device;
                }
                log::warn!("unknown device class '{}', using full", name);
            }
        }
    }
    DeviceClass::Full
}

/// Parse --config argument (path to a sky config JSON file)
fn parse_config_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

/// Parse --hour argument (render one frame at that hour and exit)
fn parse_hour_arg(args: &[String]) -> Option<u32> {
    for i in 0..args.len() {
        if args[i] == "--hour" {
            if let Some(hour_str) = args.get(i + 1) {
                return hour_str.parse().ok();
            }
        }
    }
    None
}

/// Parse --page argument (print a page's content before rendering)
fn parse_page_arg(args: &[String]) -> Option<Route> {
    for i in 0..args.len() {
        if args[i] == "--page" || args[i] == "-p" {
            if let Some(path) = args.get(i + 1) {
                let route = Route::from_path(path);
                if route.is_none() {
                    log::warn!("unknown page '{}'", path);
                }
                return route;
            }
        }
    }
    None
}
