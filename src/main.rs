// SPDX-License-Identifier: MPL-2.0
use camera_viewfinder::app::{self, Flags};
use camera_viewfinder::config::{self, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH};
use camera_viewfinder::render;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
camera_viewfinder - camera viewfinder overlay

USAGE:
  camera_viewfinder [OPTIONS]

OPTIONS:
  --config FILE       Style file (default: viewfinder.toml in the config dir)
  --density F         Pixels per dp, overrides the style file
  --output FILE       Render headless to an image file instead of opening a window
  --dump              Print the draw operations instead of rendering
  --width N           Render width in pixels (default 1080)
  --height N          Render height in pixels (default 1920)
  --background FILE   Still frame shown under the overlay
  --save-style FILE   Write the effective style (after --density) to FILE and exit
  -h, --help          Print this help
";

struct Args {
    config: Option<PathBuf>,
    density: Option<f32>,
    output: Option<PathBuf>,
    dump: bool,
    width: u32,
    height: u32,
    background: Option<PathBuf>,
    save_style: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        density: args.opt_value_from_str("--density")?,
        output: args.opt_value_from_str("--output")?,
        dump: args.contains("--dump"),
        width: args
            .opt_value_from_str("--width")?
            .unwrap_or(DEFAULT_RENDER_WIDTH),
        height: args
            .opt_value_from_str("--height")?
            .unwrap_or(DEFAULT_RENDER_HEIGHT),
        background: args.opt_value_from_str("--background")?,
        save_style: args.opt_value_from_str("--save-style")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let mut style = match &args.config {
        Some(path) => match config::load_from_path(path) {
            Ok(style) => style,
            Err(err) => {
                log::error!("failed to load {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => config::load().0,
    };
    if let Some(density) = args.density {
        style.display.density = density;
    }
    let viewfinder = match style.resolve() {
        Ok(viewfinder) => viewfinder,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.save_style {
        return match config::save_to_path(&style, path) {
            Ok(()) => {
                log::info!("style written to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("failed to write {}: {}", path.display(), err);
                ExitCode::FAILURE
            }
        };
    }

    if args.dump {
        return match render::draw_ops(viewfinder, args.width, args.height) {
            Ok(ops) => {
                for op in ops {
                    println!("{op}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    if let Some(output) = &args.output {
        return match render::render_to_file(
            viewfinder,
            args.width,
            args.height,
            args.background.as_deref(),
            output,
        ) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let flags = Flags {
        style,
        background: args.background,
    };
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
