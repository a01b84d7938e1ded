use std::{path::PathBuf, process, time::Instant};

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info, LevelFilter};

use raytracer_basics::{
    error::RenderError,
    logger::init_logger,
    options::{RenderOptions, DEFAULT_SIZE},
    pass::{self, PassKind},
};

fn main() {
    let default_size = DEFAULT_SIZE.to_string();
    let matches = App::new("Raytracer Basics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders a sphere and a parallelogram with orthographic and perspective cameras")
        .arg(
            Arg::with_name("size")
                .long("size")
                .short("s")
                .value_name("PIXELS")
                .help("Edge length of the square output images")
                .default_value(&default_size),
        )
        .arg(
            Arg::with_name("output-dir")
                .long("output-dir")
                .short("o")
                .value_name("DIR")
                .help("Directory the images are written to")
                .default_value("."),
        )
        .arg(
            Arg::with_name("pass")
                .long("pass")
                .short("p")
                .value_name("NAME")
                .help("Only render the named pass; may be repeated")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&["sphere", "plane", "perspective", "shading"]),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("info")
                .possible_values(&["error", "warn", "info", "debug", "trace"]),
        )
        .get_matches();

    let level = value_t!(matches, "log-level", LevelFilter).unwrap_or(LevelFilter::Info);
    init_logger(level);

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    let start_time = Instant::now();

    let options = RenderOptions {
        size: value_t!(matches, "size", u32).unwrap_or_else(|e| e.exit()),
        output_dir: matches
            .value_of("output-dir")
            .map(PathBuf::from)
            .unwrap_or_default(),
    };

    let kinds = match matches.values_of("pass") {
        Some(names) => names
            .map(str::parse)
            .collect::<Result<Vec<PassKind>, _>>()?,
        None => PassKind::ALL.to_vec(),
    };

    let written = pass::render_all(&options, &kinds)?;

    info!(
        "Operation complete: {} image(s) in {}s",
        written.len(),
        start_time.elapsed().as_secs_f32()
    );
    Ok(())
}
