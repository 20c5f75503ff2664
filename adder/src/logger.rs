use simplelog::*;

pub fn init_logger(level: LevelFilter, color: bool) {
    let mut builder = ConfigBuilder::new();
    builder
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off);

    let color_choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    if let Err(e) = TermLogger::init(level, builder.build(), TerminalMode::Stderr, color_choice) {
        eprintln!("failed to set up logging: {e}");
    }
}
