use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

// Stdout is reserved for the final output path, so diagnostics go to stderr.
#[ctor::ctor]
fn init() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .expect("Logging configuration must be valid");
    let _ = log4rs::init_config(config);
}
