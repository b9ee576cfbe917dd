use anyhow::Result;
use menucard::{App, Config, logging};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Hold the guard so buffered log lines are flushed on exit
    let _logging = logging::init(&config);

    let mut app = App::new(config);
    app.run()?;

    Ok(())
}
