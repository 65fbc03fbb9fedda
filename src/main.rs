mod app;
mod args;
mod calendar;
mod cmds;
mod config;
mod events;
mod ui;

use std::io::{self, Write};

use chrono::Utc;
use flexi_logger::{FileSpec, Logger};
use structopt::StructOpt;
use termion::cursor;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

use app::App;
use args::Args;
use config::Config;
use events::Dispatcher;
use ui::CalendarView;

fn main() -> Result<(), io::Error> {
    let args = Args::from_args();

    // The terminal is busy drawing the calendar, so logs go to a file.
    let _logger = Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(std::env::temp_dir())
                        .basename("almanac"),
                )
                .start()
        })
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let config = if let Some(path) = &args.configfile {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    let today = args.date.unwrap_or_else(|| Utc::now().date_naive());
    log::info!("Opening on {}", today);

    let mut app = App::new(&config, today);
    let view = CalendarView::default();

    if args.show {
        let mut stdout = io::stdout().into_raw_mode()?;
        view.draw(&mut stdout, &app)?;
        write!(stdout, "\r\n")?;
    } else {
        let dispatcher = Dispatcher::from_config(&config);
        let stdout = io::stdout().into_raw_mode()?;
        let mut screen = AlternateScreen::from(stdout);
        write!(screen, "{}", cursor::Hide)?;

        loop {
            view.draw(&mut screen, &app)?;

            match dispatcher.next() {
                Ok(event) => {
                    if let Err(err) = app.handle(event) {
                        log::debug!("{}", err);
                    }
                }
                Err(_) => break,
            }

            if app.quit {
                break;
            }
        }

        write!(screen, "{}", cursor::Show)?;
        screen.flush()?;
    }

    Ok(())
}
