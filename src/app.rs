use chrono::NaiveDate;

use crate::calendar::MonthPager;
use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::events::Event;

pub struct App<'a> {
    pub quit: bool,
    config: &'a Config,
    pager: MonthPager,
    today: NaiveDate,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, today: NaiveDate) -> App<'a> {
        App {
            quit: false,
            config,
            pager: MonthPager::new(today),
            today,
        }
    }

    pub fn pager(&self) -> &MonthPager {
        &self.pager
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn handle(&mut self, event: Event) -> CmdResult {
        match event {
            Event::Update => Ok(Cmd::Noop),
            Event::Input(key) => {
                if let Some(cmd) = self.config.key_map.get(&key) {
                    self.apply(*cmd)
                } else {
                    Err(CmdError::new(format!(
                        "Could not handle input key '{:#?}'",
                        key
                    )))
                }
            }
        }
    }

    fn apply(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::NextMonth => {
                self.pager.advance();
                log::debug!("Showing {}", self.pager.displayed_period());
            }
            Cmd::PrevMonth => {
                self.pager.retreat();
                log::debug!("Showing {}", self.pager.displayed_period());
            }
            Cmd::Today => {
                self.pager.reset();
                log::debug!("Back to {}", self.pager.displayed_period());
            }
            Cmd::Exit => {
                self.quit = true;
            }
            Cmd::Noop => {}
        }

        Ok(Cmd::Noop)
    }
}
