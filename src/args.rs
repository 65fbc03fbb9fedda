use chrono::NaiveDate;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "alm",
    about = "Almanac - a paging month-grid calendar for the terminal."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(
        name = "DATE",
        short = "d",
        long = "date",
        help = "reference date to open on (YYYY-MM-DD), defaults to today"
    )]
    pub date: Option<NaiveDate>,
}
