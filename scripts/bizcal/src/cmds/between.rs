use qbizcal::calendar::Calendar;

use crate::util::{calendar_src::SrcArgs, date_arg::DateArg};

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the calendar
    pub calendar: String,

    /// Start date, which is never counted
    pub from: DateArg,

    /// End date, which is counted when it is a business day
    pub to: DateArg,

    #[command(flatten)]
    pub src: SrcArgs,
}

impl Args {
    fn eval(&self, cal: &Calendar) -> i64 {
        cal.num_bizdays_between(self.from.date(), self.to.date())
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let cal = self.src.calendar(&self.calendar)?;
        println!("{}", self.eval(&cal));
        Ok(())
    }
}
