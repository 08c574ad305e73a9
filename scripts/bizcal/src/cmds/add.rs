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
    pub date: DateArg,

    /// Number of business days, negative to go backward
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    #[command(flatten)]
    pub src: SrcArgs,
}

impl Args {
    fn eval(&self, cal: &Calendar) -> anyhow::Result<DateArg> {
        let res = match self.date {
            DateArg::Date(d) => DateArg::Date(cal.add_bizdays(d, self.n)?),
            DateArg::DateTime(d) => DateArg::DateTime(cal.add_bizdays(d, self.n)?),
            DateArg::Zoned(d) => DateArg::Zoned(cal.add_bizdays(d, self.n)?),
        };
        Ok(res)
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let cal = self.src.calendar(&self.calendar)?;
        println!("{}", self.eval(&cal)?);
        Ok(())
    }
}
