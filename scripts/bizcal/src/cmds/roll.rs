use qbizcal::{
    calendar::{Calendar, CalendarError},
    timepoint::DateLike,
};

use crate::util::{calendar_src::SrcArgs, date_arg::DateArg};

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the calendar
    pub calendar: String,

    /// Date to roll
    pub date: DateArg,

    /// Roll to the previous business day instead of the next one
    #[arg(short = 'b', long = "backward")]
    pub backward: bool,

    #[command(flatten)]
    pub src: SrcArgs,
}

impl Args {
    fn eval(&self, cal: &Calendar) -> Result<DateArg, CalendarError> {
        let res = match self.date {
            DateArg::Date(d) => DateArg::Date(self._roll(cal, d)?),
            DateArg::DateTime(d) => DateArg::DateTime(self._roll(cal, d)?),
            DateArg::Zoned(d) => DateArg::Zoned(self._roll(cal, d)?),
        };
        Ok(res)
    }

    fn _roll<D: DateLike>(&self, cal: &Calendar, d: D) -> Result<D, CalendarError> {
        if self.backward {
            cal.roll_backward(d)
        } else {
            cal.roll_forward(d)
        }
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let cal = self.src.calendar(&self.calendar)?;
        println!("{}", self.eval(&cal)?);
        Ok(())
    }
}
