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

    /// Date to classify
    pub date: DateArg,

    #[command(flatten)]
    pub src: SrcArgs,
}

impl Args {
    fn eval(&self, cal: &Calendar) -> String {
        let d = self.date.date();
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        [
            format!("date: {} ({})", d, d.format("%a")),
            format!("business day: {}", yes_no(cal.is_bizday(d))),
            format!("working day: {}", yes_no(cal.is_working_day(d))),
            format!("holiday: {}", yes_no(cal.is_holiday(d))),
            format!("extra working date: {}", yes_no(cal.is_extra_working_date(d))),
        ]
        .join("\n")
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let cal = self.src.calendar(&self.calendar)?;
        println!("{}", self.eval(&cal));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(date: &str) -> Args {
        Args {
            calendar: "bacs".to_owned(),
            date: date.parse().unwrap(),
            src: SrcArgs {
                calendar_dirs: vec![],
            },
        }
    }

    #[test]
    fn test_eval() {
        let cal = Calendar::builder()
            .with_holidays(["2013-01-01"])
            .with_extra_working_dates(["2013-01-05"])
            .build()
            .unwrap();

        assert_eq!(
            args("2013-01-01").eval(&cal),
            "date: 2013-01-01 (Tue)\n\
             business day: no\n\
             working day: yes\n\
             holiday: yes\n\
             extra working date: no"
        );
        assert_eq!(
            args("2013-01-05T12:00:00").eval(&cal),
            "date: 2013-01-05 (Sat)\n\
             business day: yes\n\
             working day: no\n\
             holiday: no\n\
             extra working date: yes"
        );
    }
}
