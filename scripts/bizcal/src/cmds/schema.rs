use std::path::PathBuf;

use anyhow::Context;
use qbizcal::calendar::CalendarDefinition;

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Output file. The schema is printed when omitted
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Args {
    fn eval(&self) -> anyhow::Result<String> {
        let schema = schemars::schema_for!(CalendarDefinition);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let schema = self.eval()?;
        match &self.output {
            Some(path) => {
                log::info!("Writing schema to {:?}", path);
                std::fs::write(path, schema)
                    .with_context(|| format!("Writing schema to {:?}", path))?;
            }
            None => println!("{schema}"),
        }
        Ok(())
    }
}
