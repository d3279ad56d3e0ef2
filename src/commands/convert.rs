use std::io::Write;

use crate::cli::Cli;
use crate::error::AppError;
use crate::filetime::convert::convert;
use crate::models::ConvertedTimestamp;
use crate::output::LineWriter;

pub fn run<W: Write>(cli: &Cli, out: W) -> Result<(), AppError> {
    log::debug!("converting FILETIME {} (local: {})", cli.timestamp, cli.local);

    let instant = convert(cli.timestamp)?;
    log::debug!("UTC instant: {}", instant);

    let record = ConvertedTimestamp::new(cli.timestamp, &instant, cli.local);

    let mut writer = LineWriter::new(out);
    if cli.json {
        writer.write_json(&record)?;
    } else {
        writer.write_line(record.display())?;
    }
    writer.flush()?;
    Ok(())
}
