use anyhow::{Context, Result, bail};
use sheetfill_engine::RowRange;

/// Parse the `--rows` argument.
///
/// Row numbers are 1-based on the command line and converted to the engine's
/// zero-based ranges here. Accepted forms: `all`, `7`, `2-10`.
pub fn parse_rows(s: &str) -> Result<RowRange> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("all") {
        return Ok(RowRange::All);
    }

    if let Some((from, to)) = s.split_once('-') {
        let from: u32 = from
            .trim()
            .parse()
            .with_context(|| format!("invalid start row '{from}'"))?;
        let to: u32 = to
            .trim()
            .parse()
            .with_context(|| format!("invalid end row '{to}'"))?;
        if from == 0 || to == 0 {
            bail!("row numbers are 1-based");
        }
        return RowRange::span(from - 1, to - 1).map_err(|e| anyhow::anyhow!(e));
    }

    let row: u32 = s.parse().with_context(|| format!("invalid row '{s}'"))?;
    if row == 0 {
        bail!("row numbers are 1-based");
    }
    Ok(RowRange::single(row - 1))
}
