use std::{fs, path::Path};

use anyhow::Result;
use polars::prelude::*;

/// Read a result CSV with a header row, skipping `#` comment lines. Column
/// names are whitespace-trimmed on load; some solver scripts emit headers
/// with stray spaces.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReader::from_path(path)?
        .with_comment_char(Some(b'#'))
        .has_header(true)
        .finish()?;
    trim_column_names(&mut df)?;
    Ok(df)
}

/// Strip leading/trailing whitespace from all column names.
pub fn trim_column_names(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(String::from)
        .collect();
    for name in names {
        let trimmed = name.trim();
        if trimmed != name {
            df.rename(&name, trimmed)?;
        }
    }
    Ok(())
}

/// Write a dataframe to a CSV with a header row.
pub fn write_csv(mut df: DataFrame, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
