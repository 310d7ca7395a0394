use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::datastructures::{InstanceParams, ParseMode};

static INSTANCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"n(\d+)_p0c([0-9.]+)").unwrap());

/// Recover `(n, p)` from an instance path like
/// `graphs/erdos_n1000_p0c0.05_1.graph`. Only the file name portion of the
/// path is inspected.
///
/// Under [`ParseMode::Strict`] a name without the `n<digits>_p0c<decimal>`
/// pattern is an error; under [`ParseMode::Lenient`] it yields `Ok(None)`
/// and the caller excludes the record.
pub fn parse_instance(
    path: &str,
    mode: ParseMode,
) -> Result<Option<InstanceParams>> {
    let fname = path.rsplit('/').next().unwrap_or(path);
    match mode {
        ParseMode::Strict => {
            let Some(caps) = INSTANCE_RE.captures(fname) else {
                bail!("could not parse instance name: {fname}");
            };
            let n = caps[1].parse()?;
            let p = caps[2].parse()?;
            Ok(Some(InstanceParams::new(n, p)))
        }
        ParseMode::Lenient => Ok(split_instance(fname)),
    }
}

// Positional variant: second underscore field is 'n<N>', third is 'p<P>'
// with 'c' standing in for the decimal point. The replacement can produce a
// doubled-dot artifact ('p0c0.05' -> '0.0.05'), which clean_density undoes.
fn split_instance(fname: &str) -> Option<InstanceParams> {
    let mut fields = fname.split('_');
    let n_field = fields.nth(1)?;
    let p_field = fields.next()?;
    let n = n_field.strip_prefix('n')?.parse().ok()?;
    let p = clean_density(&p_field.strip_prefix('p')?.replace('c', "."))?;
    Some(InstanceParams::new(n, p))
}

/// Map a raw density onto the canonical tenths grid by rounding up, capped
/// at 0.9. The epsilon keeps exact tenths in place (0.10 stays 0.1 instead
/// of being nudged up to 0.2 by floating-point noise).
pub fn bucket_density(p_raw: f64) -> f64 {
    ((p_raw * 10.0 + 0.999_999).floor() / 10.0).min(0.9)
}

/// Normalize a density that may arrive in several textual encodings.
/// Rules are tried in order, first success wins:
/// `0c0.55` -> 0.55, `0.0.55` -> 0.55, `0.55` -> 0.55, anything else `None`.
pub fn clean_density(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if let Some((_, after)) = s.split_once('c') {
        if let Ok(p) = after.parse() {
            return Some(p);
        }
    }
    if s.matches('.').count() >= 2 {
        if let Some(last) = s.rsplit('.').next() {
            if let Ok(p) = format!(".{last}").parse() {
                return Some(p);
            }
        }
    }
    s.parse().ok()
}
