use crate::core::{FragmentKeys, NormalizedReading, Reading, parse_timestamp};

/// Filters, orders and reduces raw readings.
///
/// Readings with a missing or unparsable `upload_timestamp` are dropped. The
/// rest come back newest first; readings sharing an instant keep their input
/// order. Every surviving reading yields a [`NormalizedReading`], including
/// ones without any level candidate. The input is left untouched.
pub fn normalize(readings: &[Reading], keys: &FragmentKeys) -> Vec<NormalizedReading> {
    let mut dated: Vec<_> = readings
        .iter()
        .filter_map(|r| {
            let ts = r.upload_timestamp.as_deref().and_then(parse_timestamp)?;
            Some((ts, r))
        })
        .collect();

    let dropped = readings.len() - dated.len();
    if dropped > 0 {
        log::debug!("dropped {dropped} reading(s) without a usable timestamp");
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));

    dated
        .into_iter()
        .map(|(ts, r)| NormalizedReading::from_reading(ts, r, keys))
        .collect()
}
