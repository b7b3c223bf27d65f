//! `H:MM:SS` time strings as reported by AVTransport.

/// Parse an `H:MM:SS` string into whole seconds
///
/// Hours may have any number of digits. Returns 0 for anything that is not
/// exactly three non-negative integer fields: radio streams report
/// `NOT_IMPLEMENTED` or an empty string for position and duration, and a
/// status read must still succeed for them.
pub fn parse_duration(time_str: &str) -> u64 {
    parse_fields(time_str).unwrap_or(0)
}

fn parse_fields(time_str: &str) -> Option<u64> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: u64 = parts[0].trim().parse().ok()?;
    let minutes: u64 = parts[1].trim().parse().ok()?;
    let seconds: u64 = parts[2].trim().parse().ok()?;

    Some(
        hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds),
    )
}
