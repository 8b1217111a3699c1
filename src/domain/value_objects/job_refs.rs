/// Prefix every job reference starts with, e.g. `RYDE05012025-3`.
pub const JOB_REF_PREFIX: &str = "RYDE";

pub fn format_job_ref(date_key: &str, index: u32) -> String {
    format!("{JOB_REF_PREFIX}{date_key}-{index}")
}

/// Extracts the numeric index from a reference matching `RYDE<date_key>-<N>`.
/// Anything else, including references for a different date, yields `None`.
pub fn parse_index(reference: &str, date_key: &str) -> Option<u32> {
    let digits = reference
        .strip_prefix(JOB_REF_PREFIX)?
        .strip_prefix(date_key)?
        .strip_prefix('-')?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_key_and_index() {
        assert_eq!(format_job_ref("05012025", 1), "RYDE05012025-1");
        assert_eq!(format_job_ref("31122024", 412), "RYDE31122024-412");
    }

    #[test]
    fn parses_index_back_out() {
        assert_eq!(parse_index("RYDE05012025-1", "05012025"), Some(1));
        assert_eq!(parse_index("RYDE05012025-17", "05012025"), Some(17));
    }

    #[test]
    fn rejects_other_dates_and_malformed_references() {
        assert_eq!(parse_index("RYDE06012025-1", "05012025"), None);
        assert_eq!(parse_index("RYDE05012025-", "05012025"), None);
        assert_eq!(parse_index("RYDE05012025-1a", "05012025"), None);
        assert_eq!(parse_index("RYDE05012025", "05012025"), None);
        assert_eq!(parse_index("JOB05012025-1", "05012025"), None);
    }
}
