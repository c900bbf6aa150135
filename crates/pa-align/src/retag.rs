//! Re-insertion of paragraph markers into the bilingual document.

use std::collections::BTreeSet;

use tracing::warn;

/// Copy `lines` in order, emitting `marker` on its own line immediately
/// before every line whose index is in `starts`.
///
/// Every input line is kept verbatim, blank ones included. Indices past the
/// end of `lines` have no line to precede and are dropped with a warning.
pub fn apply_tags<S: AsRef<str>>(lines: &[S], starts: &BTreeSet<usize>, marker: &str) -> Vec<String> {
    if let Some(&last) = starts.iter().next_back() {
        if last >= lines.len() {
            warn!(
                index = last,
                lines = lines.len(),
                "paragraph start beyond end of document ignored"
            );
        }
    }

    let mut out = Vec::with_capacity(lines.len() + starts.len());
    for (idx, line) in lines.iter().enumerate() {
        if starts.contains(&idx) {
            out.push(marker.to_owned());
        }
        out.push(line.as_ref().to_owned());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_precedes_each_start() {
        let lines = vec!["One.", "一", "", "Two.", "二"];
        let starts: BTreeSet<usize> = [0, 3].into_iter().collect();
        let out = apply_tags(&lines, &starts, "<P>");
        assert_eq!(out, vec!["<P>", "One.", "一", "", "<P>", "Two.", "二"]);
    }

    #[test]
    fn no_starts_is_identity() {
        let lines = vec!["a", "b"];
        assert_eq!(apply_tags(&lines, &BTreeSet::new(), "<P>"), vec!["a", "b"]);
    }

    #[test]
    fn out_of_range_start_is_ignored() {
        let lines = vec!["a"];
        let starts: BTreeSet<usize> = [0, 5].into_iter().collect();
        assert_eq!(apply_tags(&lines, &starts, "#"), vec!["#", "a"]);
    }

    #[test]
    fn input_is_untouched() {
        let lines = vec!["x".to_string(), "y".to_string()];
        let starts: BTreeSet<usize> = [1].into_iter().collect();
        let out = apply_tags(&lines, &starts, "<P>");
        assert_eq!(lines, vec!["x", "y"]);
        assert_eq!(out.len(), lines.len() + 1);
    }
}
