use super::super::scoring::Severity;

/// Canned concern narrative keyed by severity band, inserted verbatim into
/// the "top concerns" section of every report.
pub(crate) fn concern_narrative(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => {
            "Responses in this pattern sit comfortably within the typical range. \
             No follow-up is suggested."
        }
        Severity::Mild => {
            "This pattern shows up occasionally. It is worth keeping an eye on, \
             but rarely interferes with daily routines at this level."
        }
        Severity::Moderate => {
            "This pattern appears regularly and is likely noticeable to the people \
             around the respondent. Reviewing the item-level answers with a coach \
             can help identify the situations that trigger it."
        }
        Severity::High => {
            "This pattern is a frequent presence and is probably interfering with \
             daily functioning. We recommend discussing it with the assigned coach \
             during the next session."
        }
        Severity::Severe => {
            "This pattern dominated the responses. It should be the first topic in \
             the coaching conversation, and the coach may suggest additional \
             support alongside the programme."
        }
    }
}
