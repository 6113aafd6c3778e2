use crate::models::fields::{confusion_for, PASSPORT_FIELDS};

/// Replaces characters in the MRZ text based on the different MRZ fields.
/// For example, the name line should only contain letters, so a `1` read
/// there is really an `I`.
///
/// Each registry field is corrected on its own: only confusion-table
/// entries whose source belongs to the complementary alphabet apply (a
/// digits-only field accepts letter-to-digit swaps and nothing else), and
/// characters without a counterpart, filler included, are left untouched.
/// Field ranges are disjoint by invariant, so no field ever observes
/// another field's substitutions.
pub fn replace_based_on_mrz_fields(mrz_text: &str) -> String {
    let mut lines: Vec<Vec<char>> = mrz_text.lines().map(|line| line.chars().collect()).collect();

    for (_, spec) in PASSPORT_FIELDS {
        let Some(line) = lines.get_mut(spec.line) else {
            continue;
        };
        let end = spec.end.min(line.len());
        for character in line[spec.start.min(end)..end].iter_mut() {
            if !spec.alphabet.complement().contains(*character) {
                continue;
            }
            if let Some(replacement) = confusion_for(*character) {
                *character = replacement;
            }
        }
    }

    let corrected: Vec<String> = lines.into_iter().map(|line| line.into_iter().collect()).collect();
    corrected.join("\n")
}
