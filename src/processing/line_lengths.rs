use crate::models::fields::{FILLER, MRZ_LINE_LEN};
use crate::utils::MrzError;

// Lines at or below this length are OCR noise, not MRZ lines.
const GHOST_LINE_LEN: usize = 10;

/// Fixes the line lengths of the MRZ text, ensuring it has two lines of 44
/// characters.
///
/// Ghost lines are dropped first; anything other than exactly two remaining
/// lines is unrepairable. On line 1, everything from the first `<<<` marker
/// (the run separating the name from the trailing padding) is replaced with
/// filler up to exactly 44 characters, which corrects OCR runs that produced
/// too many or too few trailing fillers. Both lines must measure 44 after
/// the attempt.
pub fn fix_line_lengths(mrz_text: &str) -> Result<String, MrzError> {
    let mut lines: Vec<Vec<char>> = mrz_text
        .lines()
        .map(|line| line.chars().collect::<Vec<char>>())
        .filter(|line| line.len() > GHOST_LINE_LEN)
        .collect();
    if lines.len() != 2 {
        return Err(MrzError::InvalidLineCount(lines.len()));
    }

    if let Some(index) = find_filler_run(&lines[0]) {
        lines[0].truncate(index);
        while lines[0].len() < MRZ_LINE_LEN {
            lines[0].push(FILLER);
        }
    }

    let (len1, len2) = (lines[0].len(), lines[1].len());
    if len1 != MRZ_LINE_LEN || len2 != MRZ_LINE_LEN {
        return Err(MrzError::WrongLineLength(len1, len2));
    }

    let lines: Vec<String> = lines.into_iter().map(|line| line.into_iter().collect()).collect();
    Ok(lines.join("\n"))
}

/// Position of the first `<<<` occurrence, the separator between the name
/// components and the padding run.
fn find_filler_run(line: &[char]) -> Option<usize> {
    line.windows(3).position(|window| window == [FILLER; 3])
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE2: &str = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";

    #[test]
    fn test_correct_lines_pass_through() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let text = format!("{}\n{}", line1, LINE2);
        assert_eq!(fix_line_lengths(&text).unwrap(), text);
    }

    #[test]
    fn test_too_many_trailing_fillers_are_trimmed() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<<<<";
        let text = format!("{}\n{}", line1, LINE2);
        let fixed = fix_line_lengths(&text).unwrap();
        assert_eq!(
            fixed.lines().next().unwrap(),
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<"
        );
    }

    #[test]
    fn test_too_few_trailing_fillers_are_padded() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<";
        let text = format!("{}\n{}", line1, LINE2);
        let fixed = fix_line_lengths(&text).unwrap();
        assert_eq!(
            fixed.lines().next().unwrap(),
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<"
        );
    }

    #[test]
    fn test_repair_yields_44_for_any_marker_offset() {
        // The repaired first line is exactly 44 characters wherever the
        // marker starts within the line.
        for index in 0..MRZ_LINE_LEN {
            let line1 = format!("{}<<<", "A".repeat(index));
            let text = format!("{}\n{}", line1, LINE2);
            match fix_line_lengths(&text) {
                Ok(fixed) => {
                    assert_eq!(fixed.lines().next().unwrap().chars().count(), MRZ_LINE_LEN)
                }
                // Lines at ghost length get dropped before repair; those
                // inputs fail on the line count instead.
                Err(err) => assert_eq!(err, MrzError::InvalidLineCount(1)),
            }
        }
    }

    #[test]
    fn test_ghost_lines_are_dropped() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let text = format!("PKUTO\n{}\n<<\n{}", line1, LINE2);
        let fixed = fix_line_lengths(&text).unwrap();
        assert_eq!(fixed, format!("{}\n{}", line1, LINE2));
    }

    #[test]
    fn test_wrong_number_of_lines_is_an_error() {
        let err = fix_line_lengths(LINE2).unwrap_err();
        assert_eq!(err, MrzError::InvalidLineCount(1));
    }

    #[test]
    fn test_unrepairable_second_line_reports_both_lengths() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let short_line2 = &LINE2[..43];
        let err = fix_line_lengths(&format!("{}\n{}", line1, short_line2)).unwrap_err();
        assert_eq!(err, MrzError::WrongLineLength(44, 43));
    }

    #[test]
    fn test_line_without_marker_is_not_repaired() {
        // 30 letters, no <<< run: nothing to anchor the repair on, so the
        // length check fails.
        let line1 = "PKUTOERIKSSONKKANNAKMARIAKKKKK";
        let err = fix_line_lengths(&format!("{}\n{}", line1, LINE2)).unwrap_err();
        assert_eq!(err, MrzError::WrongLineLength(30, 44));
    }
}
