//! Line and cell splitting.

use smallvec::SmallVec;

/// Cells of one CSV line: name, seven days, then any extra columns.
pub type ImportRow = SmallVec<[String; 8]>;

const BOM: char = '\u{feff}';

/// Splits file text into rows, skipping blank lines.
///
/// A leading byte-order mark is dropped and both `\n` and `\r\n` line endings
/// are accepted.
///
/// # Examples
///
/// ```
/// use sg_csv::parse_csv;
///
/// let rows = parse_csv("Name,Sat\n\n Frank Gmelin , OFF \n");
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].as_slice(), ["Frank Gmelin", "OFF"]);
/// ```
#[must_use]
pub fn parse_csv(text: &str) -> Vec<ImportRow> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Splits one line into cells.
///
/// Unquoted cells are split on `,` and trimmed. A cell whose first
/// non-blank character is `"` runs to the matching closing quote, may
/// contain commas, and unescapes `""` to `"`; its inner whitespace is kept.
/// If the closing quote never comes, the opening quote is literal text and
/// the rest of the line splits on every comma.
#[must_use]
pub fn parse_line(line: &str) -> ImportRow {
    let mut cells = ImportRow::new();
    let mut cell = String::new();
    let mut cell_start = 0;
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.next_if(|&(_, next)| next == '"').is_some() {
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if !quoted && cell.trim().is_empty() => {
                cell.clear();
                quoted = true;
                in_quotes = true;
            }
            ',' if !in_quotes => {
                cells.push(finish_cell(&mut cell, quoted));
                quoted = false;
                cell_start = i + 1;
            }
            // whitespace between a closing quote and the separator
            c if quoted && !in_quotes && c.is_whitespace() => {}
            c => cell.push(c),
        }
    }

    if in_quotes {
        let rest = line.get(cell_start..).unwrap_or_default();
        cells.extend(rest.split(',').map(|raw| raw.trim().to_owned()));
    } else {
        cells.push(finish_cell(&mut cell, quoted));
    }
    cells
}

fn finish_cell(cell: &mut String, quoted: bool) -> String {
    let taken = std::mem::take(cell);
    if quoted {
        taken
    } else {
        taken.trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split_and_trim() {
        let row = parse_line("  Dawn Mitchell ,7AM-3PM,, OFF ");
        assert_eq!(row.as_slice(), ["Dawn Mitchell", "7AM-3PM", "", "OFF"]);
    }

    #[test]
    fn test_quoted_cells_keep_commas_and_escapes() {
        let row = parse_line(r#""Chen, Lisa","say ""hi""", "  padded  " ,x"#);
        assert_eq!(
            row.as_slice(),
            ["Chen, Lisa", r#"say "hi""#, "  padded  ", "x"]
        );
    }

    #[test]
    fn test_quote_inside_unquoted_cell_is_literal() {
        let row = parse_line(r#"5" screen,OFF"#);
        assert_eq!(row.as_slice(), [r#"5" screen"#, "OFF"]);
    }

    #[test]
    fn test_unterminated_quote_is_literal() {
        let row = parse_line("\"Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri");
        assert_eq!(row.len(), 8);
        assert_eq!(row[0], "\"Name");
        assert_eq!(row[7], "Fri");

        let row = parse_line(r#"Lisa Chen, "OFF , 7AM-3PM"#);
        assert_eq!(row.as_slice(), ["Lisa Chen", r#""OFF"#, "7AM-3PM"]);
    }

    #[test]
    fn test_empty_quoted_cells() {
        let row = parse_line(r#""","","#);
        assert_eq!(row.as_slice(), ["", "", ""]);
    }

    #[test]
    fn test_bom_and_crlf() {
        let rows = parse_csv("\u{feff}Name,Sat\r\nLisa Chen,OFF\r\n\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Name");
        assert_eq!(rows[1].as_slice(), ["Lisa Chen", "OFF"]);
    }

    #[test]
    fn test_whitespace_only_lines_skipped() {
        assert!(parse_csv(" \n\t\n").is_empty());
    }
}
