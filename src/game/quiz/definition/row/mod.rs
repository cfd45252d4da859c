
const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Splits one line of question data into trimmed fields.
///
/// A quote toggles quoted mode, inside which delimiters are kept as text.
/// Quotes cannot be escaped: a quote inside a quoted span closes it. The
/// last field is always emitted, so this never returns an empty list.
pub fn parse_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in row.chars() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_owned());

    fields
}
