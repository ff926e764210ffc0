// src/csv.rs
//
// Delimited text for exports, clipboard and the local cache. RFC 4180
// quoting; the same code serves CSV (',') and TSV ('\t').

use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Plain,
    Quoted,
}

/// Rows of `text`. CRLF and LF both end a row; blank lines are skipped; an
/// unterminated quote runs to the end of the input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell = s!();
    let mut state = Field::Plain;
    let mut it = text.chars().peekable();

    let mut end_row = |cells: &mut Vec<String>, cell: &mut String| {
        cells.push(take(cell));
        let blank = cells.len() == 1 && cells[0].is_empty();
        if blank {
            cells.clear();
        } else {
            out.push(take(cells));
        }
    };

    while let Some(ch) = it.next() {
        match (state, ch) {
            (Field::Quoted, '"') if it.peek() == Some(&'"') => {
                it.next();
                cell.push('"');
            }
            (Field::Quoted, '"') => state = Field::Plain,
            (Field::Quoted, c) => cell.push(c),
            (Field::Plain, '"') => state = Field::Quoted,
            (Field::Plain, c) if c == sep => cells.push(take(&mut cell)),
            (Field::Plain, '\r') => {
                if it.peek() == Some(&'\n') {
                    it.next();
                }
                end_row(&mut cells, &mut cell);
            }
            (Field::Plain, '\n') => end_row(&mut cells, &mut cell),
            (Field::Plain, c) => cell.push(c),
        }
    }
    if !cell.is_empty() || !cells.is_empty() {
        end_row(&mut cells, &mut cell);
    }

    out
}

/* ---------------- Writing ---------------- */

fn quote(cell: &str, sep: char) -> Cow<'_, str> {
    if cell.contains([sep, '"', '\n', '\r']) {
        Cow::Owned(join!("\"", &cell.replace('"', "\"\""), "\""))
    } else {
        Cow::Borrowed(cell)
    }
}

/// One row plus its line terminator.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        w.write_all(quote(cell.as_ref(), sep).as_bytes())?;
    }
    writeln!(w)
}

/// Header line (if any) followed by every row.
pub fn rows_to_string(rows: &[Vec<String>], headers: Option<&[String]>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // io::Write for Vec<u8> never fails.
    for row in headers.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        let _ = write_row(&mut buf, row, sep);
    }
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_with_separator() {
        let rows = vec![vec![s!("1"), s!("Crime, Drama"), s!("say \"hi\"")]];
        let out = rows_to_string(&rows, None, ',');
        assert_eq!(out, "1,\"Crime, Drama\",\"say \"\"hi\"\"\"\n");
        assert_eq!(parse_rows(&out, ','), rows);
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let rows = vec![vec![s!("Crime, Drama"), s!("8.6")]];
        let headers = vec![s!("Genres"), s!("Rating")];
        let out = rows_to_string(&rows, Some(&headers), '\t');
        assert_eq!(out, "Genres\tRating\nCrime, Drama\t8.6\n");
    }

    #[test]
    fn parse_handles_crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,\n", ',');
        assert_eq!(rows, vec![vec![s!("a"), s!("b")], vec![s!("c"), s!("")]]);
    }

    #[test]
    fn parse_keeps_row_without_trailing_newline() {
        assert_eq!(parse_rows("x,y", ','), vec![vec![s!("x"), s!("y")]]);
        assert!(parse_rows("", ',').is_empty());
    }
}
