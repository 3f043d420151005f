//! Tests for row reconstruction and nested-table tracking

use super::*;
use crate::app::services::markup::row_extractor::{RowEnd, RowExtractor};
use crate::app::services::markup::tokenizer::HtmlTokenizer;

fn rows_of(html: &str) -> Vec<Vec<String>> {
    let mut extractor = RowExtractor::new(HtmlTokenizer::new(html));
    let mut rows = Vec::new();
    loop {
        let row = extractor.next_row().unwrap();
        let done = row.end == RowEnd::EndOfStream;
        if !row.cells.is_empty() {
            rows.push(row.cells);
        }
        if done {
            return rows;
        }
    }
}

#[test]
fn test_simple_row() {
    let rows = rows_of(
        "<table><tr><td>Channel ID</td><td>3&nbsp; </td><td>1&nbsp; </td></tr></table>",
    );
    assert_eq!(rows, vec![vec!["Channel ID", "3\u{a0} ", "1\u{a0} "]]);
}

#[test]
fn test_legacy_nbsp_references_decode_to_padding() {
    let rows = rows_of(
        "<table><tr><td>Channel ID</td><td>3&nbsp </td><td>7&#160</td></tr></table>",
    );
    let cells = &rows[0];
    assert_eq!(cells[1].trim(), "3");
    assert_eq!(cells[2].trim(), "7");
}

#[test]
fn test_text_outside_cells_is_ignored() {
    let rows = rows_of("<tr>\n  <td>a</td>\n  stray\n  <td>b</td>\n</tr>");
    assert_eq!(rows, vec![vec!["a", "b"]]);
}

#[test]
fn test_inline_markup_inside_cell_is_kept() {
    let rows = rows_of("<tr><td><b>Power</b> Level</td><td>[3] QPSK<br>[3] 64QAM<br></td></tr>");
    assert_eq!(rows, vec![vec!["Power Level", "[3] QPSK[3] 64QAM"]]);
}

#[test]
fn test_nested_table_row_end_does_not_end_outer_row() {
    let html = "<tr><td>Power Level<table><tbody><tr><td><small>The Downstream Power Level \
                reading is a snapshot</small></td></tr></tbody></table></td>\
                <td>7 dBmV&nbsp;</td><td>-1 dBmV&nbsp;</td></tr>";
    let rows = rows_of(html);
    assert_eq!(rows, vec![vec!["Power Level", "7 dBmV\u{a0}", "-1 dBmV\u{a0}"]]);
}

#[test]
fn test_doubly_nested_tables() {
    let html = "<tr><td>x<table><tr><td><table><tr><td>deep</td></tr></table>\
                </td></tr></table>y</td>\
                <td>z</td></tr>";
    let rows = rows_of(html);
    assert_eq!(rows, vec![vec!["xy", "z"]]);
}

#[test]
fn test_next_outer_table_is_not_nesting() {
    let html = "<table><tr><td>a</td></tr></table>\
                <center><table><tr><th>Upstream</th></tr><tr><td>b</td></tr></table></center>";
    let mut extractor = RowExtractor::new(HtmlTokenizer::new(html));

    assert_eq!(extractor.next_row().unwrap().cells, vec!["a"]);
    let header = extractor.next_row().unwrap();
    assert_eq!(header.label(), Some("Upstream"));
    assert!(header.is_closed());
    assert_eq!(extractor.next_row().unwrap().cells, vec!["b"]);
    assert_eq!(extractor.rows_read(), 3);
}

#[test]
fn test_omitted_cell_end_tags() {
    let rows = rows_of("<tr><td>Frequency<td>1 Hz<td>2 Hz</tr>");
    assert_eq!(rows, vec![vec!["Frequency", "1 Hz", "2 Hz"]]);
}

#[test]
fn test_empty_cells_are_kept_positionally() {
    let rows = rows_of("<tr><td>SNR</td><td></td><td>36 dB</td></tr>");
    assert_eq!(rows, vec![vec!["SNR", "", "36 dB"]]);
}

#[test]
fn test_end_of_stream_is_clean_end() {
    let mut extractor = RowExtractor::new(HtmlTokenizer::new("<tr><td>Channel ID</td><td>3"));
    let row = extractor.next_row().unwrap();
    assert_eq!(row.end, RowEnd::EndOfStream);
    assert_eq!(row.cells, vec!["Channel ID", "3"]);
    assert!(!row.is_closed());
}

#[test]
fn test_stream_error_propagates() {
    let stream = FailingStream::after(vec![
        Token::start("tr"),
        Token::start("td"),
        Token::text("3"),
    ]);
    let mut extractor = RowExtractor::new(stream);
    let err = extractor.next_row().unwrap_err();
    assert!(matches!(err, Error::Stream { .. }));
}

#[test]
fn test_skip_rows() {
    let html = "<tr><th>Downstream</th></tr><tr><td>nav</td></tr>\
                <tr><td>Channel ID</td><td>5</td></tr>";
    let mut extractor = RowExtractor::new(HtmlTokenizer::new(html));
    assert_eq!(extractor.skip_rows(2).unwrap(), RowEnd::Closed);

    let row = extractor.next_row().unwrap();
    assert_eq!(row.label(), Some("Channel ID"));
    assert_eq!(row.data_cells(), &["5".to_string()]);
}

#[test]
fn test_skip_rows_stops_at_end_of_stream() {
    let mut extractor = RowExtractor::new(HtmlTokenizer::new("<tr><td>only</td></tr>"));
    assert_eq!(extractor.skip_rows(3).unwrap(), RowEnd::EndOfStream);
}

#[test]
fn test_pre_tokenized_input() {
    let tokens = vec![
        Token::start("tr"),
        Token::start("td"),
        Token::text("Ranging Status "),
        Token::end("td"),
        Token::start("td"),
        Token::text("Success\u{a0}"),
        Token::end("td"),
        Token::end("tr"),
    ];
    let mut extractor = RowExtractor::new(tokens.into_iter());
    let row = extractor.next_row().unwrap();
    assert_eq!(row.label(), Some("Ranging Status"));
    assert_eq!(row.data_cells(), &["Success\u{a0}".to_string()]);
}

#[test]
fn test_row_without_label_has_no_data_cells() {
    let mut extractor = RowExtractor::new(HtmlTokenizer::new("<tr></tr>"));
    let row = extractor.next_row().unwrap();
    assert_eq!(row.label(), None);
    assert!(row.data_cells().is_empty());
}
