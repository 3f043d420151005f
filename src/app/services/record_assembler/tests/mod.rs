//! Test utilities for record assembly
//!
//! Provides the recorded status page fixture and a small page generator for
//! malformed-layout scenarios.


/// Status page captured from a modem, with four downstream and three upstream channels
pub const FIXTURE_PAGE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/cmSignalData.htm"
));

/// Render one table section with a header row and labelled data rows
pub fn section_table(header: &str, rows: &[(&str, Vec<&str>)]) -> String {
    let mut html = format!("<CENTER><TABLE border=1><TBODY><TR><TH>{}</TH></TR>\n", header);
    for (label, cells) in rows {
        html.push_str("<TR><TD>");
        html.push_str(label);
        html.push_str("</TD>");
        for cell in cells {
            html.push_str("<TD>");
            html.push_str(cell);
            html.push_str("&nbsp;</TD>");
        }
        html.push_str("</TR>\n");
    }
    html.push_str("</TBODY></TABLE></CENTER>\n");
    html
}

/// Downstream rows for two channels
pub fn downstream_rows() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("Channel ID", vec!["5", "6"]),
        ("Frequency", vec!["603000000 Hz", "609000000 Hz"]),
        ("Signal to Noise Ratio", vec!["38 dB", "37 dB"]),
        ("Downstream Modulation", vec!["QAM256", "QAM256"]),
        ("Power Level", vec!["2 dBmV", "3 dBmV"]),
    ]
}

/// Upstream rows for one channel
pub fn upstream_rows() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("Channel ID", vec!["9"]),
        ("Frequency", vec!["30100000 Hz"]),
        ("Ranging Service ID", vec!["42"]),
        ("Symbol Rate", vec!["5.120 Msym/sec"]),
        ("Power Level", vec!["44 dBmV"]),
        ("Upstream Modulation", vec!["[3] QPSK"]),
        ("Ranging Status ", vec!["Success"]),
    ]
}

/// Codeword rows matching [`downstream_rows`]
pub fn codeword_rows() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("Channel ID", vec!["5", "6"]),
        ("Total Unerrored Codewords", vec!["1000", "2000"]),
        ("Total Correctable Codewords", vec!["10", "20"]),
        ("Total Uncorrectable Codewords", vec!["1", "2"]),
    ]
}

/// Assemble a full page from the three sections
pub fn build_page(
    downstream: &[(&str, Vec<&str>)],
    upstream: &[(&str, Vec<&str>)],
    codewords: &[(&str, Vec<&str>)],
) -> String {
    format!(
        "<HTML><BODY>{}<P>{}<P>{}</BODY></HTML>",
        section_table("Downstream", downstream),
        section_table("Upstream", upstream),
        section_table("Signal Stats (Codewords)", codewords)
    )
}
