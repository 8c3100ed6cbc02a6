use anyhow::{Context, Result};
use std::path::Path;

use super::DataSet;

/// Read a text file of one or more numeric columns.
pub fn load_text(path: &Path) -> Result<DataSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open data file: {}", path.display()))?;
    parse_columns(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse comma- or whitespace-separated rows.
///
/// Blank lines and lines starting with `#` are skipped. Each field is read
/// by its leading number, so unit suffixes like `2.0V` are tolerated. A
/// comma-separated row with a field that does not start with a number is
/// dropped whole (header rows). A whitespace-separated row keeps the numbers
/// up to the first token with trailing text. One value is an amplitude; two or
/// more are (time, amplitude).
pub fn parse_columns(text: &str) -> Result<DataSet> {
    let mut data = DataSet::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = if line.contains(',') {
            parse_comma_row(line)
        } else {
            parse_whitespace_row(line)
        };

        match values.as_slice() {
            [] => {}
            [amplitude] => data.amplitude.push(*amplitude),
            [time, amplitude, ..] => {
                data.time.push(*time);
                data.amplitude.push(*amplitude);
            }
        }
    }

    if data.amplitude.is_empty() {
        anyhow::bail!("No valid data found");
    }
    Ok(data)
}

fn parse_comma_row(line: &str) -> Vec<f64> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| leading_number(token).map(|(value, _)| value))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

fn parse_whitespace_row(line: &str) -> Vec<f64> {
    let mut values = Vec::new();
    for token in line.split_whitespace() {
        let Some((value, used)) = leading_number(token) else {
            break;
        };
        values.push(value);
        if used < token.len() {
            break;
        }
    }
    values
}

/// Longest prefix of `token` that parses as an f64, with its byte length.
fn leading_number(token: &str) -> Option<(f64, usize)> {
    token
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| token[..end].parse::<f64>().ok().map(|v| (v, end)))
}

/// Sampling rate implied by evenly spaced timestamps, if they move forward.
pub fn estimate_sample_rate(time: &[f64]) -> Option<f64> {
    let (first, last) = match time {
        [first, .., last] => (*first, *last),
        _ => return None,
    };
    let dt = (last - first) / (time.len() - 1) as f64;
    (dt > 0.0).then(|| 1.0 / dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column() {
        let data = parse_columns("1.0\n2.5\n-3\n").unwrap();
        assert_eq!(data.amplitude, vec![1.0, 2.5, -3.0]);
        assert!(data.time.is_empty());
    }

    #[test]
    fn skips_comments_blank_lines_and_headers() {
        let text = "# recorded 2024-01-01\n\ntime,value\n0.0, 1.0\n  # indented comment\n0.1,2.0\n";
        let data = parse_columns(text).unwrap();
        assert_eq!(data.time, vec![0.0, 0.1]);
        assert_eq!(data.amplitude, vec![1.0, 2.0]);
    }

    #[test]
    fn whitespace_and_tabs() {
        let data = parse_columns("0\t0.5\n1  -0.5  99\n2 1.5 note\n").unwrap();
        assert_eq!(data.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(data.amplitude, vec![0.5, -0.5, 1.5]);
    }

    #[test]
    fn whitespace_row_stops_at_first_word() {
        let data = parse_columns("4.0 volts 7.0\nlabel 3.0\n").unwrap();
        assert_eq!(data.amplitude, vec![4.0]);
        assert!(data.time.is_empty());
    }

    #[test]
    fn unit_suffixes_keep_their_number() {
        let data = parse_columns("0.1, 2.0 V\n0.2,1.5abc\n0.3 -4e-1mV 9\n").unwrap();
        assert_eq!(data.time, vec![0.1, 0.2, 0.3]);
        assert_eq!(data.amplitude, vec![2.0, 1.5, -0.4]);
    }

    #[test]
    fn leading_number_prefix() {
        assert_eq!(leading_number("2.0V"), Some((2.0, 3)));
        assert_eq!(leading_number("1e"), Some((1.0, 1)));
        assert_eq!(leading_number("-3"), Some((-3.0, 2)));
        assert_eq!(leading_number("volts"), None);
        assert_eq!(leading_number("µ1"), None);
    }

    #[test]
    fn comma_row_with_empty_fields() {
        let data = parse_columns("1.0,,\n,2.0\n").unwrap();
        assert_eq!(data.amplitude, vec![1.0, 2.0]);
    }

    #[test]
    fn no_numbers_is_an_error() {
        let err = parse_columns("# only a comment\nheader,row\n\n").unwrap_err();
        assert!(err.to_string().contains("No valid data"));
    }

    #[test]
    fn estimates_rate_from_timestamps() {
        let rate = estimate_sample_rate(&[0.0, 0.001, 0.002, 0.003]).unwrap();
        assert!((rate - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn no_rate_without_forward_time() {
        assert_eq!(estimate_sample_rate(&[]), None);
        assert_eq!(estimate_sample_rate(&[1.0]), None);
        assert_eq!(estimate_sample_rate(&[2.0, 2.0, 2.0]), None);
        assert_eq!(estimate_sample_rate(&[3.0, 2.0, 1.0]), None);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.txt");
        std::fs::write(&path, "0 1\n0.5 2\n1.0 3\n").unwrap();
        let data = load_text(&path).unwrap();
        assert_eq!(data.amplitude, vec![1.0, 2.0, 3.0]);
        assert_eq!(estimate_sample_rate(&data.time), Some(2.0));
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_text(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }
}
