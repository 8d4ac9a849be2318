use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use super::core::check_labels;
use super::{ColumnType, DataFrame};
use crate::error::{FrameError, Result};

const SNIFF_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Options for reading delimited text.
///
/// The expected layout is one line of column types, one line of column
/// labels, then one data row per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter; `None` picks the most frequent of `,` `;` tab `|` on
    /// the first line.
    pub delimiter: Option<u8>,
    pub quote: u8,
    /// Trim whitespace around every field.
    pub trim: bool,
    /// Reject fields that do not fit their column's declared type.
    pub strict_types: bool,
    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: None,
            quote: b'"',
            trim: true,
            strict_types: true,
            comment: None,
        }
    }
}

impl CsvOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    pub fn trim(mut self, yes: bool) -> Self {
        self.trim = yes;
        self
    }

    pub fn strict_types(mut self, yes: bool) -> Self {
        self.strict_types = yes;
        self
    }

    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    fn resolve_delimiter(&self, input: &[u8]) -> u8 {
        self.delimiter
            .unwrap_or_else(|| sniff_delimiter(input, self.comment))
    }
}

fn sniff_delimiter(input: &[u8], comment: Option<u8>) -> u8 {
    let first_line = input
        .split(|&b| b == b'\n')
        .find(|line| comment.map_or(true, |c| line.first() != Some(&c)))
        .unwrap_or_default();
    let mut best = (b',', 0usize);
    for candidate in SNIFF_CANDIDATES {
        let count = first_line.iter().filter(|&&b| b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

fn record_line(record: &StringRecord, fallback: u64) -> u64 {
    record.position().map_or(fallback, |p| p.line())
}

impl DataFrame {
    /// Read a typed delimited file with default [`CsvOptions`].
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with(path, &CsvOptions::default())
    }

    pub fn from_csv_with(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        log::debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
        Self::from_csv_bytes(&bytes, options)
    }

    pub fn from_csv_str(input: &str, options: &CsvOptions) -> Result<Self> {
        Self::from_csv_bytes(input.as_bytes(), options)
    }

    pub fn from_reader(mut reader: impl Read, options: &CsvOptions) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_csv_bytes(&bytes, options)
    }

    fn from_csv_bytes(input: &[u8], options: &CsvOptions) -> Result<Self> {
        let delimiter = options.resolve_delimiter(input);
        log::debug!("reading delimited text with delimiter {:?}", delimiter as char);

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .quote(options.quote)
            .comment(options.comment)
            .trim(if options.trim { Trim::All } else { Trim::None })
            .from_reader(input);
        let mut records = rdr.records();

        let type_row = records
            .next()
            .ok_or(FrameError::MissingHeader { line: 1 })??;
        let label_row = records
            .next()
            .ok_or(FrameError::MissingHeader { line: 2 })??;
        if type_row.len() != label_row.len() {
            return Err(FrameError::MalformedHeader {
                types: type_row.len(),
                labels: label_row.len(),
            });
        }

        let types = type_row
            .iter()
            .map(str::parse::<ColumnType>)
            .collect::<Result<Vec<_>>>()?;
        let labels: Vec<String> = label_row.iter().map(|l| l.trim().to_string()).collect();
        check_labels(labels.iter().map(String::as_str))?;
        let width = labels.len();
        let mut frame = DataFrame::with_header(types.clone(), labels.clone());

        for (offset, record) in records.enumerate() {
            let record = record?;
            let line = record_line(&record, offset as u64 + 3);
            if record.len() != width {
                return Err(FrameError::MalformedInput {
                    line,
                    expected: width,
                    found: record.len(),
                });
            }
            if options.strict_types {
                let bad = record
                    .iter()
                    .zip(&types)
                    .position(|(field, dtype)| !dtype.accepts(field));
                if let Some(i) = bad {
                    return Err(FrameError::TypeMismatch {
                        line,
                        column: labels[i].clone(),
                        expected: types[i],
                        value: record[i].to_string(),
                    });
                }
            }
            frame.push_row(record.iter());
        }

        log::debug!(
            "ingested {} columns, {} rows",
            frame.width(),
            frame.columns().first().map_or(0, |c| c.len())
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataframe::Value;

    const STUDENTS: &str = "\
string, int, boolean, double
prenom, numEtudiant, admis, moyenne
Léa,10,false,9.73
Claude,11,true,13.28
Régis,15,true,12.07
";

    #[test]
    fn test_header_lines_supply_types_and_labels() {
        let df = DataFrame::from_csv_str(STUDENTS, &CsvOptions::default()).unwrap();
        assert_eq!(df.labels(), ["prenom", "numEtudiant", "admis", "moyenne"]);
        assert_eq!(
            df.types(),
            vec![
                ColumnType::String,
                ColumnType::Int,
                ColumnType::Boolean,
                ColumnType::Double
            ]
        );
        assert_eq!(df.size().unwrap(), 3);
        assert_eq!(
            df.get_column("admis").unwrap().values()[0],
            Value::Utf8("false".to_string())
        );
        assert_eq!(df.sum("numEtudiant").unwrap(), 36.0);
    }

    #[test]
    fn test_sniffs_delimiter() {
        let input = "string;int\nname;n\nA;1\nB;2\n";
        let df = DataFrame::from_csv_str(input, &CsvOptions::default()).unwrap();
        assert_eq!(df.labels(), ["name", "n"]);
        assert_eq!(df.max("n").unwrap(), 2.0);

        let tabbed = "string\tint\nname\tn\nA\t5\n";
        let df = DataFrame::from_csv_str(tabbed, &CsvOptions::default()).unwrap();
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        let input = "string|string\na|b\nx,y|z\n";
        let df = DataFrame::from_csv_str(input, &CsvOptions::default().delimiter(b'|')).unwrap();
        assert_eq!(df.get_column("a").unwrap().values()[0], Value::from("x,y"));
    }

    #[test]
    fn test_short_row_fails_fast() {
        let input = "string,int\nname,n\nA,1\nB\nC,3\n";
        match DataFrame::from_csv_str(input, &CsvOptions::default()) {
            Err(FrameError::MalformedInput {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_fails_fast() {
        let input = "string,int\nname,n\nA,1,extra\n";
        assert!(matches!(
            DataFrame::from_csv_str(input, &CsvOptions::default()),
            Err(FrameError::MalformedInput { found: 3, .. })
        ));
    }

    #[test]
    fn test_missing_headers() {
        assert!(matches!(
            DataFrame::from_csv_str("", &CsvOptions::default()),
            Err(FrameError::MissingHeader { line: 1 })
        ));
        assert!(matches!(
            DataFrame::from_csv_str("string,int\n", &CsvOptions::default()),
            Err(FrameError::MissingHeader { line: 2 })
        ));
    }

    #[test]
    fn test_header_width_mismatch() {
        assert!(matches!(
            DataFrame::from_csv_str("string,int\nname\n", &CsvOptions::default()),
            Err(FrameError::MalformedHeader { types: 2, labels: 1 })
        ));
    }

    #[test]
    fn test_unknown_type_tag() {
        assert!(matches!(
            DataFrame::from_csv_str("string,money\nname,n\n", &CsvOptions::default()),
            Err(FrameError::UnknownColumnType { tag }) if tag == "money"
        ));
    }

    #[test]
    fn test_strict_types() {
        let input = "string,int\nname,n\nA,1\nB,two\n";
        match DataFrame::from_csv_str(input, &CsvOptions::default()) {
            Err(FrameError::TypeMismatch {
                line,
                column,
                expected,
                value,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(column, "n");
                assert_eq!(expected, ColumnType::Int);
                assert_eq!(value, "two");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }

        let lax = DataFrame::from_csv_str(input, &CsvOptions::default().strict_types(false)).unwrap();
        assert_eq!(lax.size().unwrap(), 2);
        assert!(matches!(lax.sum("n"), Err(FrameError::NotANumber { row: 1, .. })));
    }

    #[test]
    fn test_header_only_frame_has_zero_rows() {
        let df = DataFrame::from_csv_str("int\nn\n", &CsvOptions::default()).unwrap();
        assert_eq!(df.size().unwrap(), 0);
        assert_eq!(df.sum("n").unwrap(), 0.0);
        assert!(matches!(df.mean("n"), Err(FrameError::EmptyColumn(_))));
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let input = "int\nn\n# skipped\n4\n";
        let df = DataFrame::from_csv_str(input, &CsvOptions::default().comment(Some(b'#'))).unwrap();
        assert_eq!(df.size().unwrap(), 1);
    }

    #[test]
    fn test_options_from_config() {
        let opts: CsvOptions = serde_json::from_str(r#"{"delimiter": 59, "strict_types": false}"#).unwrap();
        assert_eq!(opts.delimiter, Some(b';'));
        assert!(!opts.strict_types);
        assert!(opts.trim);
        assert_eq!(opts.quote, b'"');
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DataFrame::from_csv("/definitely/not/here.csv").unwrap_err();
        assert!(err.is_io());
        assert!(matches!(err, FrameError::Io(_)));
    }

    #[test]
    fn test_header_failures_are_io_errors() {
        let opts = CsvOptions::default();
        for input in ["", "int\n", "int,int\nn\n", "money\nn\n"] {
            let err = DataFrame::from_csv_str(input, &opts).unwrap_err();
            assert!(err.is_io(), "{:?} should be an ingest failure", err);
        }

        let short = DataFrame::from_csv_str("int,int\na,b\n1\n", &opts).unwrap_err();
        assert!(!short.is_io());
        let typed = DataFrame::from_csv_str("int\na\nx\n", &opts).unwrap_err();
        assert!(!typed.is_io());
    }

    #[test]
    fn test_empty_header_label() {
        let err = DataFrame::from_csv_str("int,int\nn,\n1,2\n", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, FrameError::EmptyLabel { position: 1 }));
    }

    #[test]
    fn test_sniffing_skips_comment_lines() {
        let input = "# a, b, c\nstring;int\nname;n\nA;1\n";
        let opts = CsvOptions::default().comment(Some(b'#'));
        let df = DataFrame::from_csv_str(input, &opts).unwrap();
        assert_eq!(df.labels(), ["name", "n"]);
        assert_eq!(df.sum("n").unwrap(), 1.0);
    }
}
