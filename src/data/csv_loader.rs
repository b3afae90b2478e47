// ============================================================
// Layer 4 - CSV Loader
// ============================================================
// Parses an uploaded or bundled CSV into a Dataset.
//
// Column detection (case-insensitive, first match wins):
//   text column:  text  > message > sms
//   label column: label > category
//
// Row handling:
//   - the text cell is trimmed; rows with empty text are skipped
//   - the label cell is trimmed and lowercased
//   - "spam", "1", "true" mean spam
//   - anything else is decided by UnrecognizedLabelPolicy
//
// Invalid UTF-8 is replaced rather than rejected, so a file
// with a few bad bytes still trains.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fmt,
    fs,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::domain::error::{DatasetError, ServiceError};
use crate::domain::sample::{Dataset, Label, Sample};
use crate::domain::traits::DatasetSource;

/// Header names accepted for the message text, in priority order.
pub const TEXT_COLUMNS: [&str; 3] = ["text", "message", "sms"];

/// Header names accepted for the class label, in priority order.
pub const LABEL_COLUMNS: [&str; 2] = ["label", "category"];

/// Normalised label values that mean spam.
pub const SPAM_VALUES: [&str; 3] = ["spam", "1", "true"];

/// Normalised label values that mean ham under the strict policy.
pub const HAM_VALUES: [&str; 3] = ["ham", "0", "false"];

// ─── Unrecognized Label Policy ────────────────────────────────────────────────
/// What to do with a row whose label is not a known spam value.
///
///   Ham  → treat it as ham (the default, lenient behaviour)
///   Skip → keep only rows labelled with a known ham value,
///          drop the rest like rows with empty text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedLabelPolicy {
    #[default]
    Ham,
    Skip,
}

impl UnrecognizedLabelPolicy {
    /// Map a raw label cell to a Label, or None if the row should be dropped.
    pub fn resolve(self, raw: &str) -> Option<Label> {
        let value = raw.trim().to_lowercase();

        if SPAM_VALUES.contains(&value.as_str()) {
            return Some(Label::Spam);
        }

        match self {
            UnrecognizedLabelPolicy::Ham => Some(Label::Ham),
            UnrecognizedLabelPolicy::Skip if HAM_VALUES.contains(&value.as_str()) => {
                Some(Label::Ham)
            }
            UnrecognizedLabelPolicy::Skip => None,
        }
    }
}

impl FromStr for UnrecognizedLabelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ham" => Ok(Self::Ham),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown label policy '{other}', expected 'ham' or 'skip'"
            )),
        }
    }
}

impl fmt::Display for UnrecognizedLabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ham => f.write_str("ham"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

// ─── CsvNormalizer ────────────────────────────────────────────────────────────
/// Converts raw CSV bytes into a validated Dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvNormalizer {
    policy: UnrecognizedLabelPolicy,
}

impl CsvNormalizer {
    pub fn new(policy: UnrecognizedLabelPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnrecognizedLabelPolicy {
        self.policy
    }

    /// Parse CSV bytes into a Dataset.
    ///
    /// Errors, in the order they are checked:
    ///   1. no data rows           → DatasetError::Empty
    ///   2. no text-like column    → DatasetError::MissingTextColumn
    ///   3. no label-like column   → DatasetError::MissingLabelColumn
    ///   4. every row filtered out → DatasetError::NoValidRows
    pub fn normalize(&self, bytes: &[u8]) -> Result<Dataset, DatasetError> {
        let decoded = String::from_utf8_lossy(bytes);
        let content: &str = &decoded;
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

        // flexible: short or long rows are tolerated, missing cells read as ""
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DatasetError::Malformed(e.to_string()))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect();

        let rows: Vec<StringRecord> = reader
            .records()
            .collect::<Result<_, _>>()
            .map_err(|e| DatasetError::Malformed(e.to_string()))?;

        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let text_idx = find_column(&headers, &TEXT_COLUMNS)
            .ok_or(DatasetError::MissingTextColumn)?;
        let label_idx = find_column(&headers, &LABEL_COLUMNS)
            .ok_or(DatasetError::MissingLabelColumn)?;

        tracing::debug!(
            "CSV columns: text='{}' label='{}' ({} rows)",
            headers[text_idx],
            headers[label_idx],
            rows.len()
        );

        let mut samples = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;

        for row in &rows {
            let text = row.get(text_idx).unwrap_or("").trim();
            if text.is_empty() {
                skipped += 1;
                continue;
            }

            match self.policy.resolve(row.get(label_idx).unwrap_or("")) {
                Some(label) => samples.push(Sample::new(text, label)),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} of {} CSV rows", skipped, rows.len());
        }

        Dataset::new(samples).ok_or(DatasetError::NoValidRows)
    }
}

/// Index of the first candidate header present, honouring candidate order.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h == c))
}

// ─── Dataset Sources ──────────────────────────────────────────────────────────

/// A CSV that is already in memory, e.g. a multipart upload.
pub struct CsvBytes {
    bytes: Vec<u8>,
    normalizer: CsvNormalizer,
}

impl CsvBytes {
    pub fn new(bytes: impl Into<Vec<u8>>, normalizer: CsvNormalizer) -> Self {
        Self {
            bytes: bytes.into(),
            normalizer,
        }
    }
}

impl DatasetSource for CsvBytes {
    fn load_dataset(&self) -> Result<Dataset, ServiceError> {
        Ok(self.normalizer.normalize(&self.bytes)?)
    }
}

/// The demo CSV shipped alongside the server.
pub struct DemoDataset {
    path: PathBuf,
    normalizer: CsvNormalizer,
}

impl DemoDataset {
    pub fn new(path: impl Into<PathBuf>, normalizer: CsvNormalizer) -> Self {
        Self {
            path: path.into(),
            normalizer,
        }
    }
}

impl DatasetSource for DemoDataset {
    fn load_dataset(&self) -> Result<Dataset, ServiceError> {
        if !self.path.is_file() {
            tracing::warn!("Demo dataset '{}' does not exist", self.path.display());
            return Err(ServiceError::DemoDatasetMissing);
        }

        let bytes = fs::read(&self.path)
            .with_context(|| format!("Cannot read demo dataset '{}'", self.path.display()))?;

        Ok(self.normalizer.normalize(&bytes)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(csv: &str) -> Result<Dataset, DatasetError> {
        CsvNormalizer::default().normalize(csv.as_bytes())
    }

    fn pairs(ds: &Dataset) -> Vec<(&str, u8)> {
        ds.samples()
            .iter()
            .map(|s| (s.text.as_str(), s.label.as_u8()))
            .collect()
    }

    #[test]
    fn test_label_then_text_columns() {
        let ds = normalize("label,text\nspam,\"win money now\"\nham,\"meeting at noon\"").unwrap();
        assert_eq!(pairs(&ds), vec![("win money now", 1), ("meeting at noon", 0)]);
    }

    #[test]
    fn test_header_only_is_empty() {
        assert_eq!(normalize("label,text\n"), Err(DatasetError::Empty));
        assert_eq!(normalize(""), Err(DatasetError::Empty));
    }

    #[test]
    fn test_missing_columns() {
        let err = normalize("foo,bar\n1,2\n").unwrap_err();
        assert!(err.is_missing_column());

        assert_eq!(
            normalize("label,body\nspam,hi there\n"),
            Err(DatasetError::MissingTextColumn)
        );
        assert_eq!(
            normalize("text,kind\nhi there,spam\n"),
            Err(DatasetError::MissingLabelColumn)
        );
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let ds = normalize("Category,SMS\nSPAM,Claim your prize\n").unwrap();
        assert_eq!(pairs(&ds), vec![("Claim your prize", 1)]);
    }

    #[test]
    fn test_column_priority() {
        // "label" beats "category", "text" beats "message"
        let csv = "category,message,label,text\nspam,from message,ham,from text\n";
        let ds = normalize(csv).unwrap();
        assert_eq!(pairs(&ds), vec![("from text", 0)]);

        // "message" beats "sms"
        let ds = normalize("sms,label,message\nfrom sms,spam,from message\n").unwrap();
        assert_eq!(pairs(&ds), vec![("from message", 1)]);
    }

    #[test]
    fn test_label_normalisation() {
        let csv = "label,text\n\
                   Spam,a1\n\
                   1,a2\n\
                   TRUE,a3\n\
                   \" spam \",a4\n\
                   ham,b1\n\
                   0,b2\n\
                   junk,b3\n\
                   ,b4\n";
        let ds = normalize(csv).unwrap();
        let labels: Vec<u8> = ds.labels().iter().map(|l| l.as_u8()).collect();
        assert_eq!(labels, vec![1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_skips_blank_text_and_trims() {
        let csv = "label,text\nspam,\"   \"\nham,\"  hello there  \"\nspam,\n";
        let ds = normalize(csv).unwrap();
        assert_eq!(pairs(&ds), vec![("hello there", 0)]);
    }

    #[test]
    fn test_all_rows_filtered_is_no_valid_rows() {
        assert_eq!(
            normalize("label,text\nspam,\nham,\"  \"\n"),
            Err(DatasetError::NoValidRows)
        );
    }

    #[test]
    fn test_skip_policy_drops_unknown_labels() {
        let normalizer = CsvNormalizer::new(UnrecognizedLabelPolicy::Skip);
        let csv = "label,text\nspam,a1\nham,b1\nmaybe,c1\nfalse,b2\n";
        let ds = normalizer.normalize(csv.as_bytes()).unwrap();
        assert_eq!(ds.texts(), vec!["a1", "b1", "b2"]);

        let only_unknown = "label,text\nmaybe,c1\n";
        assert_eq!(
            normalizer.normalize(only_unknown.as_bytes()),
            Err(DatasetError::NoValidRows)
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("ham".parse::<UnrecognizedLabelPolicy>(), Ok(UnrecognizedLabelPolicy::Ham));
        assert_eq!("SKIP".parse::<UnrecognizedLabelPolicy>(), Ok(UnrecognizedLabelPolicy::Skip));
        assert!("reject".parse::<UnrecognizedLabelPolicy>().is_err());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let csv = "label,text,extra\nspam,win a car,x\nham,lunch?,y\nspam,free entry,z\n";
        assert_eq!(normalize(csv).unwrap(), normalize(csv).unwrap());
    }

    #[test]
    fn test_labels_and_texts_stay_parallel() {
        let csv = "text,label\none two,spam\n,ham\nthree four,weird\nfive six,1\n";
        let ds = normalize(csv).unwrap();
        assert_eq!(ds.texts().len(), ds.labels().len());
        assert!(ds.labels().iter().all(|l| l.as_u8() <= 1));
    }

    #[test]
    fn test_bom_and_padded_headers() {
        let csv = "\u{FEFF} Label , Text \nspam,hello\n";
        let ds = normalize(csv).unwrap();
        assert_eq!(pairs(&ds), vec![("hello", 1)]);
    }

    #[test]
    fn test_short_rows_read_as_empty_cells() {
        // second row has no label cell at all → ham
        let ds = normalize("text,label\nhello there,spam\ngood morning\n").unwrap();
        assert_eq!(pairs(&ds), vec![("hello there", 1), ("good morning", 0)]);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let mut bytes = b"label,text\nspam,caf".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(b" prize\n");
        let ds = CsvNormalizer::default().normalize(&bytes).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.texts()[0].starts_with("caf"));
    }

    #[test]
    fn test_fifty_rows_two_blank() {
        let mut csv = String::from("label,text\n");
        for i in 0..50 {
            if i == 10 || i == 30 {
                csv.push_str("spam,\n");
            } else {
                csv.push_str(&format!("ham,message number {i}\n"));
            }
        }
        assert_eq!(normalize(&csv).unwrap().len(), 48);
    }

    #[test]
    fn test_demo_dataset_missing_file() {
        let source = DemoDataset::new("/definitely/not/here.csv", CsvNormalizer::default());
        assert!(matches!(
            source.load_dataset(),
            Err(ServiceError::DemoDatasetMissing)
        ));
    }

    #[test]
    fn test_csv_bytes_source_maps_to_validation() {
        let source = CsvBytes::new("label,text\n", CsvNormalizer::default());
        match source.load_dataset() {
            Err(ServiceError::Validation(msg)) => {
                assert_eq!(msg, "CSV file is empty or has no rows.")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
