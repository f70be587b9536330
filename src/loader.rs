use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use flate2::bufread::GzDecoder;

use crate::sweep::IvPoint;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to open the sweep file")]
    Io(#[from] std::io::Error),
    #[error("Failed to read the CSV records")]
    Csv(#[from] csv::Error),
    #[error("No numeric (voltage, current) rows found in {0:?}")]
    NoData(PathBuf),
}
type Result<T> = std::result::Result<T, LoadError>;

/// Loads raw I-V samples from a delimited text file
///
/// The file is expected to hold one sample per row, voltage in the first
/// column and current in the second; a header row, blank lines and stray
/// text rows are skipped. Gzip-compressed files (`.gz`) are decompressed on
/// the fly. The returned samples are raw: sorting, finiteness filtering and
/// deduplication belong to [`Sweep::prepare`](crate::sweep::Sweep::prepare).
pub struct SweepLoader {
    path: PathBuf,
    delimiter: Option<u8>,
    voltage_range: (f64, f64),
}
impl Default for SweepLoader {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sweep.csv"),
            delimiter: None,
            voltage_range: (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}
impl SweepLoader {
    pub fn data_path<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..self
        }
    }
    /// Overrides the sniffed field delimiter
    pub fn delimiter(self, delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
            ..self
        }
    }
    pub fn start_voltage(self, voltage: f64) -> Self {
        Self {
            voltage_range: (voltage, self.voltage_range.1),
            ..self
        }
    }
    pub fn end_voltage(self, voltage: f64) -> Self {
        Self {
            voltage_range: (self.voltage_range.0, voltage),
            ..self
        }
    }
    pub fn load(self) -> Result<Vec<IvPoint>> {
        log::info!("Loading {:?}...", self.path);
        let file = File::open(&self.path)?;
        let buf = BufReader::new(file);
        let mut contents = String::new();
        if self.path.extension().map_or(false, |ext| ext == "gz") {
            GzDecoder::new(buf).read_to_string(&mut contents)?;
        } else {
            let mut buf = buf;
            buf.read_to_string(&mut contents)?;
        }
        let points = self.parse(&contents)?;
        if points.is_empty() {
            return Err(LoadError::NoData(self.path));
        }
        log::info!("... {} raw point(s)", points.len());
        Ok(points)
    }
    fn parse(&self, contents: &str) -> Result<Vec<IvPoint>> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| sniff_delimiter(contents));
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut points = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let mut fields = record.iter().filter(|field| !field.is_empty());
            let (Some(v), Some(i)) = (fields.next(), fields.next()) else {
                continue;
            };
            // a row whose first two columns are not numbers is a header or
            // a comment
            let (Ok(voltage), Ok(current)) = (v.parse::<f64>(), i.parse::<f64>()) else {
                log::debug!("skipping row {:?}", record);
                continue;
            };
            if voltage < self.voltage_range.0 || voltage > self.voltage_range.1 {
                continue;
            }
            points.push(IvPoint::new(voltage, current));
        }
        Ok(points)
    }
}

/// Picks the field delimiter from the first non-blank line: comma, then
/// semicolon, then tab, defaulting to comma
fn sniff_delimiter(contents: &str) -> u8 {
    let Some(line) = contents.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };
    if line.contains(',') {
        b','
    } else if line.contains(';') {
        b';'
    } else if line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}
