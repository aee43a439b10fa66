//! Reading and writing `.jsonocel` files.
use std::ffi::OsString;
use std::fs::File;
use std::io::{
    BufReader,
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    Result,
};
use ocg_core::ocel::{
    OcelLog,
    JSONOCEL_EXTENSION,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{
    debug,
    instrument,
};

/// One level of JSON indentation.
const INDENT: &[u8] = b"    ";

/// `filename` with `.jsonocel` appended, unless it already ends in `.jsonocel`.
#[must_use]
pub fn jsonocel_path(filename: &Path) -> PathBuf {
    if filename.extension().is_some_and(|ext| ext == JSONOCEL_EXTENSION) {
        return filename.to_path_buf();
    }

    let mut name = OsString::from(filename.as_os_str());
    name.push(".");
    name.push(JSONOCEL_EXTENSION);
    PathBuf::from(name)
}

/// Write `log` as indented JSON to `filename` (see [`jsonocel_path`]) and return the path written.
///
/// The file is closed on every exit path; a failed write leaves a partial file behind and returns
/// the underlying I/O error.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
#[instrument(skip(log), fields(events = log.events.len(), objects = log.objects.len()))]
pub fn save_ocel_log(log: &OcelLog, filename: &Path) -> Result<PathBuf> {
    let path = jsonocel_path(filename);
    let file = File::create(&path).with_context(|| format!("could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    log.serialize(&mut serializer)
        .with_context(|| format!("could not write {}", path.display()))?;
    writer.flush().with_context(|| format!("could not write {}", path.display()))?;

    debug!("OCEL log written to: {}", path.display());
    Ok(path)
}

/// Read a log previously written by [`save_ocel_log`].
///
/// # Errors
///
/// Fails if the file cannot be opened or is not a valid OCEL log.
#[instrument]
pub fn load_ocel_log(path: &Path) -> Result<OcelLog> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("could not parse {}", path.display()))
}
