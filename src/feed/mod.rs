use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::warn;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum Source {
    #[default]
    Empty,
    Zip(PathBuf),
    /// Named CSV contents held in memory. Used by tests and by callers that
    /// already have the feed files unpacked.
    Memory(HashMap<String, String>),
}

/// A timetable feed: one CSV file per record kind, either inside a zip
/// archive or handed over in memory. Rows stream through a callback so the
/// caller decides how to store them.
#[derive(Default)]
pub struct Feed {
    config: Config,
    source: Source,
}

impl Feed {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: self::Config) -> Self {
        self.config = config;
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.source = Source::Zip(path);
        self
    }

    pub fn from_memory(mut self, files: HashMap<String, String>) -> Self {
        self.source = Source::Memory(files);
        self
    }

    pub fn stream_stations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, StationRow)),
    {
        self.stream::<StationRow, F>(&self.config.stations_file_name, f)
    }

    pub fn stream_lines<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, LineRow)),
    {
        self.stream::<LineRow, F>(&self.config.lines_file_name, f)
    }

    pub fn stream_trains<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, TrainRow)),
    {
        self.stream::<TrainRow, F>(&self.config.trains_file_name, f)
    }

    pub fn stream_schedule<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, ScheduleRow)),
    {
        self.stream::<ScheduleRow, F>(&self.config.schedule_file_name, f)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), self::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.source {
            Source::Empty => Ok(()),
            Source::Zip(path) => stream_from_zip::<T, F>(path, file_name, f),
            Source::Memory(files) => {
                let contents = files
                    .get(file_name)
                    .ok_or(self::Error::FileNotFound(file_name.to_string()))?;
                stream_csv::<T, F, _>(contents.as_bytes(), file_name, f)
            }
        }
    }
}

fn stream_from_zip<T, F>(zip_path: &PathBuf, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, file_name)?;
    stream_csv(file, file_name, f)
}

fn stream_csv<T, F, R>(reader: R, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
    R: Read,
{
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .filter_map(|row| match row {
            Ok(row) => Some(row),
            Err(err) => {
                warn!("Dropping malformed row in {file_name}: {err}");
                None
            }
        })
        .enumerate()
        .for_each(f);
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
