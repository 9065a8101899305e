use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanySettings, DateRange, MaintenanceHold, MultiDayBooking, SingleDayBooking, StaffRecord,
};
use crate::repository::dataset::{ForecastInputs, HotelDataset};
use crate::repository::traits::{BookingRepository, SettingsRepository, StaffRepository};

/// Repository backed by a single pretty-printed JSON document.
///
/// The file is read on every query and rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    file_path: PathBuf,
}

impl JsonFileRepository {
    /// Opens the document at `path`, creating it with `seed` settings if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P, seed: CompanySettings) -> EngineResult<Self> {
        let repo = JsonFileRepository {
            file_path: path.as_ref().to_path_buf(),
        };

        if !repo.file_path.exists() {
            if let Some(parent) = repo.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| repo.storage_error(e))?;
            }
            debug!(path = %repo.file_path.display(), "Creating data file");
            repo.write_dataset(&HotelDataset::with_settings(seed))?;
        }

        Ok(repo)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the whole document.
    pub fn read_dataset(&self) -> EngineResult<HotelDataset> {
        let file = File::open(&self.file_path).map_err(|e| self.storage_error(e))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| self.storage_error(e))
    }

    /// Replaces the whole document.
    ///
    /// The new document is written to a sibling `.tmp` file and renamed over
    /// the original, so readers see either the old or the new version.
    pub fn write_dataset(&self, data: &HotelDataset) -> EngineResult<()> {
        let tmp_path = self.tmp_path();
        if let Err(err) = self.write_to(&tmp_path, data) {
            // The original document is untouched.
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        fs::rename(&tmp_path, &self.file_path).map_err(|e| self.storage_error(e))
    }

    fn write_to(&self, path: &Path, data: &HotelDataset) -> EngineResult<()> {
        let file = File::create(path).map_err(|e| self.storage_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data).map_err(|e| self.storage_error(e))?;
        writer.flush().map_err(|e| self.storage_error(e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.storage_error(e))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn storage_error(&self, err: impl std::fmt::Display) -> EngineError {
        EngineError::Storage {
            path: self.file_path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl BookingRepository for JsonFileRepository {
    fn list_multi_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MultiDayBooking>> {
        Ok(self.read_dataset()?.multi_day_in_range(range))
    }

    fn list_single_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<SingleDayBooking>> {
        Ok(self.read_dataset()?.single_day_in_range(range))
    }

    fn list_maintenance_holds_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MaintenanceHold>> {
        Ok(self.read_dataset()?.holds_in_range(range))
    }

    fn load_forecast_inputs(&self, range: &DateRange) -> EngineResult<ForecastInputs> {
        Ok(self.read_dataset()?.forecast_inputs(range))
    }
}

impl StaffRepository for JsonFileRepository {
    fn load_staff_roster(&self) -> EngineResult<Vec<StaffRecord>> {
        Ok(self.read_dataset()?.staff)
    }
}

impl SettingsRepository for JsonFileRepository {
    fn load_settings(&self) -> EngineResult<CompanySettings> {
        Ok(self.read_dataset()?.settings)
    }

    fn save_settings(&self, settings: &CompanySettings) -> EngineResult<()> {
        let mut data = self.read_dataset()?;
        data.settings = settings.clone();
        self.write_dataset(&data)
    }
}
