use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::domain::{CropScheduleBase, ScheduleSpan};
use crate::reference::{read_file, ReferenceDataError};

/// Crop used whenever a requested crop has no schedule of its own.
pub const DEFAULT_CROP: &str = "rice";

/// Baseline schedules keyed by lower-cased crop name, with a designated fallback crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropScheduleTable {
    entries: BTreeMap<String, CropScheduleBase>,
    default_crop: String,
    default_base: CropScheduleBase,
}

/// Result of resolving a requested crop against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropLookup<'a> {
    pub crop: &'a str,
    pub base: &'a CropScheduleBase,
    pub used_default_crop: bool,
}

impl CropScheduleTable {
    pub fn new<I>(entries: I, default_crop: &str) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = (String, CropScheduleBase)>,
    {
        let mut table = BTreeMap::new();
        for (crop, base) in entries {
            let key = crop_key(&crop);
            if table.insert(key.clone(), base).is_some() {
                return Err(ReferenceDataError::Duplicate {
                    table: "crop schedule table",
                    key,
                });
            }
        }

        if table.is_empty() {
            return Err(ReferenceDataError::Empty {
                table: "crop schedule table",
            });
        }
        let default_crop = crop_key(default_crop);
        let Some(default_base) = table.get(&default_crop).cloned() else {
            return Err(ReferenceDataError::MissingDefaultCrop(default_crop));
        };

        Ok(Self {
            entries: table,
            default_crop,
            default_base,
        })
    }

    /// Read `crop,base_frequency_days,water_amount_cm,season,tips` rows. `rice` is the default.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ReferenceDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for record in csv_reader.deserialize::<CropScheduleRow>() {
            let row = record?;
            entries.push((
                row.crop,
                CropScheduleBase {
                    base_frequency_days: row.base_frequency_days,
                    water_amount_cm: row.water_amount_cm,
                    season: row.season,
                    tips: row.tips.unwrap_or_default(),
                },
            ));
        }

        Self::new(entries, DEFAULT_CROP)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let table = Self::from_csv_reader(read_file(path)?)?;
        info!(path = %path.display(), crops = table.len(), "loaded crop schedule table");
        Ok(table)
    }

    /// Schedules for the crops covered by the irrigation alert service.
    pub fn builtin() -> Self {
        let range = |low, high| ScheduleSpan::Range { low, high };
        let base = |frequency, water, season: &str, tips: &str| CropScheduleBase {
            base_frequency_days: frequency,
            water_amount_cm: water,
            season: season.to_string(),
            tips: tips.to_string(),
        };

        let rice = base(
            range(5, 7),
            range(80, 100),
            "Kharif",
            "Maintain 5-10 cm standing water",
        );
        let entries = BTreeMap::from([
            (DEFAULT_CROP.to_string(), rice.clone()),
            (
                "wheat".to_string(),
                base(
                    range(21, 28),
                    range(40, 60),
                    "Rabi",
                    "First irrigation 21 days after sowing",
                ),
            ),
            (
                "cotton".to_string(),
                base(
                    range(10, 15),
                    range(60, 80),
                    "Kharif",
                    "Reduce frequency during monsoon",
                ),
            ),
            (
                "sugarcane".to_string(),
                base(
                    ScheduleSpan::Single(10),
                    range(120, 150),
                    "Year-round",
                    "Heavy water requirements",
                ),
            ),
            (
                "corn".to_string(),
                base(
                    range(7, 10),
                    range(50, 60),
                    "Kharif",
                    "Critical at silking stage",
                ),
            ),
        ]);

        Self {
            entries,
            default_crop: DEFAULT_CROP.to_string(),
            default_base: rice,
        }
    }

    /// Process-wide built-in table, built on first use.
    pub fn shared_builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<CropScheduleTable>> = OnceLock::new();
        BUILTIN.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    pub fn get(&self, crop: &str) -> Option<&CropScheduleBase> {
        self.entries.get(&crop_key(crop))
    }

    /// Resolve `crop`, falling back to the default crop when it is unknown.
    pub fn resolve(&self, crop: &str) -> CropLookup<'_> {
        if let Some((crop, base)) = self.entries.get_key_value(&crop_key(crop)) {
            return CropLookup {
                crop,
                base,
                used_default_crop: false,
            };
        }

        CropLookup {
            crop: &self.default_crop,
            base: &self.default_base,
            used_default_crop: true,
        }
    }

    pub fn default_crop(&self) -> &str {
        &self.default_crop
    }

    pub fn crops(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CropScheduleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn crop_key(crop: &str) -> String {
    crop.trim().to_lowercase()
}

#[derive(Debug, Deserialize)]
struct CropScheduleRow {
    crop: String,
    base_frequency_days: ScheduleSpan,
    water_amount_cm: ScheduleSpan,
    season: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tips: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
