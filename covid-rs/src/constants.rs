///////////////////////////////////////////////////////////////////////////////
// Column names of the OWID COVID-19 dataset
///////////////////////////////////////////////////////////////////////////////

pub const LOCATION: &str = "location";
pub const DATE: &str = "date";
pub const ISO_CODE: &str = "iso_code";
pub const TOTAL_CASES: &str = "total_cases";
pub const TOTAL_DEATHS: &str = "total_deaths";
pub const NEW_CASES: &str = "new_cases";
pub const TOTAL_VACCINATIONS: &str = "total_vaccinations";
pub const PEOPLE_VACCINATED_PER_HUNDRED: &str = "people_vaccinated_per_hundred";
pub const DEATH_RATE: &str = "death_rate";

/// Columns that must be present for the report to run at all.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    LOCATION,
    DATE,
    TOTAL_CASES,
    TOTAL_DEATHS,
    NEW_CASES,
    TOTAL_VACCINATIONS,
];

///////////////////////////////////////////////////////////////////////////////
// Cleaning defaults
///////////////////////////////////////////////////////////////////////////////

pub const PLACEHOLDER: &str = "Unknown";

/// Cell contents interpreted as a missing value.
pub const MISSING_MARKERS: [&str; 11] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-nan", "null", "NULL", "None", "#N/A",
];

/// Accepted date layouts, tried in order. Layouts carrying a time of day keep
/// only the date part.
pub const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

///////////////////////////////////////////////////////////////////////////////
// Report defaults
///////////////////////////////////////////////////////////////////////////////

pub const DATA_PATH: &str = "owid-covid-data.csv";
pub const CONFIG_PATH: &str = "covid-eda.toml";
/// Entities charted by default. Deliberately uses "United States", the
/// location name found in the dataset, instead of the "USA" abbreviation of
/// the list ['Kenya', 'USA', 'India'], which matches no OWID row.
pub const ENTITIES: [&str; 3] = ["Kenya", "United States", "India"];
pub const HEAD_ROWS: usize = 5;
pub const TOP_N: usize = 10;
pub const PLOT_WIDTH: usize = 72;
pub const PLOT_HEIGHT: usize = 18;
