use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::Path;

use super::{MaterialRecord, MaterialTable};

pub const NAME_COLUMNS: [&str; 2] = ["Name", "Nombre"];
pub const ENGLISH_NAME_COLUMN: &str = "Name(EN)";
pub const DENSITY_COLUMN: &str = "Densidad (kg/m3)";
pub const CONDUCTIVITY_COLUMN: &str = "Conductividad (W/m-K)";
pub const SPECIFIC_HEAT_COLUMN: &str = "Calor Específico (J/kg-K)";
pub const ROUGHNESS_COLUMN: &str = "Rugosidad superficial";
pub const TYPE_COLUMN: &str = "Tipo";

/// Raw header + rows, shared by the spreadsheet and CSV readers.
struct RawSheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

pub fn load(path: &Path) -> Result<MaterialTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let sheet = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path)?,
        "csv" => read_csv(path)?,
        other => bail!(
            "Unsupported dataset format '{}' for {} (expected .xlsx, .xls, .ods or .csv)",
            other,
            path.display()
        ),
    };

    let table = parse_sheet(sheet)
        .with_context(|| format!("Invalid material dataset {}", path.display()))?;
    log::info!("Loaded {} materials from {}", table.len(), path.display());
    Ok(table)
}

fn read_workbook(path: &Path) -> Result<RawSheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Could not open dataset {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("Dataset {} has no worksheets", path.display()))?
        .with_context(|| format!("Could not read first worksheet of {}", path.display()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("Dataset {} is empty", path.display()))?;

    Ok(RawSheet {
        headers,
        rows: rows.collect(),
    })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<RawSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Could not open dataset {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Could not read header row of {}", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Malformed CSV row in {}", path.display()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(RawSheet { headers, rows })
}

struct Columns {
    name: usize,
    english_name: usize,
    density: usize,
    conductivity: usize,
    specific_heat: usize,
    roughness: usize,
    material_type: usize,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self> {
        // A repeated header resolves to its first column.
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            index.entry(header.trim()).or_insert(i);
        }

        let find = |column: &str| {
            index
                .get(column)
                .copied()
                .ok_or_else(|| anyhow!("Missing required column '{}'", column))
        };

        let name = NAME_COLUMNS
            .iter()
            .find_map(|column| index.get(column).copied())
            .ok_or_else(|| anyhow!("Missing required column '{}'", NAME_COLUMNS.join("' or '")))?;

        Ok(Columns {
            name,
            english_name: find(ENGLISH_NAME_COLUMN)?,
            density: find(DENSITY_COLUMN)?,
            conductivity: find(CONDUCTIVITY_COLUMN)?,
            specific_heat: find(SPECIFIC_HEAT_COLUMN)?,
            roughness: find(ROUGHNESS_COLUMN)?,
            material_type: find(TYPE_COLUMN)?,
        })
    }
}

fn parse_sheet(sheet: RawSheet) -> Result<MaterialTable> {
    let columns = Columns::locate(&sheet.headers)?;
    let mut records = Vec::with_capacity(sheet.rows.len());

    // Row numbers are 1-based and count the header row, as a spreadsheet shows them.
    for (offset, row) in sheet.rows.iter().enumerate() {
        let row_number = offset + 2;
        let text = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

        let name = text(columns.name);
        if name.is_empty() {
            log::debug!("Skipping row {} without a material name", row_number);
            continue;
        }

        let number = |i: usize, column: &str| parse_positive(text(i), column, row_number);

        records.push(MaterialRecord {
            name: name.to_string(),
            english_name: text(columns.english_name).to_string(),
            density: number(columns.density, DENSITY_COLUMN)?,
            conductivity: number(columns.conductivity, CONDUCTIVITY_COLUMN)?,
            specific_heat: number(columns.specific_heat, SPECIFIC_HEAT_COLUMN)?,
            roughness: text(columns.roughness).to_string(),
            material_type: text(columns.material_type).to_string(),
        });
    }

    Ok(MaterialTable::new(records))
}

fn parse_positive(value: &str, column: &str, row: usize) -> Result<f64> {
    let parsed: f64 = value
        .parse()
        .with_context(|| format!("Row {}: '{}' is not a number in column '{}'", row, value, column))?;

    if !parsed.is_finite() || parsed <= 0.0 {
        bail!("Row {}: column '{}' must be positive, got {}", row, column, value);
    }
    Ok(parsed)
}
