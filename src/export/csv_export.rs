use csv::WriterBuilder;

use crate::api::{ChartConfiguration, DataValues, DatasetConfig};
use crate::error::{ChartError, ChartResult};

/// Writes one row per label with one column per dataset.
///
/// Missing values and undefined markers become empty cells. Floating bars are
/// written as `start..end`; x/y point datasets have no label rows and export
/// empty cells.
pub fn dataset_csv(labels: &[String], datasets: &[DatasetConfig]) -> ChartResult<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let header = std::iter::once("Label").chain(datasets.iter().map(|d| d.label.as_str()));
    writer.write_record(header).map_err(csv_error)?;

    for (row, label) in labels.iter().enumerate() {
        let mut record = Vec::with_capacity(datasets.len() + 1);
        record.push(label.clone());
        record.extend(datasets.iter().map(|dataset| cell(&dataset.data, row)));
        writer.write_record(&record).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChartError::Serialization(format!("failed to flush csv: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| ChartError::Serialization(format!("csv output is not utf-8: {e}")))
}

/// [`dataset_csv`] over a composed document's labels and datasets.
pub fn configuration_csv(config: &ChartConfiguration) -> ChartResult<String> {
    dataset_csv(&config.data.labels, &config.data.datasets)
}

fn cell(data: &DataValues, row: usize) -> String {
    match data {
        DataValues::Scalars(values) => values
            .get(row)
            .copied()
            .flatten()
            .map(|v| v.to_string())
            .unwrap_or_default(),
        DataValues::Ranges(values) => values
            .get(row)
            .copied()
            .flatten()
            .map(|[start, end]| format!("{start}..{end}"))
            .unwrap_or_default(),
        DataValues::Points(_) => String::new(),
    }
}

fn csv_error(e: csv::Error) -> ChartError {
    ChartError::Serialization(format!("failed to write csv record: {e}"))
}
