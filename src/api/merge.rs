use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace, warn};

use crate::core::types::parse_instant;
use crate::core::{AxisKind, Dataset, PointShape};
use crate::error::{ChartError, ChartResult};
use crate::style::{self, Palette};

use super::composer::ensure_palette_covers;
use super::document::{ChartConfiguration, ColorValue, DataValues, DatasetConfig, ScaleType};

const PRIMARY_AXIS_IDS: [&str; 3] = ["x", "y", "r"];

/// Merges configurations of the same wire type into one document.
///
/// The first configuration provides options and style. Labels are unioned in
/// first-seen order, or chronologically when the `x` scale is a time scale,
/// and every dataset is re-aligned against the union, with `null` where it has
/// no value. A secondary y axis whose id is already taken gets the next free
/// `yN` id and its datasets follow it.
///
/// Single-color datasets appended from later configurations are recolored
/// from the first configuration's palette at their position in the merged
/// document. Running past the end of that palette is
/// [`ChartError::PaletteExhausted`].
pub fn merge_configurations(configs: &[ChartConfiguration]) -> ChartResult<ChartConfiguration> {
    let Some((first, rest)) = configs.split_first() else {
        return Err(ChartError::EmptyInput);
    };
    if rest.is_empty() {
        return Ok(first.clone());
    }
    for (offset, config) in rest.iter().enumerate() {
        if config.kind != first.kind {
            return Err(ChartError::IncompatibleMerge {
                expected: first.kind.to_string(),
                found: config.kind.to_string(),
                index: offset + 1,
            });
        }
    }

    let mut labels: Vec<String> = configs
        .iter()
        .flat_map(|config| config.data.labels.iter().map(String::as_str))
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect();
    if configs.iter().any(has_time_axis) {
        labels.sort_by_key(|label| parse_instant(label));
    }

    let palette = first
        .style
        .as_ref()
        .map(|binding| style::palette(&binding.palette))
        .transpose()?;

    let mut merged = first.clone();
    merged.data.labels = labels;
    merged.data.datasets = realigned(first, &merged.data.labels);

    for (offset, config) in rest.iter().enumerate() {
        let index = offset + 1;
        let mut renamed: IndexMap<&str, String> = IndexMap::new();
        for (id, scale) in &config.options.scales {
            if !merged.options.scales.contains_key(id) {
                merged.options.scales.insert(id.clone(), scale.clone());
                continue;
            }
            if PRIMARY_AXIS_IDS.contains(&id.as_str()) {
                continue;
            }
            let fresh = next_free_axis_id(&merged.options.scales);
            warn!(
                axis = %id,
                renamed = %fresh,
                configuration = index,
                "secondary axis id collides, renumbering"
            );
            merged.options.scales.insert(fresh.clone(), scale.clone());
            renamed.insert(id.as_str(), fresh);
        }

        for mut dataset in realigned(config, &merged.data.labels) {
            if let Some(axis) = dataset.y_axis_id.as_deref() {
                if let Some(fresh) = renamed.get(axis) {
                    dataset.y_axis_id = Some(fresh.clone());
                }
            }
            if let Some(palette) = palette {
                recolor(&mut dataset, palette, merged.data.datasets.len())?;
            }
            merged.data.datasets.push(dataset);
        }

        if let Some(plugin) = &config.options.plugins.annotation {
            let target = merged
                .options
                .plugins
                .annotation
                .get_or_insert_with(Default::default);
            for annotation in plugin.annotations.values() {
                let key = format!("annotation{}", target.annotations.len());
                target.annotations.insert(key, annotation.clone());
            }
        }
    }

    debug!(
        configurations = configs.len(),
        labels = merged.data.labels.len(),
        datasets = merged.data.datasets.len(),
        "merged chart configurations"
    );
    Ok(merged)
}

/// Concatenates dataset groups, keeping every series separate.
///
/// All datasets must share one point shape and one axis kind.
pub fn merge_datasets(groups: &[Vec<Dataset>]) -> ChartResult<Vec<Dataset>> {
    let mut merged: Vec<Dataset> = Vec::with_capacity(groups.iter().map(Vec::len).sum());
    let mut expected: Option<(PointShape, AxisKind)> = None;

    for (index, group) in groups.iter().enumerate() {
        for dataset in group {
            let Some(shape) = dataset.series.shape() else {
                return Err(ChartError::EmptyDataset {
                    dataset: dataset.name.clone(),
                });
            };
            let found = (shape, dataset.series.axis());
            match expected {
                None => expected = Some(found),
                Some(wanted) if wanted != found => {
                    return Err(ChartError::IncompatibleMerge {
                        expected: describe(wanted),
                        found: describe(found),
                        index,
                    });
                }
                Some(_) => {}
            }
            merged.push(dataset.clone());
        }
    }

    if merged.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    debug!(
        groups = groups.len(),
        datasets = merged.len(),
        "merged dataset groups"
    );
    Ok(merged)
}

fn describe((shape, axis): (PointShape, AxisKind)) -> String {
    let shape = match shape {
        PointShape::Value => "value",
        PointShape::Xy => "xy",
        PointShape::Ohlc => "ohlc",
    };
    let axis = match axis {
        AxisKind::Category => "category",
        AxisKind::Temporal => "temporal",
        AxisKind::Linear => "linear",
    };
    format!("{shape} points on a {axis} axis")
}

fn has_time_axis(config: &ChartConfiguration) -> bool {
    config
        .options
        .scales
        .get("x")
        .and_then(|scale| scale.kind)
        == Some(ScaleType::Time)
}

/// Moves single colors of `dataset` onto `slot` of the bound palette.
///
/// Datasets with per-point or gradient fills, and so their slice borders,
/// are left as composed.
fn recolor(dataset: &mut DatasetConfig, palette: &Palette, slot: usize) -> ChartResult<()> {
    match (&dataset.background_color, &dataset.border_color) {
        (Some(ColorValue::Single(_)), _) | (None, Some(ColorValue::Single(_))) => {}
        _ => return Ok(()),
    }
    ensure_palette_covers(palette, slot + 1, false)?;
    let color = palette.cyclic(slot);
    for value in [&mut dataset.background_color, &mut dataset.border_color] {
        if let Some(ColorValue::Single(current)) = value {
            *current = color.to_owned();
        }
    }
    trace!(dataset = %dataset.label, slot, color, "recolored merged dataset");
    Ok(())
}

fn next_free_axis_id<V>(scales: &IndexMap<String, V>) -> String {
    (1..)
        .map(|n| format!("y{n}"))
        .find(|id| !scales.contains_key(id))
        .unwrap_or_default()
}

/// Datasets of `config` re-indexed from its own labels onto `labels`.
fn realigned(config: &ChartConfiguration, labels: &[String]) -> Vec<DatasetConfig> {
    let own = &config.data.labels;
    config
        .data
        .datasets
        .iter()
        .map(|dataset| {
            let mut dataset = dataset.clone();
            if own.as_slice() != labels && own.len() == dataset.data.len() {
                dataset.data = match &dataset.data {
                    DataValues::Scalars(values) => DataValues::Scalars(reindex(own, values, labels)),
                    DataValues::Ranges(values) => DataValues::Ranges(reindex(own, values, labels)),
                    DataValues::Points(points) => DataValues::Points(points.clone()),
                };
            }
            dataset
        })
        .collect()
}

fn reindex<T: Copy>(own: &[String], values: &[Option<T>], labels: &[String]) -> Vec<Option<T>> {
    let by_label: IndexMap<&str, Option<T>> = own
        .iter()
        .map(String::as_str)
        .zip(values.iter().copied())
        .collect();
    labels
        .iter()
        .map(|label| by_label.get(label.as_str()).copied().flatten())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reindex_fills_gaps_with_none() {
        let own = vec!["b".to_owned(), "c".to_owned()];
        let labels = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        assert_eq!(
            reindex(&own, &[Some(2.0), None], &labels),
            vec![None, Some(2.0), None]
        );
    }

    #[test]
    fn next_free_axis_id_skips_taken_ids() {
        let mut scales = IndexMap::new();
        scales.insert("y1".to_owned(), ());
        scales.insert("y2".to_owned(), ());
        assert_eq!(next_free_axis_id(&scales), "y3");
    }
}
