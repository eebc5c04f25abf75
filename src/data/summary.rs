use super::model::PenguinDataset;

// ---------------------------------------------------------------------------
// Summary accessors – scalar projections of the filtered view
// ---------------------------------------------------------------------------

/// Number of records in the filtered view.
pub fn count(indices: &[usize]) -> usize {
    indices.len()
}

/// Mean bill length (mm) over the filtered view. `None` when no record in
/// the view carries a value; the UI renders that as "no data".
pub fn mean_bill_length(dataset: &PenguinDataset, indices: &[usize]) -> Option<f64> {
    mean_of(indices.iter().filter_map(|&i| dataset.penguins[i].bill_length_mm))
}

/// Mean bill depth (mm) over the filtered view, same policy as
/// [`mean_bill_length`].
pub fn mean_bill_depth(dataset: &PenguinDataset, indices: &[usize]) -> Option<f64> {
    mean_of(indices.iter().filter_map(|&i| dataset.penguins[i].bill_depth_mm))
}

fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
