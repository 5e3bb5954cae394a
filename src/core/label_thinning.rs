use smallvec::SmallVec;

/// Maximum number of step-aligned x-axis labels per render pass.
pub const MAX_X_LABELS: usize = 8;

/// Indices of the category labels drawn on the x-axis, ascending and unique.
///
/// Every `step`-th index is kept, where `step = ceil(n / MAX_X_LABELS)` once
/// `n` exceeds the budget. The first and last index are always included.
#[must_use]
pub fn thin_label_indices(label_count: usize) -> SmallVec<[usize; MAX_X_LABELS + 2]> {
    let mut indices = SmallVec::new();
    if label_count == 0 {
        return indices;
    }

    let step = label_step(label_count);
    indices.extend((0..label_count).step_by(step));
    indices.push(0);
    indices.push(label_count - 1);
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Stride between consecutive rendered labels.
#[must_use]
pub fn label_step(label_count: usize) -> usize {
    let budget = MAX_X_LABELS.min(label_count);
    if label_count > budget {
        label_count.div_ceil(budget)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::{label_step, thin_label_indices};

    #[test]
    fn short_label_sets_render_every_index() {
        assert_eq!(thin_label_indices(5).as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(thin_label_indices(8).as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn twenty_labels_use_step_three_with_forced_last() {
        assert_eq!(label_step(20), 3);
        assert_eq!(
            thin_label_indices(20).as_slice(),
            &[0, 3, 6, 9, 12, 15, 18, 19]
        );
    }

    #[test]
    fn aligned_last_index_is_not_duplicated() {
        // 17 labels: step 3, index 15 aligned, 16 forced.
        assert_eq!(
            thin_label_indices(17).as_slice(),
            &[0, 3, 6, 9, 12, 15, 16]
        );
        // 9 labels: step 2, last index 8 is already aligned.
        assert_eq!(thin_label_indices(9).as_slice(), &[0, 2, 4, 6, 8]);
    }

    #[test]
    fn empty_and_single_label_sets() {
        assert!(thin_label_indices(0).is_empty());
        assert_eq!(thin_label_indices(1).as_slice(), &[0]);
    }
}
