//! Sorting algorithms that record their execution
//!
//! Each sort copies its input, emits an opening step with the untouched
//! array, records every comparison and swap, and closes with a step that
//! marks every index sorted. Swap steps always show the pre-swap values.

use super::{SortStep, StepLog};
use crate::errors::TraceError;

/// Adjacent-pass bubble sort.
///
/// During pass `i` the indices `i+1..n` are shown as sorted. This follows
/// the pass counter, not element finality, so an index can appear sorted a
/// little before it strictly is.
pub fn bubble_sort(input: &[i32], log: &mut StepLog) -> Result<(), TraceError> {
    let mut array = input.to_vec();
    let n = array.len();
    log.sort(SortStep::plain(&array))?;

    for i in 0..n.saturating_sub(1) {
        let suffix: Vec<usize> = (i + 1..n).collect();
        for j in 0..n - i - 1 {
            log.sort(
                SortStep::plain(&array)
                    .with_comparing(j, j + 1)
                    .with_sorted(suffix.clone()),
            )?;

            if array[j] > array[j + 1] {
                log.sort(
                    SortStep::plain(&array)
                        .with_swapping(j, j + 1)
                        .with_sorted(suffix.clone()),
                )?;
                array.swap(j, j + 1);
            }
        }
    }

    log.sort(SortStep::finished(&array))
}

/// Quick sort with the Lomuto partition scheme (last element as pivot)
pub fn quick_sort(input: &[i32], log: &mut StepLog) -> Result<(), TraceError> {
    let mut array = input.to_vec();
    log.sort(SortStep::plain(&array))?;

    if array.len() > 1 {
        let high = array.len() - 1;
        quick_sort_range(&mut array, 0, high, log)?;
    }

    log.sort(SortStep::finished(&array))
}

fn quick_sort_range(
    array: &mut [i32],
    low: usize,
    high: usize,
    log: &mut StepLog,
) -> Result<(), TraceError> {
    if low >= high {
        return Ok(());
    }
    let pivot = partition(array, low, high, log)?;
    if pivot > low {
        quick_sort_range(array, low, pivot - 1, log)?;
    }
    quick_sort_range(array, pivot + 1, high, log)
}

/// Partition `array[low..=high]` around `array[high]`; returns the pivot's final index
fn partition(
    array: &mut [i32],
    low: usize,
    high: usize,
    log: &mut StepLog,
) -> Result<usize, TraceError> {
    let pivot_value = array[high];
    log.sort(SortStep::plain(array).with_pivot(high))?;

    // Next slot for an element smaller than the pivot
    let mut boundary = low;
    for j in low..high {
        log.sort(SortStep::plain(array).with_comparing(j, high).with_pivot(high))?;

        if array[j] < pivot_value {
            if boundary != j {
                log.sort(SortStep::plain(array).with_swapping(boundary, j).with_pivot(high))?;
                array.swap(boundary, j);
            }
            boundary += 1;
        }
    }

    // Emitted even when boundary == high
    log.sort(SortStep::plain(array).with_swapping(boundary, high).with_pivot(high))?;
    array.swap(boundary, high);
    Ok(boundary)
}

/// Top-down merge sort, splitting at the floor midpoint
pub fn merge_sort(input: &[i32], log: &mut StepLog) -> Result<(), TraceError> {
    let mut array = input.to_vec();
    log.sort(SortStep::plain(&array))?;

    if array.len() > 1 {
        let right = array.len() - 1;
        merge_sort_range(&mut array, 0, right, log)?;
    }

    log.sort(SortStep::finished(&array))
}

fn merge_sort_range(
    array: &mut [i32],
    left: usize,
    right: usize,
    log: &mut StepLog,
) -> Result<(), TraceError> {
    if left >= right {
        return Ok(());
    }
    let mid = left + (right - left) / 2;
    merge_sort_range(array, left, mid, log)?;
    merge_sort_range(array, mid + 1, right, log)?;
    merge(array, left, mid, right, log)
}

fn merge(
    array: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    log: &mut StepLog,
) -> Result<(), TraceError> {
    let left_half = array[left..=mid].to_vec();
    let right_half = array[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        log.sort(SortStep::plain(array).with_comparing(left + i, mid + 1 + j))?;

        if left_half[i] <= right_half[j] {
            array[k] = left_half[i];
            i += 1;
        } else {
            array[k] = right_half[j];
            j += 1;
        }
        k += 1;
        log.sort(SortStep::plain(array))?;
    }

    for &value in left_half[i..].iter().chain(&right_half[j..]) {
        array[k] = value;
        k += 1;
        log.sort(SortStep::plain(array))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Step;

    fn run(sort: fn(&[i32], &mut StepLog) -> Result<(), TraceError>, input: &[i32]) -> Vec<SortStep> {
        let mut log = StepLog::unbounded();
        sort(input, &mut log).expect("sort failed");
        log.finish(crate::algorithm::Algorithm::Bubble)
            .steps()
            .iter()
            .filter_map(Step::as_sort)
            .cloned()
            .collect()
    }

    #[test]
    fn test_bubble_sort_scenario() {
        let steps = run(bubble_sort, &[5, 1, 4, 2, 8]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 4, 5, 8]);
        assert_eq!(last.sorted, vec![0, 1, 2, 3, 4]);
        // The step before the terminal one already shows the resolved array
        assert_eq!(steps[steps.len() - 2].array, vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn test_bubble_sort_swap_step_shows_pre_swap_values() {
        let steps = run(bubble_sort, &[2, 1]);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].comparing, Some((0, 1)));
        assert_eq!(steps[1].sorted, vec![1]);
        assert_eq!(steps[2].swapping, Some((0, 1)));
        assert_eq!(steps[2].array, vec![2, 1]);
        assert_eq!(steps[3].array, vec![1, 2]);
    }

    #[test]
    fn test_bubble_sort_pass_suffix() {
        let steps = run(bubble_sort, &[1, 2, 3]);
        // pass 0 marks indices 1..3, pass 1 marks index 2
        assert_eq!(steps[1].sorted, vec![1, 2]);
        assert_eq!(steps[2].sorted, vec![1, 2]);
        assert_eq!(steps[3].sorted, vec![2]);
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_quick_sort_steps() {
        let steps = run(quick_sort, &[3, 1, 2]);
        assert_eq!(steps[1].pivot, Some(2));
        assert_eq!(steps[1].comparing, None);
        assert_eq!(steps[2].comparing, Some((0, 2)));
        assert_eq!(steps[3].comparing, Some((1, 2)));
        // 1 < 2 at j=1 with boundary 0: swap (0,1) before applying it
        assert_eq!(steps[4].swapping, Some((0, 1)));
        assert_eq!(steps[4].array, vec![3, 1, 2]);
        // Pivot placement
        assert_eq!(steps[5].swapping, Some((1, 2)));
        assert_eq!(steps[5].array, vec![1, 3, 2]);
        assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);
    }

    #[test]
    fn test_quick_sort_self_swap_emitted() {
        let steps = run(quick_sort, &[1, 2]);
        // pivot, compare, self-swap of pivot at index 1, then [0..0] recursion is empty
        assert_eq!(steps[3].swapping, Some((1, 1)));
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_merge_sort_steps() {
        let steps = run(merge_sort, &[2, 1]);
        assert_eq!(steps[1].comparing, Some((0, 1)));
        assert_eq!(steps[2].array, vec![1, 1]);
        assert_eq!(steps[3].array, vec![1, 2]);
        assert_eq!(steps[3].comparing, None);
        assert_eq!(steps.last().unwrap().array, vec![1, 2]);
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_quick_sort_left_partition_first() {
        let steps = run(quick_sort, &[5, 1, 4, 2, 3]);
        let announced: Vec<(usize, Vec<i32>)> = steps
            .iter()
            .filter(|s| s.pivot.is_some() && s.comparing.is_none() && s.swapping.is_none())
            .map(|s| (s.pivot.unwrap(), s.array.clone()))
            .collect();
        assert_eq!(
            announced,
            vec![
                (4, vec![5, 1, 4, 2, 3]),
                (1, vec![1, 2, 3, 5, 4]),
                (4, vec![1, 2, 3, 5, 4]),
            ]
        );
        assert_eq!(steps.last().unwrap().array, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_sort_compares_in_array_coordinates() {
        let steps = run(merge_sort, &[4, 3, 2, 1]);
        let compares: Vec<(usize, usize)> = steps.iter().filter_map(|s| s.comparing).collect();
        assert_eq!(compares, vec![(0, 1), (2, 3), (0, 2), (0, 3)]);
        assert_eq!(steps.len(), 14);
    }

    #[test]
    fn test_merge_sort_shows_overwritten_slots() {
        let steps = run(merge_sort, &[4, 3, 2, 1]);
        let arrays: Vec<Vec<i32>> = steps.iter().map(|s| s.array.clone()).collect();
        // Each write lands before the displaced value is written back
        assert_eq!(arrays[2], vec![3, 3, 2, 1]);
        assert_eq!(arrays[5], vec![3, 4, 1, 1]);
        assert_eq!(arrays[8], vec![1, 4, 1, 2]);
        assert_eq!(arrays[10], vec![1, 2, 1, 2]);
        assert_eq!(arrays[11], vec![1, 2, 3, 2]);
        assert_eq!(arrays[12], vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_short_arrays() {
        for sort in [bubble_sort, quick_sort, merge_sort] {
            let empty = run(sort, &[]);
            assert_eq!(empty.len(), 2);
            assert!(empty[1].sorted.is_empty());

            let single = run(sort, &[42]);
            assert_eq!(single.len(), 2);
            assert_eq!(single[1].sorted, vec![0]);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![9, -3, 7, 0];
        let _ = run(merge_sort, &input);
        let _ = run(quick_sort, &input);
        assert_eq!(input, vec![9, -3, 7, 0]);
    }
}
