use itertools::Itertools;

use crate::geometry::Dimension;

/// Whether the summed volume of `group` exceeds the volume of `container`.
/// Products placed inside a box never overlap, so such a group can never fit.
pub fn exceeds_volume(group: &[Dimension], container: &Dimension) -> bool {
    group.iter().map(|d| d.volume()).sum::<u64>() > container.volume()
}

/// Upper bound on the number of items (with the given volumes) that can share a container of `container_volume`:
/// the length of the longest prefix of the volumes, sorted ascending, whose sum still fits.
pub fn max_group_size(volumes: impl IntoIterator<Item = u64>, container_volume: u64) -> usize {
    volumes
        .into_iter()
        .sorted_unstable()
        .scan(0u64, |total, v| {
            *total += v;
            Some(*total)
        })
        .take_while(|total| *total <= container_volume)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_size_bound() {
        assert_eq!(max_group_size([], 100), 0);
        assert_eq!(max_group_size([50, 10, 40], 100), 3);
        assert_eq!(max_group_size([50, 10, 41], 100), 2);
        assert_eq!(max_group_size([101], 100), 0);
    }

    #[test]
    fn volume_excess() {
        let container = Dimension::try_new(10, 10, 10).unwrap();
        let half = Dimension::try_new(5, 10, 10).unwrap();
        assert!(!exceeds_volume(&[half, half], &container));
        assert!(exceeds_volume(&[half, half, half], &container));
        assert!(!exceeds_volume(&[], &container));
    }
}
