// 2D height map: row‐major Vec<Vec<f32>> of size N×N
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// flatten a 2D height map (row‐major) into a single Vec<f32>
// For exporting or converting to an image buffer in the shell
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// (min, max) over the whole map, None when empty
pub fn bounds2(map: &HeightMap2D) -> Option<(f32, f32)> {
    let mut it = map.iter().flat_map(|row| row.iter().copied());
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

// Rescale into [0, 1]. A flat map becomes all 0.5.
pub fn normalize2(map: &HeightMap2D) -> HeightMap2D {
    let Some((min, max)) = bounds2(map) else {
        return Vec::new();
    };
    let range = max - min;
    map.iter()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    if range < f32::EPSILON {
                        0.5
                    } else {
                        (v - min) / range
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{bounds2, flatten2, normalize2};

    #[test]
    fn flatten_is_row_major() {
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&m), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn normalize_spans_unit_range() {
        let m = vec![vec![-2.0, 0.0], vec![2.0, 1.0]];
        let n = normalize2(&m);
        assert_eq!(bounds2(&n), Some((0.0, 1.0)));
        assert_eq!(n[0][1], 0.5);
    }

    #[test]
    fn normalize_flat_map() {
        let m = vec![vec![3.0; 3]; 3];
        assert!(flatten2(&normalize2(&m)).iter().all(|&v| v == 0.5));
        assert_eq!(bounds2(&Vec::new()), None);
    }
}
