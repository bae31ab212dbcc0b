use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;

/// Fraction of the dataset held out for testing.
pub const TEST_FRACTION: f64 = 0.15;

// Files after shuffling: the first part goes to test, the rest to train
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitData {
    pub test: Vec<PathBuf>,
    pub train: Vec<PathBuf>,
}

impl SplitData {
    pub fn len(&self) -> usize {
        self.test.len() + self.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test.is_empty() && self.train.is_empty()
    }
}

/// Seeded generator when a seed is given, fresh entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Number of items on the held-out side: `floor(total * fraction)`.
pub fn split_count(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).floor() as usize
}

/// Shuffle the files and split them into test and train sets
pub fn split_files(mut files: Vec<PathBuf>, fraction: f64, rng: &mut StdRng) -> SplitData {
    files.shuffle(rng);

    let test_size = split_count(files.len(), fraction);
    let train = files.split_off(test_size);

    SplitData { test: files, train }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn files(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("{:06}.xml", i))).collect()
    }

    #[test]
    fn test_split_count() {
        assert_eq!(split_count(0, TEST_FRACTION), 0);
        assert_eq!(split_count(6, TEST_FRACTION), 0);
        assert_eq!(split_count(7, TEST_FRACTION), 1);
        assert_eq!(split_count(20, TEST_FRACTION), 3);
        assert_eq!(split_count(100, TEST_FRACTION), 15);
        assert_eq!(split_count(10, 1.0), 10);
        assert_eq!(split_count(10, 0.0), 0);
    }

    #[test]
    fn test_split_files_is_a_partition() {
        for n in [0, 1, 7, 20, 101] {
            let input = files(n);
            let split = split_files(input.clone(), TEST_FRACTION, &mut make_rng(Some(42)));

            assert_eq!(split.test.len(), split_count(n, TEST_FRACTION));
            assert_eq!(split.len(), n);

            let all: HashSet<_> = split.test.iter().chain(split.train.iter()).collect();
            assert_eq!(all.len(), n);
            assert!(input.iter().all(|f| all.contains(f)));
        }
    }

    #[test]
    fn test_split_files_is_deterministic_with_seed() {
        let a = split_files(files(50), TEST_FRACTION, &mut make_rng(Some(7)));
        let b = split_files(files(50), TEST_FRACTION, &mut make_rng(Some(7)));
        assert_eq!(a, b);
    }
}
