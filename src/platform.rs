use std::mem::{align_of, size_of};

/// Target properties the node layouts depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pointer_size: u64,
    alignments: Vec<u64>,
}

impl Platform {
    /// Platform with the given pointer width and every power of two up to `max_alignment`.
    ///
    /// # Panics
    /// Panics if `pointer_size` is 0 or not a power of two.
    pub fn new(pointer_size: u64, max_alignment: u64) -> Self {
        assert!(pointer_size.is_power_of_two(), "pointer_size must be a power of two");
        let alignments = std::iter::successors(Some(1u64), |a| a.checked_mul(2))
            .take_while(|&a| a <= max_alignment)
            .collect();
        Self { pointer_size, alignments }
    }

    /// The platform this binary was compiled for. Alignments are those of the fundamental scalar types.
    pub fn host() -> Self {
        let mut alignments: Vec<u64> = [
            align_of::<u8>(),
            align_of::<bool>(),
            align_of::<u16>(),
            align_of::<u32>(),
            align_of::<u64>(),
            align_of::<f32>(),
            align_of::<f64>(),
            align_of::<usize>(),
            align_of::<u128>(),
        ]
        .into_iter()
        .map(|a| a as u64)
        .collect();
        alignments.sort_unstable();
        alignments.dedup();

        Self { pointer_size: size_of::<usize>() as u64, alignments }
    }

    pub fn pointer_size(&self) -> u64 {
        self.pointer_size
    }

    /// Distinct alignments, ascending.
    pub fn alignments(&self) -> &[u64] {
        &self.alignments
    }
}
