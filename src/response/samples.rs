/// iterates over every `k`-subset of `m` periods as a bitmask,
/// lowest bit = oldest period. deterministic, allocation free,
/// and ordered by increasing mask value.
///
/// `m` must stay below 64.
pub struct Samples {
    next: u64,
    size: usize,
}

impl Samples {
    /// C(m, k)
    pub fn combinations(&self) -> usize {
        match self.next {
            0 => 0,
            next => crate::choose(self.size, next.count_ones() as usize),
        }
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >> self.size != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
}

impl Iterator for Samples {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let sample = self.next;
            self.next = self.permute();
            Some(sample)
        }
    }
}

/// `(m, k)`: all ways to draw `k` of the last `m` periods
impl From<(usize, usize)> for Samples {
    fn from((m, k): (usize, usize)) -> Self {
        assert!(m < 64, "memory must fit in a u64 mask");
        Self {
            next: match k {
                0 => 0,
                k if k > m => 0,
                k => (1u64 << k) - 1,
            },
            size: m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_binomial() {
        for m in 1..10 {
            for k in 1..=m {
                let samples = Samples::from((m, k));
                let expected = samples.combinations();
                assert_eq!(samples.count(), expected);
            }
        }
    }

    #[test]
    fn masks_have_k_bits_within_m() {
        for mask in Samples::from((6, 3)) {
            assert_eq!(mask.count_ones(), 3);
            assert_eq!(mask >> 6, 0);
        }
    }

    #[test]
    fn enumerates_in_order() {
        let masks = Samples::from((3, 2)).collect::<Vec<_>>();
        assert_eq!(masks, vec![0b011, 0b101, 0b110]);
    }

    #[test]
    fn oversized_samples_are_empty() {
        assert_eq!(Samples::from((2, 3)).combinations(), 0);
        assert_eq!(Samples::from((2, 3)).count(), 0);
        assert_eq!(Samples::from((2, 0)).count(), 0);
    }

    #[test]
    fn full_width_does_not_overflow() {
        assert_eq!(Samples::from((63, 63)).count(), 1);
        assert_eq!(Samples::from((63, 1)).count(), 63);
    }
}
