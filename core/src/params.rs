//! NTRU product-form parameter sets.

use sparse_ring_backend::{CpuRef, hal::layouts::Module, modulus_mask, padded_len};

use crate::ConfigError;

/// Ring degree, coefficient modulus and product-form weights.
///
/// The private key `b = p1*p2 + p3` has `df1`, `df2` and `df3` coefficients
/// equal to `+1` in the respective factor, and as many equal to `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingParams {
    pub name: &'static str,
    pub n: usize,
    pub q: u32,
    pub df1: usize,
    pub df2: usize,
    pub df3: usize,
}

impl RingParams {
    /// Toy ring used by the N = 11 demonstration vector.
    pub const TOY11: RingParams = RingParams {
        name: "toy11",
        n: 11,
        q: 32,
        df1: 1,
        df2: 1,
        df3: 1,
    };

    pub const EES401EP2: RingParams = RingParams {
        name: "ees401ep2",
        n: 401,
        q: 2048,
        df1: 8,
        df2: 8,
        df3: 6,
    };

    /// Extra degrees for the randomized self-test and the benches; the
    /// fixed vectors only cover [`RingParams::TOY11`] and
    /// [`RingParams::EES401EP2`].
    pub const EES439EP1: RingParams = RingParams {
        name: "ees439ep1",
        n: 439,
        q: 2048,
        df1: 9,
        df2: 8,
        df3: 5,
    };

    pub const EES593EP1: RingParams = RingParams {
        name: "ees593ep1",
        n: 593,
        q: 2048,
        df1: 10,
        df2: 10,
        df3: 8,
    };

    pub const EES743EP1: RingParams = RingParams {
        name: "ees743ep1",
        n: 743,
        q: 2048,
        df1: 11,
        df2: 11,
        df3: 15,
    };

    pub const ALL: [RingParams; 5] = [
        Self::TOY11,
        Self::EES401EP2,
        Self::EES439EP1,
        Self::EES593EP1,
        Self::EES743EP1,
    ];

    /// Case-insensitive lookup among [`RingParams::ALL`].
    pub fn by_name(name: &str) -> Result<RingParams, ConfigError> {
        Self::ALL
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ConfigError::UnknownParams(name.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Module::<CpuRef>::check_degree(self.n)?;
        modulus_mask(self.q)?;
        for (i, &weight) in [self.df1, self.df2, self.df3].iter().enumerate() {
            if 2 * weight > self.n {
                return Err(ConfigError::WeightTooLarge {
                    factor: i + 1,
                    weight,
                    n: self.n,
                });
            }
        }
        Ok(())
    }

    /// `q - 1`, the mask applied after accumulation.
    pub fn coeff_mask(&self) -> u16 {
        (self.q - 1) as u16
    }

    /// Index counts `[p1_len, p2_len, p3_len]` of a packed private key.
    pub fn product_form_lens(&self) -> [usize; 3] {
        [2 * self.df1, 2 * self.df2, 2 * self.df3]
    }

    pub fn product_form_len(&self) -> usize {
        self.product_form_lens().iter().sum()
    }

    /// Scratch words one product-form multiplication needs.
    pub fn scratch_len(&self) -> usize {
        padded_len(self.n) + self.df1.max(self.df2).max(self.df3)
    }
}

#[cfg(test)]
mod tests {
    use sparse_ring_backend::RingError;

    use super::*;

    #[test]
    fn presets_are_valid() {
        for p in RingParams::ALL {
            assert_eq!(p.validate(), Ok(()), "{}", p.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(RingParams::by_name("EES401EP2"), Ok(RingParams::EES401EP2));
        assert_eq!(
            RingParams::by_name("ees1087ep2"),
            Err(ConfigError::UnknownParams("ees1087ep2".to_string()))
        );
    }

    #[test]
    fn derived_sizes() {
        let p: RingParams = RingParams::EES401EP2;
        assert_eq!(p.coeff_mask(), 0x7FF);
        assert_eq!(p.product_form_lens(), [16, 16, 12]);
        assert_eq!(p.product_form_len(), 44);
        assert_eq!(p.scratch_len(), 416);
    }

    #[test]
    fn rejects_bad_sets() {
        let mut p: RingParams = RingParams::EES401EP2;
        p.q = 3000;
        assert_eq!(p.validate(), Err(ConfigError::Ring(RingError::InvalidModulus(3000))));

        let mut p: RingParams = RingParams::TOY11;
        p.df3 = 6;
        assert_eq!(
            p.validate(),
            Err(ConfigError::WeightTooLarge {
                factor: 3,
                weight: 6,
                n: 11
            })
        );

        let mut p: RingParams = RingParams::TOY11;
        p.n = 4;
        assert!(matches!(p.validate(), Err(ConfigError::Ring(_))));
    }
}
