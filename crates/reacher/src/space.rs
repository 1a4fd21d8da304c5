use rand::distributions::{Distribution, Uniform};
use rand::RngCore;

/// Box-shaped continuous action space, `[low, high]` on every component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionSpace {
    pub dim: usize,
    pub low: f64,
    pub high: f64,
}

impl ActionSpace {
    /// Symmetric space `[-limit, limit]^dim`.
    #[must_use]
    pub fn symmetric(dim: usize, limit: f64) -> Self {
        Self {
            dim,
            low: -limit,
            high: limit,
        }
    }

    /// Draw an action uniformly from the box.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let dist = Uniform::new_inclusive(self.low, self.high);
        (0..self.dim).map(|_| dist.sample(&mut *rng)).collect()
    }

    #[must_use]
    pub fn contains(&self, action: &[f64]) -> bool {
        action.len() == self.dim && action.iter().all(|&a| (self.low..=self.high).contains(&a))
    }

    #[must_use]
    pub fn zeros(&self) -> Vec<f64> {
        vec![0.0; self.dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_bounds() {
        let space = ActionSpace::symmetric(7, 2.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let a = space.sample(&mut rng);
            assert!(space.contains(&a), "{a:?}");
        }
    }

    #[test]
    fn contains_checks_arity() {
        let space = ActionSpace::symmetric(7, 1.0);
        assert!(!space.contains(&[0.0; 6]));
        assert!(space.contains(&space.zeros()));
        assert!(!space.contains(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5]));
    }
}
