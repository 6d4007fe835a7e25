use crate::errors::{DgpError, Result};
use linfa::Float;
use ndarray::Array1;
use ndarray_rand::rand::RngCore;
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use std::fmt;
use std::sync::Arc;

/// Sampling distribution used to draw explanatory values or noise
///
/// A sampling distribution is able to draw `n` independent values
/// using the given random generator, hence sampling is reproducible
/// as long as the generator is seeded.
pub trait SampleDistribution<F: Float>: fmt::Debug + Send + Sync {
    /// Draws `n` independent values
    ///
    /// # Parameters
    ///
    /// * `n`: number of values
    /// * `rng`: source of randomness
    ///
    /// # Returns
    ///
    /// * A (n,) vector of draws
    fn draw(&self, n: usize, rng: &mut dyn RngCore) -> Array1<F>;
}

/// Shared reference to a sampling distribution
pub type DistrRef<F> = Arc<dyn SampleDistribution<F>>;

/// Normal distribution `N(loc, scale^2)`
#[derive(Clone, Copy, Debug)]
pub struct NormalDistr {
    loc: f64,
    scale: f64,
    normal: Normal<f64>,
}

impl NormalDistr {
    /// Constructor given mean `loc` and standard deviation `scale`
    ///
    /// ```
    /// use npreg_dgp::NormalDistr;
    ///
    /// let distr = NormalDistr::new(0., 0.7).expect("valid normal");
    /// ```
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() || !scale.is_finite() || scale < 0. {
            return Err(DgpError::InvalidValueError(format!(
                "Normal distribution requires finite loc and scale >= 0, got loc={loc}, scale={scale}"
            )));
        }
        let normal = Normal::new(loc, scale)
            .map_err(|err| DgpError::InvalidValueError(format!("Normal distribution: {err}")))?;
        Ok(NormalDistr { loc, scale, normal })
    }

    /// Mean of the distribution
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation of the distribution
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl<F: Float> SampleDistribution<F> for NormalDistr {
    fn draw(&self, n: usize, rng: &mut dyn RngCore) -> Array1<F> {
        Array1::random_using(n, self.normal, rng).mapv(|v: f64| F::cast(v))
    }
}

/// Continuous uniform distribution on `[low, high)`
#[derive(Clone, Copy, Debug)]
pub struct UniformDistr {
    low: f64,
    high: f64,
    uniform: Uniform<f64>,
}

impl UniformDistr {
    /// Constructor given `low < high` bounds
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(DgpError::InvalidValueError(format!(
                "Uniform distribution requires finite bounds with low < high, got [{low}, {high}]"
            )));
        }
        Ok(UniformDistr {
            low,
            high,
            uniform: Uniform::new(low, high),
        })
    }

    /// Uniform distribution on `[0, 1)`
    pub fn standard() -> Self {
        UniformDistr {
            low: 0.,
            high: 1.,
            uniform: Uniform::new(0., 1.),
        }
    }

    /// Lower bound
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl<F: Float> SampleDistribution<F> for UniformDistr {
    fn draw(&self, n: usize, rng: &mut dyn RngCore) -> Array1<F> {
        Array1::random_using(n, self.uniform, rng).mapv(|v: f64| F::cast(v))
    }
}

/// Degenerate distribution always drawing the same value.
///
/// Used as a noise distribution, `ConstantDistr::zero()` makes the
/// response equal to the mean function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantDistr(pub f64);

impl ConstantDistr {
    /// Distribution always drawing 0
    pub fn zero() -> Self {
        ConstantDistr(0.)
    }
}

impl<F: Float> SampleDistribution<F> for ConstantDistr {
    fn draw(&self, n: usize, _rng: &mut dyn RngCore) -> Array1<F> {
        Array1::from_elem(n, F::cast(self.0))
    }
}
