use crate::distributions::{DistrRef, SampleDistribution};
use crate::errors::{DgpError, Result};
use crate::mean_functions::MeanFunction;
use linfa::{Float, ParamGuard};
use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use std::sync::Arc;

/// Default number of observations
pub const DGP_DEFAULT_NOBS: usize = 200;
/// Default standard deviation of the explanatory variable normal distribution
pub const DGP_DEFAULT_S_X: f64 = 1.0;
/// Default standard deviation of the noise normal distribution
pub const DGP_DEFAULT_S_NOISE: f64 = 1.0;

/// A set of validated DGP parameters.
#[derive(Clone, Debug)]
pub struct DgpValidParams<F: Float, M: MeanFunction<F>> {
    /// Mean function of the process, y_true = mean(x)
    pub(crate) mean: M,
    /// Number of observations to simulate, not used when `x` is given
    pub(crate) nobs: usize,
    /// Explanatory values used instead of a random sample
    pub(crate) x: Option<Array1<F>>,
    /// Standard deviation of the default N(0, s_x) explanatory distribution
    pub(crate) s_x: Option<f64>,
    /// Standard deviation of the default N(0, s_noise) noise distribution
    pub(crate) s_noise: f64,
    /// Explanatory distribution, only used when `x` is not given
    pub(crate) distr_x: Option<DistrRef<F>>,
    /// Whether `distr_x` is locked against further settings
    pub(crate) distr_x_fixed: bool,
    /// Noise distribution
    pub(crate) distr_noise: Option<DistrRef<F>>,
    /// Seed of the random generator, entropy is used when not set
    pub(crate) seed: Option<u64>,
}

impl<F: Float, M: MeanFunction<F>> Default for DgpValidParams<F, M> {
    fn default() -> DgpValidParams<F, M> {
        DgpValidParams {
            mean: M::default(),
            nobs: DGP_DEFAULT_NOBS,
            x: None,
            s_x: Some(DGP_DEFAULT_S_X),
            s_noise: DGP_DEFAULT_S_NOISE,
            distr_x: None,
            distr_x_fixed: false,
            distr_noise: None,
            seed: None,
        }
    }
}

impl<F: Float, M: MeanFunction<F>> DgpValidParams<F, M> {
    /// Get mean function
    pub fn mean(&self) -> &M {
        &self.mean
    }

    /// Get number of observations to simulate
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Get given explanatory values if any
    pub fn x(&self) -> Option<&Array1<F>> {
        self.x.as_ref()
    }

    /// Get standard deviation of the default explanatory distribution
    pub fn s_x(&self) -> Option<f64> {
        self.s_x
    }

    /// Get standard deviation of the default noise distribution
    pub fn s_noise(&self) -> f64 {
        self.s_noise
    }

    /// Get explanatory distribution if any
    pub fn distr_x(&self) -> Option<&DistrRef<F>> {
        self.distr_x.as_ref()
    }

    /// Whether the explanatory distribution is fixed
    pub fn is_distr_x_fixed(&self) -> bool {
        self.distr_x_fixed
    }

    /// Get noise distribution if any
    pub fn distr_noise(&self) -> Option<&DistrRef<F>> {
        self.distr_noise.as_ref()
    }

    /// Get random generator seed
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Clone, Debug)]
/// The set of parameters that can be specified for the generation
/// of a [univariate DGP sample](crate::UnivariateDgp).
pub struct DgpParams<F: Float, M: MeanFunction<F>>(pub(crate) DgpValidParams<F, M>);

impl<F: Float, M: MeanFunction<F>> DgpParams<F, M> {
    /// A constructor for DGP parameters given a mean function
    pub fn new(mean: M) -> DgpParams<F, M> {
        Self(DgpValidParams {
            mean,
            ..Default::default()
        })
    }

    /// A constructor for DGP parameters from validated parameters
    pub fn new_from_valid(params: &DgpValidParams<F, M>) -> Self {
        Self(params.clone())
    }

    /// Set mean function.
    pub fn mean(mut self, mean: M) -> Self {
        self.0.mean = mean;
        self
    }

    /// Set the number of observations to simulate.
    /// It is ignored when explanatory values are given with [`DgpParams::x`].
    pub fn nobs(mut self, nobs: usize) -> Self {
        self.0.nobs = nobs;
        self
    }

    /// Set explanatory values used instead of a random sample.
    ///
    /// Values are copied, the given array is left untouched by generation.
    pub fn x(mut self, x: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Self {
        self.0.x = Some(x.to_owned());
        self
    }

    /// Set standard deviation of the default N(0, s_x) explanatory distribution
    pub fn s_x(mut self, s_x: f64) -> Self {
        self.0.s_x = Some(s_x);
        self
    }

    /// Set standard deviation of the default N(0, s_noise) noise distribution
    pub fn s_noise(mut self, s_noise: f64) -> Self {
        self.0.s_noise = s_noise;
        self
    }

    /// Set the explanatory distribution, only used when `x` is not given.
    ///
    /// This function is no-op when the explanatory distribution is fixed
    /// (see [`DgpParams::fixed_distr_x`]).
    pub fn distr_x(mut self, distr_x: impl SampleDistribution<F> + 'static) -> Self {
        if self.0.distr_x_fixed {
            debug!("Explanatory distribution is fixed, ignore {distr_x:?}");
        } else {
            self.0.distr_x = Some(Arc::new(distr_x));
        }
        self
    }

    /// Set and lock the explanatory distribution: later [`DgpParams::distr_x`]
    /// settings are ignored.
    pub fn fixed_distr_x(mut self, distr_x: impl SampleDistribution<F> + 'static) -> Self {
        self.0.distr_x = Some(Arc::new(distr_x));
        self.0.distr_x_fixed = true;
        self
    }

    /// Set the noise distribution
    pub fn distr_noise(mut self, distr_noise: impl SampleDistribution<F> + 'static) -> Self {
        self.0.distr_noise = Some(Arc::new(distr_noise));
        self
    }

    /// Set the seed of the random generator for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = Some(seed);
        self
    }
}

impl<F: Float, M: MeanFunction<F>> From<DgpValidParams<F, M>> for DgpParams<F, M> {
    fn from(valid: DgpValidParams<F, M>) -> Self {
        DgpParams(valid)
    }
}

impl<F: Float, M: MeanFunction<F>> ParamGuard for DgpParams<F, M> {
    type Checked = DgpValidParams<F, M>;
    type Error = DgpError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        match &self.0.x {
            Some(x) => {
                if x.is_empty() {
                    return Err(DgpError::InvalidValueError(
                        "given `x` cannot be empty!".to_string(),
                    ));
                }
                if x.iter().any(|v| !v.is_finite()) {
                    return Err(DgpError::InvalidValueError(
                        "given `x` should only contain finite values".to_string(),
                    ));
                }
            }
            None => {
                if self.0.nobs == 0 {
                    return Err(DgpError::InvalidValueError(
                        "`nobs` cannot be 0!".to_string(),
                    ));
                }
                if self.0.distr_x.is_none() && self.0.s_x.is_none() {
                    return Err(DgpError::InvalidValueError(
                        "one of `x`, `distr_x` or `s_x` is required to get explanatory values"
                            .to_string(),
                    ));
                }
            }
        }
        // s_x only drives the default explanatory distribution
        let uses_s_x = self.0.x.is_none() && self.0.distr_x.is_none();
        if let (true, Some(s_x)) = (uses_s_x, self.0.s_x) {
            if !s_x.is_finite() || s_x <= 0. {
                return Err(DgpError::InvalidValueError(format!(
                    "`s_x` should be strictly positive, got {s_x}"
                )));
            }
        }
        if !self.0.s_noise.is_finite() || self.0.s_noise < 0. {
            return Err(DgpError::InvalidValueError(format!(
                "`s_noise` should be positive, got {}",
                self.0.s_noise
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
