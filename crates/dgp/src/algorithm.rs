use crate::distributions::{NormalDistr, SampleDistribution};
use crate::errors::{DgpError, Result};
use crate::mean_functions::MeanFunction;
use crate::parameters::{DgpParams, DgpValidParams};
use linfa::{Float, ParamGuard};
use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use ndarray_rand::rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::cmp::Ordering;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "persistent")]
use std::fs;
#[cfg(feature = "persistent")]
use std::io::Write;

/// A realized sample of a univariate data generating process.
///
/// Observations are `y = mean(x) + noise` where
/// * `x` is the explanatory variable, sorted in ascending order,
/// * `y_true = mean(x)` is the expected response, i.e. `y` without noise,
/// * `y` is the observed (noisy) response.
///
/// The mean function is kept to evaluate the true curve over any grid
/// (see [`UnivariateDgp::plot_data`]).
///
/// # Example
///
/// ```
/// use npreg_dgp::{ConstantDistr, FanGijbels1Mean, UnivariateDgp};
/// use ndarray::array;
///
/// let dgp = UnivariateDgp::<f64, _>::params(FanGijbels1Mean())
///     .x(&array![1., -1., 0.])
///     .distr_noise(ConstantDistr::zero())
///     .generate()
///     .expect("DGP sample");
///
/// assert_eq!(dgp.x(), &array![-1., 0., 1.]);
/// assert_eq!(dgp.y(), dgp.y_true());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "F: Serialize, M: Serialize",
        deserialize = "F: Deserialize<'de>, M: Deserialize<'de>"
    ))
)]
pub struct UnivariateDgp<F: Float, M: MeanFunction<F>> {
    /// Explanatory variable, sorted
    pub(crate) x: Array1<F>,
    /// Expected response, mean(x)
    pub(crate) y_true: Array1<F>,
    /// Observed response, y_true + noise
    pub(crate) y: Array1<F>,
    /// Underlying mean function
    pub(crate) mean: M,
}

impl<F: Float, M: MeanFunction<F>> UnivariateDgp<F, M> {
    /// DGP parameters constructor given a mean function
    pub fn params(mean: M) -> DgpParams<F, M> {
        DgpParams::new(mean)
    }

    /// Explanatory values (sorted)
    pub fn x(&self) -> &Array1<F> {
        &self.x
    }

    /// Observed responses
    pub fn y(&self) -> &Array1<F> {
        &self.y
    }

    /// Expected responses, i.e. responses without noise
    pub fn y_true(&self) -> &Array1<F> {
        &self.y_true
    }

    /// Noise realization, `y - y_true`
    pub fn noise(&self) -> Array1<F> {
        &self.y - &self.y_true
    }

    /// Underlying mean function
    pub fn mean(&self) -> &M {
        &self.mean
    }

    /// Number of observations
    pub fn nobs(&self) -> usize {
        self.x.len()
    }

    /// Evaluates the mean function at the given `x` points specified as a (n,) vector
    pub fn eval(&self, x: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        self.mean.value(x)
    }
}

impl<F: Float, M: MeanFunction<F>> DgpValidParams<F, M> {
    /// Generates a DGP sample using a random generator seeded with `seed`
    /// if specified, from entropy otherwise.
    pub fn generate(&self) -> Result<UnivariateDgp<F, M>> {
        let mut rng = match self.seed {
            Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
            None => Xoshiro256Plus::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generates a DGP sample using the given random generator
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<UnivariateDgp<F, M>> {
        let rng: &mut dyn RngCore = rng;

        let mut x = match &self.x {
            Some(x) => x.to_owned(),
            None => {
                let x = match &self.distr_x {
                    Some(distr) => distr.draw(self.nobs, rng),
                    None => self.default_distr_x()?.draw(self.nobs, rng),
                };
                check_draws("explanatory values", &x, self.nobs)?;
                if x.iter().any(|v| !v.is_finite()) {
                    return Err(DgpError::SampleError(
                        "explanatory distribution drew non finite values".to_string(),
                    ));
                }
                x
            }
        };
        // finite values only, see checks above
        x.as_slice_mut()
            .ok_or_else(|| DgpError::SampleError("non contiguous explanatory values".to_string()))?
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let nobs = x.len();
        let noise = match &self.distr_noise {
            Some(distr) => distr.draw(nobs, rng),
            None => NormalDistr::new(0., self.s_noise)?.draw(nobs, rng),
        };
        check_draws("noise", &noise, nobs)?;

        let y_true = self.mean.value(&x);
        let y = &y_true + &noise;
        debug!(
            "Generate {} observations of {} in [{:?}, {:?}]",
            nobs,
            self.mean,
            x[0],
            x[nobs - 1]
        );

        Ok(UnivariateDgp {
            x,
            y_true,
            y,
            mean: self.mean,
        })
    }

    fn default_distr_x(&self) -> Result<NormalDistr> {
        let s_x = self.s_x.ok_or_else(|| {
            DgpError::InvalidValueError("`s_x` is required without `distr_x`".to_string())
        })?;
        NormalDistr::new(0., s_x)
    }
}

impl<F: Float, M: MeanFunction<F>> DgpParams<F, M> {
    /// Checks parameters then generates a DGP sample
    /// (see [`DgpValidParams::generate`])
    pub fn generate(&self) -> Result<UnivariateDgp<F, M>> {
        self.check_ref()?.generate()
    }

    /// Checks parameters then generates a DGP sample using the given random generator
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<UnivariateDgp<F, M>> {
        self.check_ref()?.generate_with_rng(rng)
    }
}

fn check_draws<F: Float>(what: &str, draws: &Array1<F>, expected: usize) -> Result<()> {
    if draws.len() != expected {
        return Err(DgpError::SampleError(format!(
            "expected {expected} draws of {what}, got {}",
            draws.len()
        )));
    }
    Ok(())
}

#[cfg(feature = "persistent")]
impl<F, M> UnivariateDgp<F, M>
where
    F: Float + Serialize + for<'de> Deserialize<'de>,
    M: MeanFunction<F> + Serialize + for<'de> Deserialize<'de>,
{
    /// Save the DGP sample as a json file
    pub fn save(&self, path: &str) -> Result<()> {
        let mut file = fs::File::create(path)?;
        let bytes = serde_json::to_vec(self)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    /// Load a DGP sample from a json file
    pub fn load(path: &str) -> Result<Box<UnivariateDgp<F, M>>> {
        let data = fs::read(path)?;
        let dgp: UnivariateDgp<F, M> = serde_json::from_slice(&data)?;
        dgp.check_sample()?;
        Ok(Box::new(dgp))
    }
}

impl<F: Float, M: MeanFunction<F>> UnivariateDgp<F, M> {
    /// Checks a sample not built by generation: non empty, consistent
    /// lengths and sorted explanatory values
    #[cfg_attr(not(feature = "persistent"), allow(dead_code))]
    pub(crate) fn check_sample(&self) -> Result<()> {
        let nobs = self.x.len();
        if nobs == 0 {
            return Err(DgpError::InvalidValueError(
                "DGP sample cannot be empty!".to_string(),
            ));
        }
        if self.y.len() != nobs || self.y_true.len() != nobs {
            return Err(DgpError::InvalidValueError(format!(
                "DGP sample lengths mismatch: x ({nobs}), y ({}), y_true ({})",
                self.y.len(),
                self.y_true.len()
            )));
        }
        if self.x.iter().any(|v| !v.is_finite())
            || self.x.windows(2).into_iter().any(|w| w[0] > w[1])
        {
            return Err(DgpError::InvalidValueError(
                "DGP sample `x` should be finite and sorted".to_string(),
            ));
        }
        Ok(())
    }
}
