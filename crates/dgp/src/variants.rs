//! Univariate non-linear examples of data generating processes
//! commonly used to benchmark non-parametric regression.
//!
//! Each example is a preset of [DgpParams]: a mean function together with
//! default sample size, explanatory and noise distributions. Presets can
//! still be tuned with [DgpParams] setters before generation.
//!
//! ```
//! use npreg_dgp::{UnivariateFanGijbels1, ConstantDistr};
//! use ndarray::array;
//!
//! let dgp = UnivariateFanGijbels1::<f64>::params()
//!     .x(&array![-1., 0., 1.])
//!     .distr_noise(ConstantDistr::zero())
//!     .generate()
//!     .expect("Fan-Gijbels sample");
//! assert_eq!(dgp.y()[1], 2.);
//! ```

use crate::distributions::UniformDistr;
use crate::mean_functions::{Eubank1Mean, FanGijbels1Mean, FanGijbels2Mean};
use crate::parameters::DgpParams;
use linfa::Float;

/// Fan and Gijbels example function 1: linear trend plus a hump,
/// with explanatory values drawn from N(0, 1) and noise from N(0, 0.7^2).
///
/// Reference: Fan, Jianqing, and Irene Gijbels. 1992. "Variable Bandwidth and Local
/// Linear Regression Smoothers." The Annals of Statistics 20 (4): 2008-2036.
pub type UnivariateFanGijbels1<F> = DgpParams<F, FanGijbels1Mean>;

impl<F: Float> UnivariateFanGijbels1<F> {
    /// Default number of observations
    pub const NOBS: usize = 200;
    /// Standard deviation of explanatory values
    pub const S_X: f64 = 1.0;
    /// Standard deviation of noise
    pub const S_NOISE: f64 = 0.7;

    /// Fan and Gijbels example 1 parameters
    pub fn params() -> DgpParams<F, FanGijbels1Mean> {
        DgpParams::new(FanGijbels1Mean())
            .nobs(Self::NOBS)
            .s_x(Self::S_X)
            .s_noise(Self::S_NOISE)
    }
}

/// Fan and Gijbels example function 2: sine plus a hump,
/// with explanatory values drawn from N(0, 1) and noise from N(0, 0.5^2).
pub type UnivariateFanGijbels2<F> = DgpParams<F, FanGijbels2Mean>;

impl<F: Float> UnivariateFanGijbels2<F> {
    /// Default number of observations
    pub const NOBS: usize = 200;
    /// Standard deviation of explanatory values
    pub const S_X: f64 = 1.0;
    /// Standard deviation of noise
    pub const S_NOISE: f64 = 0.5;

    /// Fan and Gijbels example 2 parameters
    pub fn params() -> DgpParams<F, FanGijbels2Mean> {
        DgpParams::new(FanGijbels2Mean())
            .nobs(Self::NOBS)
            .s_x(Self::S_X)
            .s_noise(Self::S_NOISE)
    }
}

/// Eubank variant of Fan and Gijbels example function 1 (Eubank p.179f),
/// with explanatory values drawn from U[0, 1] and noise from N(0, 0.15^2).
///
/// The explanatory distribution is fixed: setting another one with
/// [DgpParams::distr_x] is ignored. Explanatory values given with
/// [DgpParams::x] are still used.
pub type UnivariateFanGijbels1EU<F> = DgpParams<F, Eubank1Mean>;

impl<F: Float> UnivariateFanGijbels1EU<F> {
    /// Default number of observations
    pub const NOBS: usize = 50;
    /// Standard deviation of noise
    pub const S_NOISE: f64 = 0.15;

    /// Eubank example parameters
    pub fn params() -> DgpParams<F, Eubank1Mean> {
        let mut params = DgpParams::new(Eubank1Mean())
            .nobs(Self::NOBS)
            .s_noise(Self::S_NOISE)
            .fixed_distr_x(UniformDistr::standard());
        params.0.s_x = None;
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{ConstantDistr, NormalDistr};
    use crate::mean_functions::{fg1, fg1eu, fg2};
    use crate::UnivariateDgp;
    use approx::assert_abs_diff_eq;
    use linfa::ParamGuard;
    use ndarray::{array, Array1};

    fn is_sorted(x: &Array1<f64>) -> bool {
        x.windows(2).into_iter().all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_presets() {
        let fg1_params = UnivariateFanGijbels1::<f64>::params().check().unwrap();
        assert_eq!(fg1_params.nobs(), 200);
        assert_eq!(fg1_params.s_x(), Some(1.0));
        assert_eq!(fg1_params.s_noise(), 0.7);

        let fg2_params = UnivariateFanGijbels2::<f64>::params().check().unwrap();
        assert_eq!(fg2_params.nobs(), 200);
        assert_eq!(fg2_params.s_x(), Some(1.0));
        assert_eq!(fg2_params.s_noise(), 0.5);

        let eu_params = UnivariateFanGijbels1EU::<f64>::params().check().unwrap();
        assert_eq!(eu_params.nobs(), 50);
        assert_eq!(eu_params.s_x(), None);
        assert_eq!(eu_params.s_noise(), 0.15);
        assert!(eu_params.is_distr_x_fixed());
    }

    #[test]
    fn test_default_sizes() {
        let dgp = UnivariateFanGijbels1::<f64>::params().generate().unwrap();
        assert_eq!(dgp.nobs(), 200);
        assert_eq!(dgp.y().len(), 200);
        assert!(is_sorted(dgp.x()));
        let dgp = UnivariateFanGijbels2::<f64>::params().generate().unwrap();
        assert_eq!(dgp.nobs(), 200);
        assert!(is_sorted(dgp.x()));
        let dgp = UnivariateFanGijbels1EU::<f64>::params().generate().unwrap();
        assert_eq!(dgp.nobs(), 50);
        assert_eq!(dgp.y_true().len(), 50);
        assert!(is_sorted(dgp.x()));
    }

    #[test]
    fn test_fan_gijbels1_scenario() {
        let dgp = UnivariateFanGijbels1::<f64>::params()
            .x(&array![-1.0, 0.0, 1.0])
            .distr_noise(ConstantDistr::zero())
            .generate()
            .unwrap();
        let expected = array![-1. + 2. * (-16f64).exp(), 2., 1. + 2. * (-16f64).exp()];
        assert_abs_diff_eq!(dgp.y_true(), &expected, epsilon = 1e-15);
        assert_eq!(dgp.y(), dgp.y_true());
    }

    #[test]
    fn test_eubank_scenario() {
        let dgp = UnivariateFanGijbels1EU::<f64>::params()
            .nobs(10)
            .distr_noise(ConstantDistr::zero())
            .generate()
            .unwrap();
        assert_eq!(dgp.nobs(), 10);
        assert!(dgp.x().iter().all(|v| (0. ..=1.).contains(v)));
        assert!(is_sorted(dgp.x()));
        for (x, y) in dgp.x().iter().zip(dgp.y_true().iter()) {
            assert_eq!(*y, *x + 0.5 * (-50. * (*x - 0.5) * (*x - 0.5)).exp());
        }
        assert_eq!(dgp.y(), dgp.y_true());
    }

    #[test]
    fn test_eubank_ignores_distr_x() {
        for seed in 0..20 {
            let dgp = UnivariateFanGijbels1EU::<f64>::params()
                .distr_x(NormalDistr::new(100., 10.).unwrap())
                .seed(seed)
                .generate()
                .unwrap();
            assert!(dgp.x().iter().all(|v| (0. ..=1.).contains(v)));
        }
    }

    #[test]
    fn test_eubank_uses_given_x() {
        let dgp = UnivariateFanGijbels1EU::<f64>::params()
            .x(&array![3., 2.])
            .generate()
            .unwrap();
        assert_eq!(dgp.x(), &array![2., 3.]);
    }

    #[test]
    fn test_zero_noise_all_variants() {
        let x = array![0.8, -0.3, 0.1, 1.7, -1.2];
        let sorted = array![-1.2, -0.3, 0.1, 0.8, 1.7];

        let dgp = UnivariateFanGijbels1::params()
            .x(&x)
            .distr_noise(ConstantDistr::zero())
            .generate()
            .unwrap();
        assert_eq!(dgp.x(), &sorted);
        assert_eq!(dgp.y(), dgp.y_true());
        assert_eq!(dgp.y_true(), &sorted.mapv(fg1));

        let dgp = UnivariateFanGijbels2::params()
            .x(&x)
            .distr_noise(ConstantDistr::zero())
            .generate()
            .unwrap();
        assert_eq!(dgp.y(), dgp.y_true());
        assert_eq!(dgp.y_true(), &sorted.mapv(fg2));

        let dgp: UnivariateDgp<f64, _> = UnivariateFanGijbels1EU::params()
            .x(&x)
            .distr_noise(ConstantDistr::zero())
            .generate()
            .unwrap();
        assert_eq!(dgp.y(), dgp.y_true());
        assert_eq!(dgp.y_true(), &sorted.mapv(fg1eu));
    }
}
