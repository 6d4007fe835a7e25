/*!
This library implements univariate data generating processes (DGP) used to test
non-parametric regression estimators (kernel, local polynomial, LOWESS smoothers...).

A DGP draws explanatory values `x`, evaluates a known mean function `y_true = mean(x)`
and adds noise to get observed responses `y = y_true + noise`. Explanatory values are
always sorted so that the true curve can be drawn directly over the sample.

Example:
```
use npreg_dgp::{UnivariateFanGijbels1, UnivariateFanGijbels1EU, UnivariateDgp, FanGijbels2Mean};

// Fan and Gijbels example 1 with its defaults: 200 observations, x ~ N(0, 1), noise ~ N(0, 0.7^2)
let dgp = UnivariateFanGijbels1::<f64>::params().generate().expect("DGP sample");
assert_eq!(dgp.x().len(), 200);

// or Eubank variant with fewer observations and a random generator seed for reproducibility
let dgp = UnivariateFanGijbels1EU::<f64>::params().nobs(10).seed(42).generate().expect("DGP sample");
assert!(dgp.x().iter().all(|&v| (0. ..=1.).contains(&v)));

// or else any mean function with custom settings
let dgp = UnivariateDgp::<f64, _>::params(FanGijbels2Mean())
    .nobs(100)
    .s_x(2.)
    .s_noise(0.1)
    .generate()
    .expect("DGP sample");
let plot_data = dgp.plot_data(true);
assert_eq!(plot_data.grid.len(), 100);
```

This library contains three examples of DGP:
* [Fan and Gijbels example 1](crate::variants::UnivariateFanGijbels1),
* [Fan and Gijbels example 2](crate::variants::UnivariateFanGijbels2),
* [Eubank variant of example 1](crate::variants::UnivariateFanGijbels1EU)

*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod algorithm;
mod distributions;
mod errors;
pub mod mean_functions;
mod parameters;
mod plot;
pub mod variants;

pub use algorithm::*;
pub use distributions::*;
pub use errors::*;
pub use mean_functions::*;
pub use parameters::*;
pub use plot::*;
pub use variants::*;
