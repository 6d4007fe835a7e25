//! A module for the known mean functions of the data generating processes.
//! They are non-linear univariate shapes used to challenge non-parametric
//! regression smoothers:
//! * [fg1]: linear trend plus a hump at 0 (Fan and Gijbels example function 1),
//! * [fg1eu]: linear trend plus a narrow hump at 0.5 (Eubank variant of the former),
//! * [fg2]: sine plus a hump at 0 (Fan and Gijbels example function 2).
//!
//! Reference: Fan, Jianqing, and Irene Gijbels. 1992. "Variable Bandwidth and Local
//! Linear Regression Smoothers." The Annals of Statistics 20 (4): 2008-2036.

use linfa::Float;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use paste::paste;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fan and Gijbels example function 1: `x + 2 exp(-16 x^2)`
pub fn fg1<F: Float>(x: F) -> F {
    x + F::cast(2.) * (F::cast(-16.) * x * x).exp()
}

/// Eubank variant of Fan and Gijbels example function 1: `x + 0.5 exp(-50 (x - 0.5)^2)`
pub fn fg1eu<F: Float>(x: F) -> F {
    let d = x - F::cast(0.5);
    x + F::cast(0.5) * (F::cast(-50.) * d * d).exp()
}

/// Fan and Gijbels example function 2: `sin(2x) + 2 exp(-16 x^2)`
pub fn fg2<F: Float>(x: F) -> F {
    (F::cast(2.) * x).sin() + F::cast(2.) * (F::cast(-16.) * x * x).exp()
}

/// A trait for the deterministic mean of a univariate data generating process
pub trait MeanFunction<F: Float>: Clone + Copy + Default + fmt::Display + Sync {
    /// Mean value at the scalar `x`
    fn apply(&self, x: F) -> F;

    /// Mean values at the given `x` points specified as a (n,) vector.
    /// Returns a (n,) vector.
    fn value(&self, x: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Array1<F> {
        x.mapv(|v| self.apply(v))
    }
}

/// Linear trend plus a hump as mean of the DGP
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub struct FanGijbels1Mean();

impl<F: Float> MeanFunction<F> for FanGijbels1Mean {
    fn apply(&self, x: F) -> F {
        fg1(x)
    }
}

/// Linear trend plus a narrow hump centered at 0.5 as mean of the DGP (Eubank p.179f)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub struct Eubank1Mean();

impl<F: Float> MeanFunction<F> for Eubank1Mean {
    fn apply(&self, x: F) -> F {
        fg1eu(x)
    }
}

/// Sine plus a hump as mean of the DGP
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub struct FanGijbels2Mean();

impl<F: Float> MeanFunction<F> for FanGijbels2Mean {
    fn apply(&self, x: F) -> F {
        fg2(x)
    }
}

macro_rules! declare_mean_util_impls {
    ($func:ident) => {
        paste! {
            impl fmt::Display for [<$func Mean>] {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}Mean", stringify!($func))
                }
            }

            impl From<[<$func Mean>]> for String {
                fn from(_item: [<$func Mean>]) -> Self {
                    [<$func Mean>]().to_string()
                }
            }

            impl TryFrom<String> for [<$func Mean>] {
                type Error = &'static str;
                fn try_from(s: String) -> Result<Self, Self::Error> {
                    if s == stringify!([<$func Mean>]) {
                        Ok(Self::default())
                    } else {
                        Err(concat!(
                            "Bad string value for ",
                            stringify!([<$func Mean>]),
                            ", should be '",
                            stringify!([<$func Mean>]),
                            "'"
                        ))
                    }
                }
            }
        }
    };
}

declare_mean_util_impls!(FanGijbels1);
declare_mean_util_impls!(Eubank1);
declare_mean_util_impls!(FanGijbels2);
