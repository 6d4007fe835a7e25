use crate::algorithm::UnivariateDgp;
use crate::errors::Result;
use crate::mean_functions::MeanFunction;
use linfa::Float;
use log::debug;
use ndarray::Array1;
use ndarray_npy::{write_npy, WritableElement};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of points of the grid used to draw the mean function
pub const PLOT_GRID_SIZE: usize = 100;
/// Label of the mean function curve
pub const DGP_MEAN_LABEL: &str = "dgp mean";

/// Data handed to a [`Plotter`]: the optional scatter of the sample
/// and the mean function curve over a dense grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData<F: Float> {
    /// Sample points (x, y), when requested
    pub scatter: Option<(Array1<F>, Array1<F>)>,
    /// Evenly spaced points spanning [min(x), max(x)]
    pub grid: Array1<F>,
    /// Mean function values on the grid
    pub curve: Array1<F>,
    /// Label of the curve
    pub label: &'static str,
}

/// A plotting collaborator able to render [`PlotData`]
pub trait Plotter<F: Float> {
    /// Rendered figure
    type Figure;

    /// Renders the scatter (if any) and the mean curve
    fn render(&mut self, data: &PlotData<F>) -> Result<Self::Figure>;
}

impl<F: Float, M: MeanFunction<F>> UnivariateDgp<F, M> {
    /// Plot data with mean function evaluated on [PLOT_GRID_SIZE] points,
    /// the sample scatter is added if `scatter` is true.
    pub fn plot_data(&self, scatter: bool) -> PlotData<F> {
        self.plot_data_with_resolution(scatter, PLOT_GRID_SIZE)
    }

    /// Plot data with mean function evaluated on `n` evenly spaced points
    /// between min(x) and max(x).
    pub fn plot_data_with_resolution(&self, scatter: bool, n: usize) -> PlotData<F> {
        // x is sorted and non empty
        let (xmin, xmax) = (self.x[0], self.x[self.x.len() - 1]);
        let grid = Array1::linspace(xmin, xmax, n);
        let curve = self.mean.value(&grid);
        PlotData {
            scatter: scatter.then(|| (self.x.to_owned(), self.y.to_owned())),
            grid,
            curve,
            label: DGP_MEAN_LABEL,
        }
    }

    /// Hands plot data to the given plotter and returns its figure
    pub fn plot<P: Plotter<F>>(&self, scatter: bool, plotter: &mut P) -> Result<P::Figure> {
        plotter.render(&self.plot_data(scatter))
    }
}

/// Files written by [`NpyPlotter`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpyFigure {
    /// Scatter x and y files, when scatter was requested
    pub scatter: Option<(PathBuf, PathBuf)>,
    /// Grid file
    pub grid: PathBuf,
    /// Mean curve file
    pub curve: PathBuf,
}

/// A plotter saving plot data as `.npy` files for external rendering
/// (e.g. with matplotlib).
///
/// Files are named `<prefix>_x.npy`, `<prefix>_y.npy`, `<prefix>_grid.npy`
/// and `<prefix>_curve.npy` within the output directory.
#[derive(Clone, Debug)]
pub struct NpyPlotter {
    outdir: PathBuf,
    prefix: String,
}

impl NpyPlotter {
    /// Constructor given an output directory, created if missing
    pub fn new<P: AsRef<Path>>(outdir: P) -> Self {
        NpyPlotter {
            outdir: outdir.as_ref().to_path_buf(),
            prefix: "dgp".to_string(),
        }
    }

    /// Set file name prefix
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    fn path(&self, name: &str) -> PathBuf {
        self.outdir.join(format!("{}_{name}.npy", self.prefix))
    }
}

impl<F: Float + WritableElement> Plotter<F> for NpyPlotter {
    type Figure = NpyFigure;

    fn render(&mut self, data: &PlotData<F>) -> Result<NpyFigure> {
        fs::create_dir_all(&self.outdir)?;
        let scatter = match &data.scatter {
            Some((x, y)) => {
                let (xfile, yfile) = (self.path("x"), self.path("y"));
                write_npy(&xfile, x)?;
                write_npy(&yfile, y)?;
                Some((xfile, yfile))
            }
            None => None,
        };
        let (grid, curve) = (self.path("grid"), self.path("curve"));
        write_npy(&grid, &data.grid)?;
        write_npy(&curve, &data.curve)?;
        debug!("Plot data '{}' saved in {:?}", data.label, self.outdir);
        Ok(NpyFigure {
            scatter,
            grid,
            curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::ConstantDistr;
    use crate::mean_functions::{fg1, FanGijbels1Mean};
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use ndarray_npy::read_npy;

    fn sample() -> UnivariateDgp<f64, FanGijbels1Mean> {
        UnivariateDgp::params(FanGijbels1Mean())
            .x(&array![0.5, -2., 1., 3.])
            .distr_noise(ConstantDistr(0.1))
            .generate()
            .expect("DGP sample")
    }

    #[test]
    fn test_plot_data() {
        let dgp = sample();
        let data = dgp.plot_data(true);
        assert_eq!(data.grid.len(), PLOT_GRID_SIZE);
        assert_abs_diff_eq!(data.grid[0], -2.);
        assert_abs_diff_eq!(data.grid[PLOT_GRID_SIZE - 1], 3., epsilon = 1e-12);
        assert_eq!(data.curve, data.grid.mapv(fg1));
        assert_eq!(data.label, "dgp mean");
        let (x, y) = data.scatter.expect("scatter");
        assert_eq!(&x, dgp.x());
        assert_eq!(&y, dgp.y());
    }

    #[test]
    fn test_plot_data_without_scatter() {
        let data = sample().plot_data_with_resolution(false, 11);
        assert!(data.scatter.is_none());
        assert_abs_diff_eq!(data.grid, Array1::linspace(-2., 3., 11));
    }

    #[derive(Default)]
    struct Recorder {
        calls: usize,
    }

    impl Plotter<f64> for Recorder {
        type Figure = (bool, usize);

        fn render(&mut self, data: &PlotData<f64>) -> Result<Self::Figure> {
            self.calls += 1;
            Ok((data.scatter.is_some(), data.grid.len()))
        }
    }

    #[test]
    fn test_plot() {
        let mut plotter = Recorder::default();
        let dgp = sample();
        assert_eq!((false, PLOT_GRID_SIZE), dgp.plot(false, &mut plotter).unwrap());
        assert_eq!((true, PLOT_GRID_SIZE), dgp.plot(true, &mut plotter).unwrap());
        assert_eq!(plotter.calls, 2);
    }

    #[test]
    fn test_npy_plotter() {
        let dgp = sample();
        let mut plotter = NpyPlotter::new("target/tests").prefix("fg1_plot");
        let figure = dgp.plot(true, &mut plotter).expect("plot saved");
        let (xfile, _) = figure.scatter.expect("scatter saved");
        let x: Array1<f64> = read_npy(xfile).expect("x loaded");
        assert_eq!(&x, dgp.x());
        let curve: Array1<f64> = read_npy(figure.curve).expect("curve loaded");
        assert_eq!(curve.len(), PLOT_GRID_SIZE);
    }
}
