use env_logger::{Builder, Env};
use npreg_dgp::{
    NpyPlotter, UnivariateFanGijbels1, UnivariateFanGijbels1EU, UnivariateFanGijbels2,
};

fn main() {
    let env = Env::new().filter_or("NPREG_DGP_LOG", "info");
    let mut builder = Builder::from_env(env);
    let builder = builder.target(env_logger::Target::Stdout);
    builder.try_init().ok();

    let outdir = "target/fan_gijbels";

    println!("*** Fan and Gijbels example 1");
    let dgp = UnivariateFanGijbels1::<f64>::params()
        .seed(42)
        .generate()
        .expect("fg1 sample");
    println!("x in [{}, {}]", dgp.x()[0], dgp.x()[dgp.nobs() - 1]);
    let figure = dgp
        .plot(true, &mut NpyPlotter::new(outdir).prefix("fg1"))
        .expect("fg1 plot data");
    println!("{figure:?}\n");

    println!("*** Fan and Gijbels example 2");
    let dgp = UnivariateFanGijbels2::<f64>::params()
        .seed(42)
        .generate()
        .expect("fg2 sample");
    let figure = dgp
        .plot(true, &mut NpyPlotter::new(outdir).prefix("fg2"))
        .expect("fg2 plot data");
    println!("{figure:?}\n");

    println!("*** Eubank variant of example 1");
    let dgp = UnivariateFanGijbels1EU::<f64>::params()
        .seed(42)
        .generate()
        .expect("fg1eu sample");
    println!("x = {}", dgp.x());
    println!("y = {}", dgp.y());
    println!("noise = {}", dgp.noise());
    let figure = dgp
        .plot(false, &mut NpyPlotter::new(outdir).prefix("fg1eu"))
        .expect("fg1eu plot data");
    println!("{figure:?}");
}
