use orthovec::{Vector, find_pu_vector};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), orthovec::VecError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut a: Vector<f64> = Vector::new();
    a.read_from(&mut io::stdin().lock(), &mut io::stdout())?;

    let r = find_pu_vector(&a)?;
    println!("a          = {}", a);
    println!("orthogonal = {}", r);
    println!("a . r      = {}", r.dot(&a)?);
    Ok(())
}
