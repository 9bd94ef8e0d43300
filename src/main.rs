// Generates the reference part and writes it to the current directory.

use counterbore::io::stl;
use counterbore::{BoreParams, BoredCylinder, Error};

const OUTPUT: &str = "CylinderWithHole.stl";

fn run() -> Result<(), Error> {
    let solid = BoredCylinder::new(BoreParams::default())?;
    stl::save_stl(&solid, OUTPUT)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{OUTPUT}: {err}");
        std::process::exit(1);
    }
}
