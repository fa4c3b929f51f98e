//! Genera el archivo deterministico de productos de muestra en
//! `src/main/resources/data/food-products.json`

use canasta::errores::Error;
use canasta::generators::productos_gen::generar_arch_productos;
use canasta::ARCHIVO_PRODUCTOS;
use clap::Parser;
use colored::Colorize;

/// Generador de los productos de muestra. No recibe parametros, el
/// contenido depende solo de las tablas del catalogo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Generador {}

fn main() -> Result<(), Error> {
    let _generador = Generador::parse();

    let cantidad = generar_arch_productos(ARCHIVO_PRODUCTOS).map_err(|e| {
        eprintln!("{} {}", "Error en creacion:".red(), e);
        e
    })?;

    println!(
        "se generaron {} productos deterministicos -> {}",
        cantidad.to_string().blue(),
        ARCHIVO_PRODUCTOS.green()
    );
    Ok(())
}
