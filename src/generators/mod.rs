pub mod catalogo;
pub mod productos_gen;
