use aliases::IdProducto;

pub mod aliases;
pub mod errores;
pub mod generators;
pub mod producto;

/// Cantidad total de productos a generar
pub const CANTIDAD_PRODUCTOS: IdProducto = 120;

/// Ultimo id generado con la regla de snacks, los siguientes usan
/// la regla de las otras categorias
pub const LIMITE_SNACKS: IdProducto = 70;

/// Ruta del archivo de productos, relativa al directorio de ejecucion
pub const ARCHIVO_PRODUCTOS: &str = "src/main/resources/data/food-products.json";

/// Indica si un id de producto corresponde a un snack
pub fn es_snack(id: IdProducto) -> bool {
    id <= LIMITE_SNACKS
}
