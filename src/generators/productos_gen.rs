//! Este modulo permite generar el archivo de productos de muestra. Los productos
//! no son aleatorios: cada uno se deriva de su id a partir de las tablas del
//! catalogo, por lo que el archivo generado es siempre el mismo. Se genera
//! en formato json, como una lista de diccionarios con id, nombre, categoria
//! y descripcion.

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use super::catalogo::{
    CATEGORIA_SNACK_IMPAR, CATEGORIA_SNACK_PAR, PESOS, PRODUCTOS_OTRAS_CATEGORIAS,
    PRODUCTOS_SNACK,
};
use crate::aliases::{IdProducto, Peso};
use crate::errores::ErrorGeneracion;
use crate::producto::Producto;
use crate::{es_snack, CANTIDAD_PRODUCTOS, LIMITE_SNACKS};

/// El ciclo de pesos se indexa con el id global, no se reinicia al
/// pasar de los snacks al resto de las categorias
fn peso_para(id: IdProducto) -> Peso {
    PESOS[usize::from(id - 1) % PESOS.len()]
}

/// Arma un producto de la linea de snacks infantiles. Los ids impares van
/// a la categoria de frutas y los pares a la de comida infantil.
pub fn construir_snack(id: IdProducto) -> Producto {
    let base = PRODUCTOS_SNACK[usize::from(id - 1) % PRODUCTOS_SNACK.len()];
    let peso = peso_para(id);
    let categoria = if id % 2 == 1 {
        CATEGORIA_SNACK_IMPAR
    } else {
        CATEGORIA_SNACK_PAR
    };
    let nombre = format!("아이들 간식 {base} {peso}");
    let descripcion = format!(
        "{nombre} 상품입니다. 아이들 간식으로 좋은 과일칩/쌀과자 계열 제품입니다. \
         추천 키워드: 아이들 간식, 과일칩, {categoria}, {base}."
    );

    Producto::new(id, nombre, categoria, descripcion)
}

/// Arma un producto de las otras categorias, que se reparten en ronda a
/// partir del primer id posterior a los snacks. El nombre base se elige con
/// el mismo indice que la categoria.
pub fn construir_otro(id: IdProducto) -> Producto {
    let indice = usize::from(id - (LIMITE_SNACKS + 1));
    let (categoria, nombres) =
        PRODUCTOS_OTRAS_CATEGORIAS[indice % PRODUCTOS_OTRAS_CATEGORIAS.len()];
    let base = nombres[indice % nombres.len()];
    let peso = peso_para(id);
    let nombre = format!("담백한 {base} {peso}");
    let descripcion = format!(
        "{nombre} 상품입니다. {categoria} 카테고리의 일반 식사용 제품이며 \
         단백질과 식사 균형에 초점을 맞췄습니다."
    );

    Producto::new(id, nombre, categoria, descripcion)
}

/// Arma el producto correspondiente a un id, que debe ser mayor a cero
pub fn construir_producto(id: IdProducto) -> Producto {
    if es_snack(id) {
        construir_snack(id)
    } else {
        construir_otro(id)
    }
}

/// Genera el vector completo de productos, ordenado por id
pub fn generar_productos() -> Vec<Producto> {
    (1..=CANTIDAD_PRODUCTOS).map(construir_producto).collect()
}

/// A partir de una ruta de archivo, genera el archivo de productos creando
/// los directorios que falten. Devuelve la cantidad de productos escritos.
/// # Errors
/// * `ErrorGeneracion::NoSePudoCrearDirectorio` si no se pudo crear algun directorio padre
/// * `ErrorGeneracion::NoSePudoEscribirArchivo` si no se pudo crear o escribir el archivo
pub fn generar_arch_productos<P: AsRef<Path>>(ruta: P) -> Result<usize, ErrorGeneracion> {
    let ruta = ruta.as_ref();
    if let Some(directorio) = ruta.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(directorio).map_err(ErrorGeneracion::NoSePudoCrearDirectorio)?;
    }

    let productos = generar_productos();
    let json_data = serde_json::to_string_pretty(&productos)?;
    let mut file = File::create(ruta)?;
    file.write_all(json_data.as_bytes())?;

    Ok(productos.len())
}
