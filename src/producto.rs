//! Este modulo define la estructura de productos, que es la que se escribe
//! en el archivo de datos de muestra y la que leen quienes lo consumen

use std::{fmt, fs::File, io::Read, path::Path};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::aliases::IdProducto;
use crate::errores::ErrorDuranteParseo;

/// Un producto esta definido por su id, su nombre, su categoria y una descripcion.
/// El orden de los campos es el orden de las claves en el json.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Producto {
    id: String,
    #[serde(rename = "productName")]
    nombre: String,
    #[serde(rename = "category")]
    categoria: String,
    #[serde(rename = "description")]
    descripcion: String,
}

impl Producto {
    /// Crea un nuevo producto con los parametros dados
    pub fn new(id: IdProducto, nombre: String, categoria: &str, descripcion: String) -> Self {
        Self {
            id: id.to_string(),
            nombre,
            categoria: categoria.to_string(),
            descripcion,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_nombre(&self) -> &str {
        &self.nombre
    }

    pub fn get_categoria(&self) -> &str {
        &self.categoria
    }

    pub fn get_descripcion(&self) -> &str {
        &self.descripcion
    }

    /// Texto con el que se indexa el producto para la busqueda semantica
    pub fn texto_embedding(&self) -> String {
        format!("{} {} {}", self.nombre, self.categoria, self.descripcion)
    }
}

impl fmt::Display for Producto {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "producto {} \"{}\" ",
            self.id.as_str().blue(),
            self.nombre.as_str().green()
        )?;
        write!(f, "en {}", self.categoria.as_str().yellow())
    }
}

/// Parsea un lector de bytes (en formato json) en un vector de productos. Simplemente
/// encapsula las funcionalidades de la libreria de json.
pub fn from_reader(reader: &mut dyn Read) -> serde_json::Result<Vec<Producto>> {
    serde_json::from_reader(reader)
}

/// Obtiene los productos de un archivo generado previamente
pub fn obtener_productos<P: AsRef<Path>>(ruta: P) -> Result<Vec<Producto>, ErrorDuranteParseo> {
    let mut productos_json = File::open(ruta)?;
    let productos = from_reader(&mut productos_json)?;
    Ok(productos)
}

#[cfg(test)]
mod test {
    use super::*;

    fn crear_producto() -> Producto {
        Producto::new(
            7,
            "담백한 오트밀 80g".to_string(),
            "건강식품",
            "설명".to_string(),
        )
    }

    #[test]
    fn el_id_se_guarda_como_texto() {
        let producto = crear_producto();
        assert_eq!(producto.get_id(), "7");
    }

    #[test]
    fn texto_embedding_junta_nombre_categoria_y_descripcion() {
        let producto = crear_producto();
        assert_eq!(producto.texto_embedding(), "담백한 오트밀 80g 건강식품 설명");
    }

    #[test]
    fn se_serializa_con_las_claves_en_orden() {
        let json = serde_json::to_string(&crear_producto()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"7","productName":"담백한 오트밀 80g","category":"건강식품","description":"설명"}"#
        );
    }

    #[test]
    fn from_reader_lee_un_arreglo_de_productos() {
        let json = r#"[{"id":"1","productName":"a","category":"b","description":"c"}]"#;
        let productos = from_reader(&mut json.as_bytes()).unwrap();

        assert_eq!(productos.len(), 1);
        assert_eq!(productos[0].get_nombre(), "a");
        assert_eq!(productos[0].get_categoria(), "b");
        assert_eq!(productos[0].get_descripcion(), "c");
    }

    #[test]
    fn from_reader_falla_si_falta_un_campo() {
        let json = r#"[{"id":"1","productName":"a","category":"b"}]"#;
        assert!(from_reader(&mut json.as_bytes()).is_err());
    }

    #[test]
    fn display_incluye_id_y_categoria() {
        colored::control::set_override(false);
        let texto = crear_producto().to_string();
        assert_eq!(texto, "producto 7 \"담백한 오트밀 80g\" en 건강식품");
    }

    #[test]
    fn obtener_productos_falla_si_no_existe_el_archivo() {
        let res = obtener_productos("no/existe/food-products.json");
        assert!(matches!(res, Err(ErrorDuranteParseo::NoSePudoAbrirArchivo)));
    }

    #[test]
    fn obtener_productos_falla_si_el_json_es_invalido() {
        let ruta =
            std::env::temp_dir().join(format!("canasta-invalido-{}.json", std::process::id()));
        std::fs::write(&ruta, "{ esto no es json").unwrap();

        let res = obtener_productos(&ruta);
        assert!(matches!(res, Err(ErrorDuranteParseo::FormatoArchivoInvalido)));
    }
}
