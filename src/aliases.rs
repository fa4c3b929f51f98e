//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type IdProducto = u16;
pub type Peso = &'static str;
pub type NombreBase = &'static str;
pub type Categoria = &'static str;
pub type TablaCategorias = [(Categoria, [NombreBase; 5]); 5];
