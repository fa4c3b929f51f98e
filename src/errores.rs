//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::fmt;
use std::io;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeGeneracion(ErrorGeneracion),
    ErrorDeParseo(ErrorDuranteParseo),
}

impl From<ErrorGeneracion> for Error {
    fn from(err: ErrorGeneracion) -> Self {
        Error::ErrorDeGeneracion(err)
    }
}

impl From<ErrorDuranteParseo> for Error {
    fn from(err: ErrorDuranteParseo) -> Self {
        Error::ErrorDeParseo(err)
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al escribir el archivo de productos. Se conserva el error de
/// entrada/salida original para poder informarlo.
#[derive(Debug)]
pub enum ErrorGeneracion {
    NoSePudoCrearDirectorio(io::Error),
    NoSePudoEscribirArchivo(io::Error),
    ErrorSerializando,
}

impl From<io::Error> for ErrorGeneracion {
    fn from(err: io::Error) -> Self {
        ErrorGeneracion::NoSePudoEscribirArchivo(err)
    }
}

impl From<serde_json::Error> for ErrorGeneracion {
    fn from(_err: serde_json::Error) -> Self {
        ErrorGeneracion::ErrorSerializando
    }
}

impl fmt::Display for ErrorGeneracion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoSePudoCrearDirectorio(e) => write!(f, "no se pudo crear el directorio: {e}"),
            Self::NoSePudoEscribirArchivo(e) => write!(f, "no se pudo escribir el archivo: {e}"),
            Self::ErrorSerializando => write!(f, "no se pudieron serializar los productos"),
        }
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// en el parseo de los archivos de productos
#[derive(Debug)]
pub enum ErrorDuranteParseo {
    NoSePudoAbrirArchivo,
    FormatoArchivoInvalido,
}

impl From<io::Error> for ErrorDuranteParseo {
    fn from(_err: io::Error) -> Self {
        ErrorDuranteParseo::NoSePudoAbrirArchivo
    }
}

impl From<serde_json::Error> for ErrorDuranteParseo {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return ErrorDuranteParseo::NoSePudoAbrirArchivo;
        }
        ErrorDuranteParseo::FormatoArchivoInvalido
    }
}
