use thiserror::Error;

/// Erros comuns da biblioteca MEV Guard
#[derive(Error, Debug)]
pub enum Error {
    /// Configuração inválida (variável de ambiente ou argumento)
    #[error("Configuração inválida: {0}")]
    InvalidConfig(String),

    /// Erro de codificação de dados
    #[error("Erro de codificação: {0}")]
    EncodeError(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::EncodeError(err.to_string())
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
