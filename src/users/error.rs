use thiserror::Error;

/// Validation failures raised when creating a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Nome, email e idade são obrigatórios.")]
    MissingFields,
    #[error("O usuário deve ser maior de idade.")]
    Underage,
    #[error("Email inválido.")]
    InvalidEmail,
    #[error("Nome e email não podem conter caracteres de controle.")]
    ControlCharacters,
}
