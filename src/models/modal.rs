// src/models/modal.rs
use crate::models::Registro;

/// Estado do modal de edição de um ecrã. Um único enum em vez de vários booleanos,
/// para que combinações como "a editar com o modal fechado" não existam.
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoModal<T> {
    Fechado,
    /// Registo carregado, campos desativados.
    Visualizando(T),
    /// Campos ativos; `erro` guarda a mensagem da última tentativa de gravar.
    Editando { rascunho: T, erro: Option<String> },
    /// Pedido de confirmação antes do DELETE.
    ConfirmandoExclusao { registro: T, erro: Option<String> },
}

impl<T: Registro> EstadoModal<T> {
    /// Abrir com um registo mostra-o em modo de leitura; sem registo começa
    /// logo a editar um rascunho novo.
    pub fn abrir(registro: Option<T>, novo: impl FnOnce() -> T) -> Self {
        match registro {
            Some(r) => EstadoModal::Visualizando(r),
            None => EstadoModal::Editando {
                rascunho: novo(),
                erro: None,
            },
        }
    }

    pub fn editar(self) -> Self {
        match self {
            EstadoModal::Visualizando(r) => EstadoModal::Editando {
                rascunho: r,
                erro: None,
            },
            outro => outro,
        }
    }

    /// Só registos já gravados podem ser excluídos.
    pub fn pedir_exclusao(self) -> Self {
        match self {
            EstadoModal::Visualizando(r) if r.id().is_some() => EstadoModal::ConfirmandoExclusao {
                registro: r,
                erro: None,
            },
            outro => outro,
        }
    }

    /// Volta um passo: edição de registo existente -> leitura; rascunho novo -> fechado.
    pub fn cancelar(self) -> Self {
        match self {
            EstadoModal::Editando { rascunho, .. } if rascunho.id().is_some() => {
                EstadoModal::Visualizando(rascunho)
            }
            EstadoModal::ConfirmandoExclusao { registro, .. } => EstadoModal::Visualizando(registro),
            _ => EstadoModal::Fechado,
        }
    }

    /// Falha de gravação/exclusão: o modal continua aberto com a mensagem.
    pub fn falhar(self, mensagem: impl Into<String>) -> Self {
        match self {
            EstadoModal::Editando { rascunho, .. } => EstadoModal::Editando {
                rascunho,
                erro: Some(mensagem.into()),
            },
            EstadoModal::ConfirmandoExclusao { registro, .. } => EstadoModal::ConfirmandoExclusao {
                registro,
                erro: Some(mensagem.into()),
            },
            outro => outro,
        }
    }
}

impl<T> EstadoModal<T> {
    pub fn registro(&self) -> Option<&T> {
        match self {
            EstadoModal::Fechado => None,
            EstadoModal::Visualizando(r) => Some(r),
            EstadoModal::Editando { rascunho, .. } => Some(rascunho),
            EstadoModal::ConfirmandoExclusao { registro, .. } => Some(registro),
        }
    }

    pub fn em_edicao(&self) -> bool {
        matches!(self, EstadoModal::Editando { .. })
    }

    pub fn confirmando(&self) -> bool {
        matches!(self, EstadoModal::ConfirmandoExclusao { .. })
    }

    pub fn erro(&self) -> Option<&str> {
        match self {
            EstadoModal::Editando { erro, .. } | EstadoModal::ConfirmandoExclusao { erro, .. } => {
                erro.as_deref()
            }
            _ => None,
        }
    }
}
