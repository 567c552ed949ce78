// src/web/mod.rs
pub mod aluno_handlers;
pub mod dashboard_handlers;
pub mod matricula_handlers;
pub mod routes;
pub mod turma_handlers;

use crate::{
    error::{AppError, AppResult},
    models::{modal::EstadoModal, Registro},
};
use askama::Template;
use axum::response::{Html, Redirect};
use serde::Deserialize;

/// Parâmetros que decidem o estado do modal num GET de listagem:
/// `?ver=3`, `?editar=3`, `?excluir=3`, `?novo=1`, mais o banner `?sucesso=...`.
/// Os ids chegam como texto; um valor vazio ou inválido é ignorado.
#[derive(Deserialize, Debug, Default)]
pub struct ModalParams {
    pub ver: Option<String>,
    pub editar: Option<String>,
    pub excluir: Option<String>,
    pub novo: Option<String>,
    pub sucesso: Option<String>,
}

fn id_do_parametro(valor: &Option<String>) -> Option<i64> {
    valor.as_deref().and_then(|v| v.trim().parse().ok())
}

impl ModalParams {
    pub fn resolver<T: Registro + Clone>(&self, lista: &[T], novo: impl FnOnce() -> T) -> EstadoModal<T> {
        if self.novo.is_some() {
            return EstadoModal::abrir(None, novo);
        }
        if let Some(id) = id_do_parametro(&self.editar) {
            return abrir_existente(lista, id).editar();
        }
        if let Some(id) = id_do_parametro(&self.excluir) {
            return abrir_existente(lista, id).pedir_exclusao();
        }
        match id_do_parametro(&self.ver) {
            Some(id) => abrir_existente(lista, id),
            None => EstadoModal::Fechado,
        }
    }
}

/// Confirmação de exclusão que falhou. O registo vem da lista recarregada ou,
/// se esta não o tiver (backend degradado), de `so_id`, para o erro nunca se perder.
pub fn exclusao_falhada<T: Registro + Clone>(
    lista: &[T],
    id: i64,
    so_id: impl FnOnce() -> T,
    mensagem: String,
) -> EstadoModal<T> {
    let registro = lista
        .iter()
        .find(|r| r.id() == Some(id))
        .cloned()
        .unwrap_or_else(so_id);
    EstadoModal::ConfirmandoExclusao {
        registro,
        erro: Some(mensagem),
    }
}

/// Abre um registo da lista pelo id. Id desconhecido deixa o modal fechado.
pub fn abrir_existente<T: Registro + Clone>(lista: &[T], id: i64) -> EstadoModal<T> {
    match lista.iter().find(|r| r.id() == Some(id)) {
        Some(r) => EstadoModal::Visualizando(r.clone()),
        None => {
            tracing::warn!("Registo {} não encontrado na lista carregada.", id);
            EstadoModal::Fechado
        }
    }
}

pub fn renderizar<T: Template>(template: &T) -> AppResult<Html<String>> {
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Falha ao renderizar template: {}", e);
            Err(AppError::Template(e))
        }
    }
}

/// Post/Redirect/Get: volta à lista (que é recarregada) com o banner de sucesso.
pub fn redirecionar_com_sucesso(base: &str, mensagem: &str) -> Redirect {
    let redirect_url = format!("{}?sucesso={}", base, urlencoding::encode(mensagem));
    Redirect::to(&redirect_url)
}
