// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::{
        modal::EstadoModal,
        turma::{FiltroTurmas, Turma, TurmaForm},
    },
    services::turma_service,
    state::AppState,
    templates::TurmasPage,
    web::{exclusao_falhada, redirecionar_com_sucesso, renderizar, ModalParams},
};
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Response},
};

/// GET /turmas
pub async fn pagina_turmas(
    State(state): State<AppState>,
    Query(filtros): Query<FiltroTurmas>,
    Query(params): Query<ModalParams>,
) -> AppResult<Html<String>> {
    tracing::debug!("GET /turmas: {:?} {:?}", filtros, params);

    let turmas = turma_service::listar_ou_vazio(&state.api).await;
    let estado = params.resolver(&turmas, Turma::default);

    renderizar(&TurmasPage::montar(&turmas, filtros, &estado, params.sucesso))
}

/// POST /turmas/salvar
pub async fn salvar_turma(
    State(state): State<AppState>,
    Form(form): Form<TurmaForm>,
) -> AppResult<Response> {
    tracing::info!("POST /turmas/salvar: '{}'", form.nome);

    let rascunho = form.rascunho();
    match turma_service::submeter(&state.api, &rascunho).await {
        Ok(gravacao) => Ok(redirecionar_com_sucesso(
            "/turmas",
            turma_service::mensagem_sucesso(gravacao),
        )
        .into_response()),
        Err(mensagem) => {
            let turmas = turma_service::listar_ou_vazio(&state.api).await;
            let estado = EstadoModal::Editando { rascunho, erro: None }.falhar(mensagem);
            let pagina = TurmasPage::montar(&turmas, FiltroTurmas::default(), &estado, None);
            Ok(renderizar(&pagina)?.into_response())
        }
    }
}

/// POST /turmas/{id}/excluir
pub async fn excluir_turma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    tracing::info!("POST /turmas/{}/excluir", id);

    match turma_service::excluir(&state.api, id).await {
        Ok(()) => {
            Ok(redirecionar_com_sucesso("/turmas", turma_service::MENSAGEM_EXCLUSAO).into_response())
        }
        Err(mensagem) => {
            let turmas = turma_service::listar_ou_vazio(&state.api).await;
            let so_id = || Turma { id: Some(id), ..Turma::default() };
            let estado = exclusao_falhada(&turmas, id, so_id, mensagem);
            let pagina = TurmasPage::montar(&turmas, FiltroTurmas::default(), &estado, None);
            Ok(renderizar(&pagina)?.into_response())
        }
    }
}
