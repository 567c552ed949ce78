// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::{
        aluno::{Aluno, AlunoForm, FiltroAlunos},
        modal::EstadoModal,
        situacao::Situacao,
    },
    services::aluno_service,
    state::AppState,
    templates::AlunosPage,
    web::{redirecionar_com_sucesso, renderizar, ModalParams},
};
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Response},
};
use chrono::Local;

/// GET /alunos
pub async fn pagina_alunos(
    State(state): State<AppState>,
    Query(filtros): Query<FiltroAlunos>,
    Query(params): Query<ModalParams>,
) -> AppResult<Html<String>> {
    tracing::debug!("GET /alunos: {:?} {:?}", filtros, params);

    let (alunos, status) = aluno_service::carregar(&state.api).await;
    let estado = params.resolver(&alunos, Aluno::default);
    let hoje = Local::now().date_naive();

    renderizar(&AlunosPage::montar(&alunos, &status, filtros, &estado, params.sucesso, hoje))
}

/// POST /alunos/salvar
pub async fn salvar_aluno(
    State(state): State<AppState>,
    Form(form): Form<AlunoForm>,
) -> AppResult<Response> {
    tracing::info!("POST /alunos/salvar: '{}'", form.nome);

    // O status escolhido precisa da lista para virar objeto completo. Sem ela
    // não se grava nada: o PUT apagaria o status do aluno.
    let status = match aluno_service::listar_status(&state.api).await {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("Falha ao carregar status, gravação cancelada: {}", e);
            let rascunho = form.rascunho(&[]);
            return reexibir_edicao(&state, rascunho, &[], aluno_service::ERRO_CARREGAR_STATUS).await;
        }
    };
    let rascunho = form.rascunho(&status);

    match aluno_service::submeter(&state.api, &rascunho).await {
        Ok(gravacao) => Ok(redirecionar_com_sucesso(
            "/alunos",
            aluno_service::mensagem_sucesso(gravacao),
        )
        .into_response()),
        Err(mensagem) => reexibir_edicao(&state, rascunho, &status, &mensagem).await,
    }
}

async fn reexibir_edicao(
    state: &AppState,
    rascunho: Aluno,
    status: &[Situacao],
    mensagem: &str,
) -> AppResult<Response> {
    let alunos = aluno_service::listar(&state.api).await.unwrap_or_else(|e| {
        tracing::error!("Falha ao carregar alunos: {}", e);
        Vec::new()
    });
    let estado = EstadoModal::Editando { rascunho, erro: None }.falhar(mensagem);
    let hoje = Local::now().date_naive();
    let pagina = AlunosPage::montar(&alunos, status, FiltroAlunos::default(), &estado, None, hoje);
    Ok(renderizar(&pagina)?.into_response())
}
