// src/web/matricula_handlers.rs
use crate::{
    error::AppResult,
    models::{
        matricula::{FiltroMatriculas, Matricula, MatriculaForm},
        modal::EstadoModal,
    },
    services::matricula_service,
    state::AppState,
    templates::MatriculasPage,
    web::{exclusao_falhada, redirecionar_com_sucesso, renderizar, ModalParams},
};
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Response},
};

/// GET /matriculas - tabela filtrada e, conforme os parâmetros, o modal.
pub async fn pagina_matriculas(
    State(state): State<AppState>,
    Query(filtros): Query<FiltroMatriculas>,
    Query(params): Query<ModalParams>,
) -> AppResult<Html<String>> {
    tracing::debug!("GET /matriculas: {:?} {:?}", filtros, params);

    let dados = matricula_service::carregar_ou_vazio(&state.api).await;
    let estado = params.resolver(&dados.matriculas, || Matricula::nova(&dados.situacoes));

    renderizar(&MatriculasPage::montar(&dados, filtros, &estado, params.sucesso))
}

/// POST /matriculas/salvar - cria (sem id) ou atualiza. Em caso de erro o modal
/// volta aberto em edição, com o rascunho e a mensagem.
pub async fn salvar_matricula(
    State(state): State<AppState>,
    Form(form): Form<MatriculaForm>,
) -> AppResult<Response> {
    tracing::info!("POST /matriculas/salvar: id={:?}", form.id);

    let dados = matricula_service::carregar_ou_vazio(&state.api).await;
    let rascunho = form.rascunho(&dados.alunos, &dados.turmas, &dados.situacoes);

    match matricula_service::submeter(&state.api, &rascunho).await {
        Ok(gravacao) => Ok(redirecionar_com_sucesso(
            "/matriculas",
            matricula_service::mensagem_sucesso(gravacao),
        )
        .into_response()),
        Err(mensagem) => {
            let estado = EstadoModal::Editando { rascunho, erro: None }.falhar(mensagem);
            let pagina = MatriculasPage::montar(&dados, FiltroMatriculas::default(), &estado, None);
            Ok(renderizar(&pagina)?.into_response())
        }
    }
}

/// POST /matriculas/{id}/excluir - só chega aqui depois da confirmação.
pub async fn excluir_matricula(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    tracing::info!("POST /matriculas/{}/excluir", id);

    match matricula_service::excluir(&state.api, id).await {
        Ok(()) => Ok(redirecionar_com_sucesso("/matriculas", matricula_service::MENSAGEM_EXCLUSAO)
            .into_response()),
        Err(mensagem) => {
            let dados = matricula_service::carregar_ou_vazio(&state.api).await;
            let so_id = || Matricula { id: Some(id), ..Matricula::default() };
            let estado = exclusao_falhada(&dados.matriculas, id, so_id, mensagem);
            let pagina = MatriculasPage::montar(&dados, FiltroMatriculas::default(), &estado, None);
            Ok(renderizar(&pagina)?.into_response())
        }
    }
}
