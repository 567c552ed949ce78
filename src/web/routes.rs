// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, dashboard_handlers, matricula_handlers, turma_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    let aluno_routes = Router::new()
        .route("/", get(aluno_handlers::pagina_alunos))
        .route("/salvar", post(aluno_handlers::salvar_aluno));

    let turma_routes = Router::new()
        .route("/", get(turma_handlers::pagina_turmas))
        .route("/salvar", post(turma_handlers::salvar_turma))
        .route("/{id}/excluir", post(turma_handlers::excluir_turma));

    let matricula_routes = Router::new()
        .route("/", get(matricula_handlers::pagina_matriculas))
        .route("/salvar", post(matricula_handlers::salvar_matricula))
        .route("/{id}/excluir", post(matricula_handlers::excluir_matricula));

    Router::new()
        .route("/", get(dashboard_handlers::pagina_inicial))
        .route("/dashboard", get(dashboard_handlers::pagina_dashboard))
        .route("/static/app.css", get(dashboard_handlers::estilo))
        .nest("/alunos", aluno_routes)
        .nest("/turmas", turma_routes)
        .nest("/matriculas", matricula_routes)
        .fallback(dashboard_handlers::nao_encontrado)
        .with_state(app_state)
}
