// tests/matriculas_fluxo.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{get, post_form, BackendFalso};

async fn backend_com_dados() -> BackendFalso {
    let backend = BackendFalso::iniciar().await;
    backend.responder(
        Method::GET,
        "/api/matriculas",
        200,
        json!([{
            "id": 5,
            "aluno": { "id": 1, "nome": "Ana Silva", "matricula": 5 },
            "turma": { "id": 7, "nome": "Maternal A", "maximoAlunos": 10 },
            "situacao": { "id": 1, "descricao": "Ativa" },
            "dataMatricula": "2025-01-10",
            "inicio": "2025-02-03",
            "termino": null,
            "observacoes": null
        }]),
    );
    backend.responder(
        Method::GET,
        "/api/alunos",
        200,
        json!([
            { "id": 1, "nome": "Ana Silva", "matricula": 5 },
            { "id": 2, "nome": "Bruno Costa" },
            { "id": 3, "nome": "Álvaro Dias", "matricula": null }
        ]),
    );
    backend.responder(
        Method::GET,
        "/api/turmas",
        200,
        json!([
            { "id": 7, "nome": "Maternal A", "maximoAlunos": 10 },
            { "id": 8, "nome": "Jardim B" }
        ]),
    );
    backend.responder(
        Method::GET,
        "/api/matricula-situacoes",
        200,
        json!([
            { "id": 1, "descricao": "Ativa" },
            { "id": 2, "descricao": "Cancelada" }
        ]),
    );
    backend
}

fn formulario<'a>(turma_id: &'a str, data: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("id", ""),
        ("aluno_id", "2"),
        ("turma_id", turma_id),
        ("situacao_id", "1"),
        ("data_matricula", data),
        ("inicio", "03/02/2025"),
        ("termino", "12122025"),
        ("observacoes", ""),
    ]
}

#[tokio::test]
async fn lista_mostra_datas_no_formato_brasileiro() {
    let backend = backend_com_dados().await;
    let resp = get(backend.app(), "/matriculas").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Ana Silva"));
    assert!(resp.html.contains("10/01/2025"));
    assert!(resp.html.contains("03/02/2025"));
    assert!(!resp.html.contains("modal-fundo"));
}

#[tokio::test]
async fn filtro_por_aluno_esconde_as_outras_linhas() {
    let backend = backend_com_dados().await;

    let resp = get(backend.app(), "/matriculas?aluno=bruno").await;
    assert!(resp.html.contains("Nenhuma matrícula encontrada."));

    let resp = get(backend.app(), "/matriculas?aluno=ANA&situacao=ativa").await;
    assert!(!resp.html.contains("Nenhuma matrícula encontrada."));
}

#[tokio::test]
async fn nova_matricula_so_oferece_alunos_sem_matricula() {
    let backend = backend_com_dados().await;
    let resp = get(backend.app(), "/matriculas?novo=1").await;

    assert!(resp.html.contains("modal-fundo"));
    assert!(resp.html.contains(r#"<option value="2" >Bruno Costa</option>"#));
    assert!(resp.html.contains("Álvaro Dias"));
    assert!(!resp.html.contains(r#"<option value="1" >Ana Silva</option>"#));
    // "Álvaro" ordena antes de "Bruno"
    let alvaro = resp.html.find("Álvaro Dias").unwrap();
    let bruno = resp.html.find("Bruno Costa").unwrap();
    assert!(alvaro < bruno);
}

#[tokio::test]
async fn criar_matricula_redireciona_com_banner() {
    let backend = backend_com_dados().await;
    backend.responder(Method::POST, "/api/matriculas", 201, json!({ "id": 6 }));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("8", "15012025")).await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.sucesso().as_deref(), Some("🎉 Matrícula criada!"));

    let escritas = backend.escritas();
    assert_eq!(escritas.len(), 1);
    assert_eq!(escritas[0].metodo, Method::POST);
    assert_eq!(
        escritas[0].corpo,
        Some(json!({
            "aluno": { "id": 2 },
            "turma": { "id": 8 },
            "situacao": { "id": 1 },
            "dataMatricula": "2025-01-15",
            "inicio": "2025-02-03",
            "termino": "2025-12-12",
            "observacoes": ""
        }))
    );
}

#[tokio::test]
async fn editar_matricula_usa_put() {
    let backend = backend_com_dados().await;
    backend.responder(Method::PUT, "/api/matriculas/5", 200, json!({ "id": 5 }));

    let mut campos = formulario("7", "10/01/2025");
    campos[0] = ("id", "5");
    campos[1] = ("aluno_id", "1");
    let resp = post_form(backend.app(), "/matriculas/salvar", &campos).await;

    assert_eq!(resp.sucesso().as_deref(), Some("✅ Matrícula atualizada!"));
    assert_eq!(backend.escritas()[0].caminho, "/api/matriculas/5");
}

#[tokio::test]
async fn turma_em_falta_nao_chega_ao_backend() {
    let backend = backend_com_dados().await;
    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("", "10/01/2025")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Selecione a turma."));
    assert!(backend.escritas().is_empty());
}

#[tokio::test]
async fn data_invalida_nao_chega_ao_backend() {
    let backend = backend_com_dados().await;
    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("7", "31/02/2024")).await;

    assert!(resp.html.contains("Informe uma Data da matrícula válida (dd/mm/aaaa)."));
    // O rascunho volta ao formulário em edição.
    assert!(resp.html.contains(r#"value="31/02/2024""#));
    assert!(backend.escritas().is_empty());
}

#[tokio::test]
async fn termino_em_falta_nao_chega_ao_backend() {
    let backend = backend_com_dados().await;
    let mut campos = formulario("7", "10/01/2025");
    campos[6] = ("termino", "");
    let resp = post_form(backend.app(), "/matriculas/salvar", &campos).await;

    assert!(resp.html.contains("Informe uma data de Término válida (dd/mm/aaaa)."));
    assert!(backend.escritas().is_empty());
}

#[tokio::test]
async fn conflito_mostra_mensagem_de_matricula_ativa() {
    let backend = backend_com_dados().await;
    backend.responder(Method::POST, "/api/matriculas", 409, json!({ "erro": "duplicada" }));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("7", "10/01/2025")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Aluno já possui matrícula ATIVA nesta turma."));
    assert!(resp.html.contains("Salvar"));
}

#[tokio::test]
async fn turma_cheia_mostra_sem_vagas() {
    let backend = backend_com_dados().await;
    backend.responder(Method::POST, "/api/matriculas", 422, json!({}));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("7", "10/01/2025")).await;

    assert!(resp.html.contains("Turma sem vagas."));
}

#[tokio::test]
async fn outro_erro_http_mostra_mensagem_generica() {
    let backend = backend_com_dados().await;
    backend.responder(Method::POST, "/api/matriculas", 500, json!({}));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("7", "10/01/2025")).await;

    assert!(resp.html.contains("Erro ao salvar matrícula."));
}

#[tokio::test]
async fn confirmacao_de_exclusao_pergunta_pelo_aluno_e_turma() {
    let backend = backend_com_dados().await;
    let resp = get(backend.app(), "/matriculas?excluir=5").await;

    assert!(resp.html.contains("Excluir matrícula de Ana Silva na turma Maternal A?"));
    assert!(resp.html.contains(r#"action="/matriculas/5/excluir""#));
}

#[tokio::test]
async fn excluir_matricula_redireciona() {
    let backend = backend_com_dados().await;
    backend.responder(Method::DELETE, "/api/matriculas/5", 200, json!(null));

    let resp = post_form(backend.app(), "/matriculas/5/excluir", &[]).await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.sucesso().as_deref(), Some("🗑️ Matrícula excluída."));
}

#[tokio::test]
async fn falha_ao_excluir_mantem_confirmacao_aberta() {
    let backend = backend_com_dados().await;
    backend.responder(Method::DELETE, "/api/matriculas/5", 500, json!({}));

    let resp = post_form(backend.app(), "/matriculas/5/excluir", &[]).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Erro ao excluir matrícula."));
    assert!(resp.html.contains("Confirmar exclusão"));
}

#[tokio::test]
async fn backend_em_baixo_deixa_o_ecra_vazio() {
    let backend = BackendFalso::iniciar().await;
    let resp = get(backend.app(), "/matriculas").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Nenhuma matrícula encontrada."));
}

#[tokio::test]
async fn lista_de_matriculas_indisponivel_nao_bloqueia_gravacao() {
    let backend = backend_com_dados().await;
    backend.responder(Method::GET, "/api/matriculas", 404, json!({}));
    backend.responder(Method::POST, "/api/matriculas", 201, json!({ "id": 6 }));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("8", "15/01/2025")).await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.sucesso().as_deref(), Some("🎉 Matrícula criada!"));
    let corpo = backend.escritas()[0].corpo.clone().unwrap();
    assert_eq!(corpo["aluno"], json!({ "id": 2 }));
    assert_eq!(corpo["turma"], json!({ "id": 8 }));
}

#[tokio::test]
async fn rejeicao_com_listas_indisponiveis_mostra_erro_do_backend() {
    let backend = BackendFalso::iniciar().await;
    backend.responder(Method::POST, "/api/matriculas", 422, json!({}));

    let resp = post_form(backend.app(), "/matriculas/salvar", &formulario("8", "15/01/2025")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Turma sem vagas."));
    assert!(!resp.html.contains("Selecione o aluno."));
    // As escolhas continuam no formulário, mesmo sem as listas.
    assert!(resp.html.contains(r#"<option value="2" selected>#2</option>"#));
}

#[tokio::test]
async fn falha_ao_excluir_com_listas_indisponiveis_mantem_confirmacao() {
    let backend = BackendFalso::iniciar().await;
    backend.responder(Method::DELETE, "/api/matriculas/5", 500, json!({}));

    let resp = post_form(backend.app(), "/matriculas/5/excluir", &[]).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.html.contains("Erro ao excluir matrícula."));
    assert!(resp.html.contains("Confirmar exclusão"));
    assert!(resp.html.contains("Excluir a matrícula #5?"));
}
