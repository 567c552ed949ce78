// src/services/aluno_service.rs
use crate::{
    error::ApiError,
    models::{
        aluno::{self, Aluno, AlunoApi, AlunoPayload},
        situacao::Situacao,
    },
    services::api_client::{metodo_e_caminho, ApiClient, Gravacao},
};

const ALUNOS: &str = "/api/alunos";

pub const ERRO_CARREGAR_STATUS: &str =
    "Não foi possível carregar a lista de status. Nada foi gravado, tente novamente.";

pub async fn listar(api: &ApiClient) -> Result<Vec<Aluno>, ApiError> {
    let lista: Vec<AlunoApi> = api.buscar(ALUNOS).await?;
    Ok(lista.into_iter().map(Aluno::from).collect())
}

pub async fn listar_status(api: &ApiClient) -> Result<Vec<Situacao>, ApiError> {
    api.buscar("/api/status").await
}

/// Lista e status em paralelo; cada um degrada para lista vazia de forma independente.
pub async fn carregar(api: &ApiClient) -> (Vec<Aluno>, Vec<Situacao>) {
    let (alunos, status) = tokio::join!(listar(api), listar_status(api));
    let alunos = alunos.unwrap_or_else(|e| {
        tracing::error!("Falha ao carregar alunos: {}", e);
        Vec::new()
    });
    let status = status.unwrap_or_else(|e| {
        tracing::error!("Falha ao carregar status: {}", e);
        Vec::new()
    });
    (alunos, status)
}

pub async fn submeter(api: &ApiClient, a: &Aluno) -> Result<Gravacao, String> {
    aluno::validar(a).map_err(|msg| {
        tracing::warn!("Aluno rejeitado na validação: {}", msg);
        msg.to_string()
    })?;

    let (metodo, caminho) = metodo_e_caminho(ALUNOS, a.id);
    match api.enviar(metodo, &caminho, &AlunoPayload::from(a)).await {
        Ok(()) => {
            tracing::info!("Aluno '{}' gravado.", a.nome);
            Ok(Gravacao::de(a.id))
        }
        Err(e) => {
            tracing::error!("Erro ao salvar aluno '{}': {}", a.nome, e);
            Err("Erro ao salvar aluno.".to_string())
        }
    }
}

pub fn mensagem_sucesso(gravacao: Gravacao) -> &'static str {
    match gravacao {
        Gravacao::Criado => "🎉 Aluno cadastrado com sucesso!",
        Gravacao::Atualizado => "✅ Aluno atualizado com sucesso!",
    }
}
